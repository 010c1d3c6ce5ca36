use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::task::spawn_blocking;
use tracing::{debug, error};

use crate::cache::errors::CacheError;
use crate::cache::Snapshot;
use crate::source::SheetSource;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Holds the most recent snapshot for a bounded time so interactions do not refetch the sheets.
///
/// The cache is all or nothing: it holds at most one snapshot, and both
/// expiry and [`SnapshotCache::invalidate`] drop it wholesale.
pub struct SnapshotCache<S: SheetSource> {
    source: Arc<S>,
    cache: Cache<(), Arc<Snapshot>>
}

impl<S: SheetSource> SnapshotCache<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            cache: Self::build(DEFAULT_TTL)
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache = Self::build(ttl);
        self
    }

    /// Returns the cached snapshot, loading it from the source when absent or expired.
    ///
    /// A load that cannot complete is logged and answered with an empty
    /// snapshot, which is not cached.
    pub async fn get_or_fetch(&self) -> Arc<Snapshot> {
        let source = self.source.clone();

        let result = self.cache.try_get_with((), async move {
            debug!("Snapshot cache miss, fetching sheets");

            spawn_blocking(move || Snapshot::load(source.as_ref()))
                .await
                .map(Arc::new)
                .map_err(|error| CacheError::Fetch(error.to_string()))
        }).await;

        result.unwrap_or_else(|error| {
            error!("{error}");
            Arc::new(Snapshot::empty())
        })
    }

    /// Drops the cached snapshot so the next read fetches fresh data.
    pub fn invalidate(&self) {
        debug!("Snapshot cache invalidated");
        self.cache.invalidate_all();
    }

    fn build(ttl: Duration) -> Cache<(), Arc<Snapshot>> {
        Cache::builder()
            .time_to_live(ttl)
            .build()
    }
}
