use super::{Snapshot, SnapshotCache};
use crate::models::RawTable;
use crate::source::errors::SourceError;
use crate::source::{MemorySheetSource, Sheet, SheetSource};

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rust_decimal::Decimal;
use tokio::time::sleep;

/// Counts how many sheet reads reach the underlying source.
struct CountingSource {
    inner: MemorySheetSource,
    fetches: AtomicUsize
}

impl CountingSource {
    fn new(inner: MemorySheetSource) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0)
        }
    }

    fn snapshot_loads(&self) -> usize {
        self.fetches.load(Ordering::SeqCst) / Sheet::ALL.len()
    }
}

impl SheetSource for CountingSource {
    fn fetch(&self, sheet: Sheet) -> Result<RawTable, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(sheet)
    }
}

/// Fails every read of the payments sheet.
struct BrokenPaymentsSource;

impl SheetSource for BrokenPaymentsSource {
    fn fetch(&self, sheet: Sheet) -> Result<RawTable, SourceError> {
        match sheet {
            Sheet::Payments => Err(SourceError::Io(io::Error::other("quota exceeded"))),
            _ => Ok(schedule_table())
        }
    }
}

fn schedule_table() -> RawTable {
    RawTable::from_grid(vec![
        vec!["Date".to_string(), "Doctor".to_string(), "Amount".to_string(), "Status".to_string()],
        vec!["26/11/2024".to_string(), "Dr. Tripic".to_string(), "720".to_string(), "⏳ Pending".to_string()],
    ])
}

fn create_source() -> MemorySheetSource {
    let source = MemorySheetSource::new();
    source.put(Sheet::Payments, RawTable::from_grid(vec![
        vec!["Date".to_string(), "Amount".to_string()],
        vec!["18/11/2025".to_string(), "770".to_string()],
    ]));
    source.put(Sheet::MasterIncome, schedule_table());
    source
}

#[test]
fn test_snapshot_load_normalizes_every_sheet() {
    let snapshot = Snapshot::load(&create_source());

    assert_eq!(snapshot.payments.len(), 1);
    assert_eq!(snapshot.schedule.len(), 1);
    assert!(snapshot.expenses.is_empty());
    assert_eq!(snapshot.payments[0].amount, Some(Decimal::from(770)));
}

#[test]
fn test_snapshot_load_treats_failed_sheet_as_empty() {
    let snapshot = Snapshot::load(&BrokenPaymentsSource);

    assert!(snapshot.payments.is_empty());
    assert_eq!(snapshot.schedule.len(), 1);
}

#[tokio::test]
async fn test_cache_serves_repeat_reads_from_memory() -> Result<()> {
    let source = Arc::new(CountingSource::new(create_source()));
    let cache = SnapshotCache::new(source.clone());

    let first = cache.get_or_fetch().await;
    let second = cache.get_or_fetch().await;

    assert_eq!(source.snapshot_loads(), 1);
    assert!(Arc::ptr_eq(&first, &second));

    Ok(())
}

#[tokio::test]
async fn test_cache_refetches_after_invalidate() -> Result<()> {
    let inner = create_source();
    let source = Arc::new(CountingSource::new(inner));
    let cache = SnapshotCache::new(source.clone());

    assert_eq!(cache.get_or_fetch().await.payments.len(), 1);

    source.inner.remove(Sheet::Payments);
    assert_eq!(cache.get_or_fetch().await.payments.len(), 1);

    cache.invalidate();

    assert!(cache.get_or_fetch().await.payments.is_empty());
    assert_eq!(source.snapshot_loads(), 2);

    Ok(())
}

#[tokio::test]
async fn test_cache_expires_after_ttl() -> Result<()> {
    // Scenario: TTL 100ms. Read, sleep 200ms, read again.
    // Confirms: The expired snapshot is replaced by a fresh fetch.

    let source = Arc::new(CountingSource::new(create_source()));
    let cache = SnapshotCache::new(source.clone())
        .with_ttl(Duration::from_millis(100));

    cache.get_or_fetch().await;
    sleep(Duration::from_millis(200)).await;
    cache.get_or_fetch().await;

    assert_eq!(source.snapshot_loads(), 2);

    Ok(())
}
