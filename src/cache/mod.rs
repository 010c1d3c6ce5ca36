pub mod errors;
mod snapshot;
mod snapshot_cache;
#[cfg(test)]
mod tests;

pub use snapshot::Snapshot;
pub use snapshot_cache::{SnapshotCache, DEFAULT_TTL};
