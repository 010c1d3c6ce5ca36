use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache error: Snapshot fetch did not complete | {0}")]
    Fetch(String)
}
