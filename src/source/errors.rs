use std::io;

use thiserror::Error;

use crate::source::Sheet;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source error: Could not read sheet [{sheet}] | {source}")]
    Read {
        sheet: Sheet,
        source: csv::Error
    },
    #[error("Source error: Could not read locations | {0}")]
    Locations(#[from] csv::Error),
    #[error("Source error: {0}")]
    Io(#[from] io::Error)
}
