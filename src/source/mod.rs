mod csv_source;
pub mod errors;
mod memory_source;

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::RawTable;
use crate::source::errors::SourceError;

pub use csv_source::{load_locations, CsvSheetSource};
pub use memory_source::MemorySheetSource;

/// The named tabs the dashboard reads from the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Payments,
    MasterIncome,
    Expenses
}

impl Sheet {
    pub const ALL: [Sheet; 3] = [Sheet::Payments, Sheet::MasterIncome, Sheet::Expenses];

    pub fn name(&self) -> &'static str {
        match self {
            Sheet::Payments => "Payments",
            Sheet::MasterIncome => "Master_Income",
            Sheet::Expenses => "Expenses"
        }
    }
}

impl Display for Sheet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

/// Read-only access to the spreadsheet backing the dashboard.
///
/// A sheet that does not exist must come back as an empty table, errors are
/// reserved for sheets that exist but cannot be read.
pub trait SheetSource: Send + Sync + 'static {
    fn fetch(&self, sheet: Sheet) -> Result<RawTable, SourceError>;
}
