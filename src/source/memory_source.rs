use dashmap::DashMap;
use std::sync::Arc;

use crate::models::RawTable;
use crate::source::errors::SourceError;
use crate::source::{Sheet, SheetSource};

/// In-memory sheets, for embedding callers that already hold the grid and for tests.
pub struct MemorySheetSource {
    sheets: Arc<DashMap<Sheet, RawTable>>
}

impl MemorySheetSource {
    pub fn new() -> Self {
        Self {
            sheets: Arc::new(DashMap::new())
        }
    }

    /// Replaces the contents of a sheet.
    pub fn put(&self, sheet: Sheet, table: RawTable) {
        self.sheets.insert(sheet, table);
    }

    pub fn remove(&self, sheet: Sheet) -> Option<RawTable> {
        self.sheets.remove(&sheet).map(|(_, table)| table)
    }
}

impl Default for MemorySheetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetSource for MemorySheetSource {
    fn fetch(&self, sheet: Sheet) -> Result<RawTable, SourceError> {
        Ok(self.sheets.get(&sheet).map(|table| table.value().clone()).unwrap_or_default())
    }
}
