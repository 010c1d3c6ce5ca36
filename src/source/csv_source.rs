use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{Location, RawTable};
use crate::source::errors::SourceError;
use crate::source::{Sheet, SheetSource};

/// Reads each sheet from `<directory>/<sheet name>.csv`, the layout of a spreadsheet exported tab by tab.
pub struct CsvSheetSource {
    directory: PathBuf
}

impl CsvSheetSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into()
        }
    }

    pub fn sheet_path(&self, sheet: Sheet) -> PathBuf {
        self.directory.join(format!("{}.csv", sheet.name()))
    }
}

impl SheetSource for CsvSheetSource {
    fn fetch(&self, sheet: Sheet) -> Result<RawTable, SourceError> {
        let path = self.sheet_path(sheet);

        if !path.exists() {
            warn!("Sheet [{sheet}] not found at path: {}", path.display());
            return Ok(RawTable::default());
        }

        let file = File::open(&path)?;

        //NOTE: Sheets are read as a raw grid so header aliasing stays with the normalizer
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut grid: Vec<Vec<String>> = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|source| SourceError::Read { sheet, source })?;
            grid.push(record.iter().map(str::to_string).collect());
        }

        debug!("Read {} rows from sheet [{sheet}]", grid.len());

        Ok(RawTable::from_grid(grid))
    }
}

/// One `location,doctor` row of the locations file.
#[derive(Debug, Deserialize)]
struct LocationRow {
    location: String,
    doctor: String
}

/// Loads location groupings from a `location,doctor` CSV. A missing file means no locations.
///
/// Locations are returned in name order.
pub fn load_locations(path: &Path) -> Result<Vec<Location>, SourceError> {
    if !path.exists() {
        debug!("No locations file at path: {}", path.display());
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(File::open(path)?));

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for result in reader.deserialize::<LocationRow>() {
        let row = result?;
        grouped.entry(row.location).or_default().push(row.doctor);
    }

    Ok(grouped.into_iter().map(|(name, doctors)| Location::new(name, doctors)).collect())
}
