use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{Column, RawTable, Record, Status};
use crate::types::{parse_amount, parse_date};

/// Header labels (lowercase) used across the sheets, mapped to their canonical column.
const COLUMN_ALIASES: [(&str, Column); 9] = [
    ("date", Column::Date),
    ("amount", Column::Amount),
    ("total earned", Column::Amount),
    ("doctor", Column::Doctor),
    ("doctor / location", Column::Doctor),
    ("type", Column::Type),
    ("patients seen / type", Column::Type),
    ("status", Column::Status),
    ("payment status", Column::Status)
];

/// Resolves a sheet header label to its canonical column, ignoring case and surrounding whitespace.
pub fn resolve_column(header: &str) -> Option<Column> {
    let label = header.trim().to_lowercase();

    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, column)| *column)
}

/// Converts a raw sheet into records, preserving row order.
///
/// Never fails: bad amounts become zero, bad dates become `None`, and columns
/// the sheet does not have leave the matching field `None` on every record.
/// Rows with only blank cells are skipped.
pub fn normalize(table: &RawTable) -> Vec<Record> {
    let positions = column_positions(&table.headers);
    let mut records = Vec::with_capacity(table.rows.len());

    for (index, row) in table.rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            debug!("Skipping blank row [{index}]");
            continue;
        }

        let cell = |column: Column| positions.get(&column).map(|&position| {
            row.get(position).map(String::as_str).unwrap_or("")
        });

        records.push(Record {
            date: cell(Column::Date).and_then(|raw| normalize_date(index, raw)),
            amount: cell(Column::Amount).map(|raw| normalize_amount(index, raw)),
            doctor: cell(Column::Doctor).map(|raw| raw.trim().to_string()),
            record_type: cell(Column::Type).map(|raw| raw.trim().to_string()),
            status: cell(Column::Status).map(Status::from_label)
        });
    }

    records
}

fn column_positions(headers: &[String]) -> HashMap<Column, usize> {
    let mut positions = HashMap::new();

    for (position, header) in headers.iter().enumerate() {
        if let Some(column) = resolve_column(header) {
            positions.entry(column).or_insert(position);
        }
    }

    positions
}

fn normalize_amount(index: usize, raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or_else(|error| {
        warn!("Row [{index}]: {error}, using zero");
        Decimal::ZERO
    })
}

fn normalize_date(index: usize, raw: &str) -> Option<NaiveDate> {
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(error) => {
            warn!("Row [{index}]: {error}, leaving date unset");
            None
        }
    }
}
