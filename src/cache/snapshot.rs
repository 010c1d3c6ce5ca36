use std::time::Instant;

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::models::Record;
use crate::normalizer::normalize;
use crate::source::{Sheet, SheetSource};

/// Normalized contents of every sheet, as loaded by one refresh.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub payments: Vec<Record>,
    /// Scheduled work and its payment status, from the `Master_Income` sheet.
    pub schedule: Vec<Record>,
    pub expenses: Vec<Record>,
    pub loaded_at: DateTime<Local>
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            payments: Vec::new(),
            schedule: Vec::new(),
            expenses: Vec::new(),
            loaded_at: Local::now()
        }
    }

    /// Fetches and normalizes every sheet. A sheet that fails to load is treated as empty.
    pub fn load<S: SheetSource + ?Sized>(source: &S) -> Self {
        let timer = Instant::now();
        let mut snapshot = Self::empty();

        for sheet in Sheet::ALL {
            let records = match source.fetch(sheet) {
                Ok(table) => normalize(&table),
                Err(error) => {
                    error!("{error}");
                    Vec::new()
                }
            };

            match sheet {
                Sheet::Payments => snapshot.payments = records,
                Sheet::MasterIncome => snapshot.schedule = records,
                Sheet::Expenses => snapshot.expenses = records
            }
        }

        info!(
            "Loaded snapshot in {:?}: {} payments, {} scheduled, {} expenses",
            timer.elapsed(),
            snapshot.payments.len(),
            snapshot.schedule.len(),
            snapshot.expenses.len()
        );

        snapshot
    }
}
