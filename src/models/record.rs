use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Status;

/// One normalized row of financial activity: a payment, a scheduled income entry or an expense.
///
/// Fields are `None` when the source sheet has no such column. A present but
/// unparseable amount is zero, a present but unparseable date is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Record {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    /// The earner, which doubles as the practice location label.
    pub doctor: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub status: Option<Status>
}

impl Record {
    /// Amount with a missing value read as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    pub fn has_status(&self, status: &Status) -> bool {
        self.status.as_ref() == Some(status)
    }

    pub fn is_in_month_of(&self, day: NaiveDate) -> bool {
        self.date
            .is_some_and(|date| date.year() == day.year() && date.month() == day.month())
    }
}
