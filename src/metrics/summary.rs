use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use crate::metrics::checked_sum;
use crate::metrics::errors::MetricsError;
use crate::models::{Record, Status};

/// Snapshot of the headline figures shown on the dashboard cards.
///
/// Always derived from records on request. The `Default` value is the
/// all-zero summary shown when nothing can be computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSummary {
    /// Sum of every payment amount.
    pub total_received: Decimal,
    /// Scheduled income still waiting on payment.
    pub pending: Decimal,
    /// Scheduled income expected in the future.
    pub projected: Decimal,
    /// Mean payment over payments with an amount.
    pub avg_payment: Decimal,
    /// Payments dated in the current calendar month.
    pub month_received: Decimal,
    pub payment_count: usize
}

impl MetricsSummary {
    /// Computes the summary as of `today`.
    ///
    /// Payments feed the received figures, schedule entries feed `pending`
    /// and `projected`. Any failure yields the zero summary instead of an error.
    pub fn calculate(payments: &[Record], schedule: &[Record], today: NaiveDate) -> Self {
        Self::try_calculate(payments, schedule, today).unwrap_or_else(|error| {
            warn!("{error}, reporting zero metrics");
            Self::default()
        })
    }

    /// Computes the summary as of the local calendar date.
    pub fn calculate_now(payments: &[Record], schedule: &[Record]) -> Self {
        Self::calculate(payments, schedule, Local::now().date_naive())
    }

    fn try_calculate(payments: &[Record], schedule: &[Record], today: NaiveDate) -> Result<Self, MetricsError> {
        let total_received = checked_sum(payments, "total_received")?;
        let month_received = checked_sum(
            payments.iter().filter(|record| record.is_in_month_of(today)),
            "month_received"
        )?;
        let pending = checked_sum(
            schedule.iter().filter(|record| record.has_status(&Status::Pending)),
            "pending"
        )?;
        let projected = checked_sum(
            schedule.iter().filter(|record| record.has_status(&Status::Projected)),
            "projected"
        )?;

        Ok(Self {
            total_received,
            pending,
            projected,
            avg_payment: average(payments)?,
            month_received,
            payment_count: payments.len()
        })
    }
}

/// Sum of amounts over any record set, zero when the sum cannot be represented.
pub fn total_amount(records: &[Record]) -> Decimal {
    checked_sum(records, "total_amount").unwrap_or_else(|error| {
        warn!("{error}, reporting zero");
        Decimal::ZERO
    })
}

fn average(records: &[Record]) -> Result<Decimal, MetricsError> {
    let count = records.iter().filter(|record| record.amount.is_some()).count();

    if count == 0 {
        return Ok(Decimal::ZERO);
    }

    checked_sum(records, "avg_payment")?
        .checked_div(Decimal::from(count))
        .ok_or(MetricsError::Overflow { metric: "avg_payment" })
}
