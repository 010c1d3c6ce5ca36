mod breakdown;
pub mod errors;
mod summary;

pub use breakdown::{
    doctor_stats, filter_by_date_range, forecast_next_month, monthly_trend, overdue_pending, payment_timeline,
    DoctorStats, MonthlyTotal, OverduePayment, TimelinePoint, TimelineSeries, DEFAULT_OVERDUE_DAYS
};
pub use summary::{total_amount, MetricsSummary};

use rust_decimal::Decimal;

use crate::metrics::errors::MetricsError;
use crate::models::Record;

fn checked_sum<'a>(records: impl IntoIterator<Item = &'a Record>, metric: &'static str) -> Result<Decimal, MetricsError> {
    records
        .into_iter()
        .filter_map(|record| record.amount)
        .try_fold(Decimal::ZERO, |total, amount| {
            total.checked_add(amount).ok_or(MetricsError::Overflow { metric })
        })
}
