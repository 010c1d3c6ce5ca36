use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::metrics::checked_sum;
use crate::metrics::errors::MetricsError;
use crate::models::{Record, Status};

pub const DEFAULT_OVERDUE_DAYS: i64 = 30;
const FORECAST_WINDOW_DAYS: i64 = 90;
const FORECAST_MONTH_DAYS: i64 = 30;

/// Pending schedule entry that has waited longer than the overdue threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverduePayment {
    pub date: NaiveDate,
    pub doctor: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub amount: Decimal,
    pub days_pending: i64
}

/// Per doctor totals backing the income breakdown and comparison charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorStats {
    pub doctor: String,
    pub total: Decimal,
    pub average: Decimal,
    pub count: usize
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// Calendar month as `YYYY-MM`.
    pub month: String,
    pub total: Decimal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineSeries {
    Received,
    Pending,
    Projected
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub series: TimelineSeries
}

/// Estimates next month's income from the daily average of the last 90 days.
///
/// Payments dated on or after `today - 90 days` count towards the window,
/// so future-dated entries are included. Returns zero when nothing qualifies.
pub fn forecast_next_month(payments: &[Record], today: NaiveDate) -> Decimal {
    let window_start = today - Duration::days(FORECAST_WINDOW_DAYS);
    let recent: Vec<&Record> = payments
        .iter()
        .filter(|record| record.date.is_some_and(|date| date >= window_start))
        .collect();

    if recent.is_empty() {
        return Decimal::ZERO;
    }

    let forecast = checked_sum(recent, "forecast_next_month").and_then(|total| {
        total
            .checked_mul(Decimal::from(FORECAST_MONTH_DAYS))
            .and_then(|scaled| scaled.checked_div(Decimal::from(FORECAST_WINDOW_DAYS)))
            .ok_or(MetricsError::Overflow { metric: "forecast_next_month" })
    });

    match forecast {
        Ok(value) => value.round_dp(2),
        Err(error) => {
            warn!("{error}, reporting zero forecast");
            Decimal::ZERO
        }
    }
}

/// Lists pending entries older than `threshold_days`, longest waiting first.
///
/// Entries without a date cannot age and are left out.
pub fn overdue_pending(schedule: &[Record], today: NaiveDate, threshold_days: i64) -> Vec<OverduePayment> {
    let mut overdue: Vec<OverduePayment> = schedule
        .iter()
        .filter(|record| record.has_status(&Status::Pending))
        .filter_map(|record| {
            let date = record.date?;
            let days_pending = (today - date).num_days();

            (days_pending > threshold_days).then(|| OverduePayment {
                date,
                doctor: record.doctor.clone(),
                record_type: record.record_type.clone(),
                amount: record.amount_or_zero(),
                days_pending
            })
        })
        .collect();

    overdue.sort_by(|left, right| right.days_pending.cmp(&left.days_pending));
    overdue
}

/// Groups records by doctor, sorted by doctor label. Records without a doctor are skipped.
pub fn doctor_stats(records: &[Record]) -> Vec<DoctorStats> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();

    for record in records {
        if let Some(doctor) = record.doctor.as_deref() {
            groups.entry(doctor).or_default().push(record);
        }
    }

    let mut stats = Vec::with_capacity(groups.len());

    for (doctor, group) in groups {
        let with_amount = group.iter().filter(|record| record.amount.is_some()).count();
        let total = match checked_sum(group.iter().copied(), "doctor_total") {
            Ok(total) => total,
            Err(error) => {
                warn!("{error} for doctor [{doctor}], reporting zero");
                Decimal::ZERO
            }
        };
        let average = if with_amount == 0 {
            Decimal::ZERO
        } else {
            total.checked_div(Decimal::from(with_amount)).unwrap_or(Decimal::ZERO).round_dp(2)
        };

        stats.push(DoctorStats {
            doctor: doctor.to_string(),
            total,
            average,
            count: group.len()
        });
    }

    stats
}

/// Totals dated records per calendar month, oldest month first.
pub fn monthly_trend(records: &[Record]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), Vec<&Record>> = BTreeMap::new();

    for record in records {
        if let Some(date) = record.date {
            months.entry((date.year(), date.month())).or_default().push(record);
        }
    }

    months
        .into_iter()
        .map(|((year, month), group)| MonthlyTotal {
            month: format!("{year:04}-{month:02}"),
            total: checked_sum(group, "monthly_total").unwrap_or_else(|error| {
                warn!("{error} for [{year:04}-{month:02}], reporting zero");
                Decimal::ZERO
            })
        })
        .collect()
}

/// Merges received payments with pending and projected schedule entries into one dated series.
pub fn payment_timeline(payments: &[Record], schedule: &[Record]) -> Vec<TimelinePoint> {
    let received = payments.iter().map(|record| (record, TimelineSeries::Received));
    let scheduled = schedule.iter().filter_map(|record| match record.status {
        Some(Status::Pending) => Some((record, TimelineSeries::Pending)),
        Some(Status::Projected) => Some((record, TimelineSeries::Projected)),
        _ => None
    });

    let mut points: Vec<TimelinePoint> = received
        .chain(scheduled)
        .filter_map(|(record, series)| {
            record.date.map(|date| TimelinePoint {
                date,
                amount: record.amount_or_zero(),
                series
            })
        })
        .collect();

    points.sort_by_key(|point| point.date);
    points
}

/// Keeps records dated within `start..=end`. Undated records are dropped.
pub fn filter_by_date_range(records: &[Record], start: NaiveDate, end: NaiveDate) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.date.is_some_and(|date| date >= start && date <= end))
        .cloned()
        .collect()
}
