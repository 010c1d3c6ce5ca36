use std::io::Write;

use chrono::{Duration, NaiveDate};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cache::SnapshotCache;
use crate::dashboard::Report;
use crate::metrics::{
    doctor_stats, filter_by_date_range, forecast_next_month, monthly_trend, overdue_pending, payment_timeline,
    total_amount, DoctorStats, MetricsSummary, MonthlyTotal, OverduePayment, TimelinePoint, DEFAULT_OVERDUE_DAYS
};
use crate::models::{Location, Record};
use crate::source::SheetSource;

pub const ALL_LOCATIONS: &str = "All";
/// Default view window, relative to today: 90 days back, 180 days ahead.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 90;
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 180;

/// One row of the summary report: the metric cards for a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub location: String,
    pub total_received: Decimal,
    pub month_received: Decimal,
    pub pending: Decimal,
    pub projected: Decimal,
    pub avg_payment: Decimal,
    pub payment_count: usize,
    pub expenses: Decimal,
    pub forecast_next_month: Decimal
}

impl SummaryRow {
    fn new(location: &str, metrics: MetricsSummary, expenses: Decimal, forecast_next_month: Decimal) -> Self {
        Self {
            location: location.to_string(),
            total_received: metrics.total_received,
            month_received: metrics.month_received,
            pending: metrics.pending,
            projected: metrics.projected,
            avg_payment: metrics.avg_payment.round_dp(2),
            payment_count: metrics.payment_count,
            expenses,
            forecast_next_month
        }
    }
}

/// Read side of the dashboard: every view is computed from the cached snapshot on request.
///
/// Every view can be narrowed to one location. The record-level views
/// (payments, doctors, monthly, timeline) are also limited to a date window,
/// which follows today unless pinned with [`PracticeDashboard::with_date_range`].
pub struct PracticeDashboard<S: SheetSource> {
    cache: SnapshotCache<S>,
    locations: Vec<Location>,
    overdue_days: i64,
    date_range: Option<(NaiveDate, NaiveDate)>
}

impl<S: SheetSource> PracticeDashboard<S> {
    pub fn new(cache: SnapshotCache<S>, locations: Vec<Location>) -> Self {
        Self {
            cache,
            locations,
            overdue_days: DEFAULT_OVERDUE_DAYS,
            date_range: None
        }
    }

    pub fn with_overdue_threshold(mut self, days: i64) -> Self {
        self.overdue_days = days;
        self
    }

    /// Pins the view window to `start..=end`.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Looks up a configured location by name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }

    /// The window applied to record-level views as of `today`.
    pub fn date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        self.date_range.unwrap_or_else(|| {
            (today - Duration::days(DEFAULT_LOOKBACK_DAYS), today + Duration::days(DEFAULT_LOOKAHEAD_DAYS))
        })
    }

    /// Discards the cached snapshot; the next view reloads every sheet.
    pub fn refresh(&self) {
        info!("Refreshing dashboard data");
        self.cache.invalidate();
    }

    /// Metric cards for one location, or the whole practice when `location` is `None`.
    pub async fn summary(&self, location: Option<&Location>, today: NaiveDate) -> SummaryRow {
        let snapshot = self.cache.get_or_fetch().await;
        let payments = scoped(&snapshot.payments, location);
        let schedule = scoped(&snapshot.schedule, location);
        let expenses = scoped(&snapshot.expenses, location);
        let name = location.map_or(ALL_LOCATIONS, |location| location.name.as_str());

        SummaryRow::new(
            name,
            MetricsSummary::calculate(&payments, &schedule, today),
            total_amount(&expenses),
            forecast_next_month(&payments, today)
        )
    }

    /// The practice-wide row followed by one row per location.
    pub async fn summaries(&self, today: NaiveDate) -> Vec<SummaryRow> {
        let mut rows = vec![self.summary(None, today).await];

        for location in &self.locations {
            rows.push(self.summary(Some(location), today).await);
        }

        rows
    }

    pub async fn payments(&self, location: Option<&Location>, today: NaiveDate) -> Vec<Record> {
        self.windowed(&self.cache.get_or_fetch().await.payments, location, today)
    }

    /// Overdue entries are old by definition, so only the location applies.
    pub async fn overdue(&self, location: Option<&Location>, today: NaiveDate) -> Vec<OverduePayment> {
        let schedule = scoped(&self.cache.get_or_fetch().await.schedule, location);
        overdue_pending(&schedule, today, self.overdue_days)
    }

    pub async fn doctors(&self, location: Option<&Location>, today: NaiveDate) -> Vec<DoctorStats> {
        doctor_stats(&self.payments(location, today).await)
    }

    pub async fn monthly(&self, location: Option<&Location>, today: NaiveDate) -> Vec<MonthlyTotal> {
        monthly_trend(&self.payments(location, today).await)
    }

    pub async fn timeline(&self, location: Option<&Location>, today: NaiveDate) -> Vec<TimelinePoint> {
        let snapshot = self.cache.get_or_fetch().await;
        let payments = self.windowed(&snapshot.payments, location, today);
        let schedule = self.windowed(&snapshot.schedule, location, today);

        payment_timeline(&payments, &schedule)
    }

    /// Renders a report as CSV with a header row.
    ///
    /// With a location the summary holds that location's row only, and every
    /// other report is narrowed to it.
    pub async fn write_report<W: Write>(
        &self,
        report: Report,
        location: Option<&Location>,
        today: NaiveDate,
        output: W
    ) -> anyhow::Result<()> {
        let mut writer = Writer::from_writer(output);

        match (report, location) {
            (Report::Summary, None) => write_rows(&mut writer, self.summaries(today).await)?,
            (Report::Summary, Some(_)) => write_rows(&mut writer, vec![self.summary(location, today).await])?,
            (Report::Payments, _) => write_rows(&mut writer, self.payments(location, today).await)?,
            (Report::Overdue, _) => write_rows(&mut writer, self.overdue(location, today).await)?,
            (Report::Doctors, _) => write_rows(&mut writer, self.doctors(location, today).await)?,
            (Report::Monthly, _) => write_rows(&mut writer, self.monthly(location, today).await)?,
            (Report::Timeline, _) => write_rows(&mut writer, self.timeline(location, today).await)?
        }

        writer.flush()?;

        Ok(())
    }

    fn windowed(&self, records: &[Record], location: Option<&Location>, today: NaiveDate) -> Vec<Record> {
        let (start, end) = self.date_range(today);
        filter_by_date_range(&scoped(records, location), start, end)
    }
}

fn scoped(records: &[Record], location: Option<&Location>) -> Vec<Record> {
    match location {
        Some(location) => location.filter(records),
        None => records.to_vec()
    }
}

fn write_rows<W: Write, T: Serialize>(writer: &mut Writer<W>, rows: Vec<T>) -> csv::Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }

    Ok(())
}
