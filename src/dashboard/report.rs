use std::str::FromStr;

use crate::dashboard::errors::ReportError;

/// The views the dashboard can render as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Report {
    /// Headline metrics for every location plus the whole practice.
    #[default]
    Summary,
    /// Normalized payment records, for download.
    Payments,
    Overdue,
    Doctors,
    Monthly,
    Timeline
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "summary" => Ok(Report::Summary),
            "payments" => Ok(Report::Payments),
            "overdue" => Ok(Report::Overdue),
            "doctors" => Ok(Report::Doctors),
            "monthly" => Ok(Report::Monthly),
            "timeline" => Ok(Report::Timeline),
            _ => Err(ReportError::UnknownReport(value.to_string()))
        }
    }
}
