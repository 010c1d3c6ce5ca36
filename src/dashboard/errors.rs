use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown report '{0}', expected one of: summary, payments, overdue, doctors, monthly, timeline")]
    UnknownReport(String),
    #[error("Unknown location '{0}', check locations.csv")]
    UnknownLocation(String)
}
