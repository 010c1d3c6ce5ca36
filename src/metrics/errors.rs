use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Metrics error: Numeric overflow while computing [{metric}]")]
    Overflow {
        metric: &'static str
    }
}
