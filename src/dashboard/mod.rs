pub mod errors;
mod practice_dashboard;
mod report;

pub use practice_dashboard::{
    PracticeDashboard, SummaryRow, ALL_LOCATIONS, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_LOOKBACK_DAYS
};
pub use report::Report;
