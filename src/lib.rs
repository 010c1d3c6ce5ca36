//! Metrics core of the practice payment dashboard.
//!
//! Raw sheets from a [`source::SheetSource`] are normalized into
//! [`models::Record`]s, cached as a [`cache::Snapshot`], and aggregated into
//! the figures the dashboard displays per practice location.

pub mod cache;
pub mod dashboard;
pub mod metrics;
pub mod models;
pub mod normalizer;
pub mod source;
pub mod types;
