mod record_normalizer;

pub use record_normalizer::{normalize, resolve_column};
