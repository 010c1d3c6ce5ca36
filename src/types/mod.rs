mod amount;
mod date;
pub mod errors;

pub use amount::parse_amount;
pub use date::parse_date;
