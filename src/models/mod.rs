mod location;
mod raw_table;
mod record;
#[cfg(test)]
mod tests;

use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use location::Location;
pub use raw_table::RawTable;
pub use record::Record;

/// Status bucket of a scheduled income entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Paid,
    Pending,
    Projected,
    Other(String)
}

impl Status {
    /// Maps a free-text status cell onto a bucket.
    ///
    /// Decorations such as `✓ ` or ` ⏳` on either side are ignored, the
    /// remaining label must match exactly.
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim_matches(|c: char| !c.is_alphanumeric());

        match label {
            "Paid" => Status::Paid,
            "Pending" => Status::Pending,
            "Projected" => Status::Projected,
            _ => Status::Other(raw.trim().to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Paid => "Paid",
            Status::Pending => "Pending",
            Status::Projected => "Projected",
            Status::Other(label) => label
        }
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Canonical columns every sheet is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Amount,
    Doctor,
    Type,
    Status
}
