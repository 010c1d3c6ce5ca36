use std::collections::HashSet;

use crate::models::Record;

/// A named practice site, identified by the doctor labels that work there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub doctors: HashSet<String>
}

impl Location {
    pub fn new(name: impl Into<String>, doctors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            doctors: doctors.into_iter().map(Into::into).collect()
        }
    }

    pub fn contains(&self, record: &Record) -> bool {
        match &record.doctor {
            Some(doctor) => self.doctors.contains(doctor),
            //NOTE: A record without a doctor column cannot be attributed, keep it rather than drop it
            None => true
        }
    }

    /// Keeps only records belonging to this location. Applying it twice yields the same set.
    pub fn filter(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|record| self.contains(record)).cloned().collect()
    }
}
