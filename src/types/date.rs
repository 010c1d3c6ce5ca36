use crate::types::errors::ParseError;
use chrono::NaiveDate;

//NOTE: Day-first formats come before ISO; the sheets are maintained in day/month/year.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// Parses a calendar date cell, trying each accepted format in order.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ParseError::Empty);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| ParseError::InvalidDate(value.to_string()))
}
