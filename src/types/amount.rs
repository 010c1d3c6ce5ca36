use crate::types::errors::ParseError;
use rust_decimal::Decimal;
use std::str::FromStr;

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Parses a spreadsheet currency cell such as `$1,234.56` or `(50.00)`.
///
/// Currency symbols, thousands separators, quotes and surrounding whitespace
/// are stripped before parsing. A value wrapped in parentheses is negative.
pub fn parse_amount(raw: &str) -> Result<Decimal, ParseError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && *c != '"' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(inner) = cleaned.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return decimal(inner.trim(), raw).map(|value| -value);
    }

    decimal(cleaned, raw)
}

fn decimal(value: &str, raw: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(value).map_err(|_| ParseError::InvalidAmount(raw.trim().to_string()))
}
