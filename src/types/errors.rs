use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: Value is an empty string")]
    Empty,
    #[error("Parse error: Invalid amount [{0}]")]
    InvalidAmount(String),
    #[error("Parse error: Invalid date [{0}]")]
    InvalidDate(String)
}
