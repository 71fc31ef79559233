use derive_more::Display;
use serde::Serialize;

/// Structural failures that abort a whole parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    TooFewLines { found: usize, required: usize },
    HeaderMismatch { expected: Vec<String>, got: Vec<String> },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::TooFewLines { .. } => {
                write!(f, "CSV must have a header and at least one data row.")
            }
            ParseError::HeaderMismatch { expected, got } => write!(
                f,
                "CSV header mismatch. Expected: {}\nGot: {}",
                expected.join(","),
                got.join(",")
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Reason a single data row was skipped.
#[derive(Debug, Clone, PartialEq, Display, Serialize)]
pub enum RowError {
    #[display(fmt = "expected at least {} columns, found {}", expected, found)]
    TooFewColumns { expected: usize, found: usize },
    #[display(fmt = "invalid date format: {}", _0)]
    InvalidDate(String),
    #[display(fmt = "invalid numeric value in column {}", _0)]
    InvalidNumber(&'static str),
    #[display(fmt = "minimum ({}) > maximum ({})", low, high)]
    InvertedRange { low: f64, high: f64 },
    #[display(fmt = "{} ({}) outside [{}, {}]", column, value, low, high)]
    PriceOutOfRange { column: &'static str, value: f64, low: f64, high: f64 },
}

impl std::error::Error for RowError {}

/// Application-level error wrapper.
#[derive(Debug, Clone, Display)]
pub enum AppError {
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(ParseError),
    #[display(fmt = "Serialization Error: {}", _0)]
    Serialization(String),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
}

impl std::error::Error for AppError {}

impl From<ParseError> for AppError {
    fn from(error: ParseError) -> Self {
        AppError::Parse(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
