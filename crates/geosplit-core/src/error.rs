// crates/geosplit-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading the GeoNames dumps or writing JSON output.
///
/// Malformed input is never skipped: a missing column or a value that does
/// not convert aborts the job with [`GeoError::MissingField`] or
/// [`GeoError::InvalidNumber`], carrying the 1-based input line.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("line {line}: missing field `{field}` (column {index})")]
    MissingField {
        line: u64,
        index: usize,
        field: &'static str,
    },

    #[error("line {line}: invalid number for `{field}`: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;
