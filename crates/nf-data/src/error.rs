//! Error types for nf-data.

use thiserror::Error;

use nf_core::CoreError;

/// Errors that can occur while loading tables or writing output.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Invalid(#[from] CoreError),
}

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;
