//! Layout error type.

use thiserror::Error;

/// Errors produced by `nf-layout`.
///
/// Projection itself never fails; only an unusable target range is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("invalid target range ({min}, {max}): need finite bounds with min < max")]
    InvalidRange { min: f64, max: f64 },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
