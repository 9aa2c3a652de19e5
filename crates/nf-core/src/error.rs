//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so construction failures surface unchanged.

use thiserror::Error;

use crate::geo::Axis;

/// Errors raised while constructing or validating core values.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("point id must not be empty")]
    EmptyId,

    #[error("point {id:?}: {axis} is missing")]
    MissingCoordinate { id: String, axis: Axis },

    #[error("point {id:?}: {axis} {value} is out of range or not finite")]
    InvalidCoordinate { id: String, axis: Axis, value: f64 },

    #[error("duplicate point id {0:?}")]
    DuplicateId(String),

    #[error("unknown facility type {0:?}")]
    UnknownFacilityType(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
