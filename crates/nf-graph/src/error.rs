//! Graph-construction error type.

use thiserror::Error;

use nf_core::CoreError;

/// Errors produced by `nf-graph`.
///
/// An empty candidate set is not an error: it yields an empty [`EdgeSet`].
///
/// [`EdgeSet`]: crate::EdgeSet
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type GraphResult<T> = Result<T, GraphError>;
