//! Error types for rt-data.

use thiserror::Error;

use rt_core::CoreError;
use rt_graph::GraphError;

/// Errors that can occur while loading input tables or exporting ledgers.
#[derive(Debug, Error)]
pub enum DataError {
    /// A row could not be deserialized or a field failed to parse.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;
