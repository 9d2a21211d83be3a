//! Graph-engine error type.

use thiserror::Error;

use rt_core::CityId;

/// Errors produced by `rt-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for a graph of {count} vertices")]
    VertexOutOfRange { vertex: CityId, count: usize },

    #[error("negative-weight cycle reachable from {origin}")]
    NegativeCycle { origin: CityId },
}

pub type GraphResult<T> = Result<T, GraphError>;
