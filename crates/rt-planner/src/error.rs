use rt_core::{CityId, CoreError, DateWindow};
use rt_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("route cannot be completed within {window}")]
    NoFeasibleWindow { window: DateWindow },

    #[error("no path from {from} to {to}")]
    Unreachable { from: CityId, to: CityId },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
