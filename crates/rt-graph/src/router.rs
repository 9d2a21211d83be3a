//! Routing trait used for shortest-path fallbacks.
//!
//! # Pluggability
//!
//! The trip simulator asks a [`Router`] for a distance whenever two
//! consecutive route cities share no direct edge.  Applications can swap in
//! a precomputed distance matrix or an A* implementation without touching the
//! simulator; the default [`DijkstraRouter`] runs a fresh Dijkstra per query.

use rt_core::CityId;

use crate::{Graph, GraphResult};

/// Pluggable shortest-distance oracle.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads during a parallel start-date search.
pub trait Router: Send + Sync {
    /// Shortest map distance in miles from `from` to `to`, or
    /// `f64::INFINITY` if `to` is unreachable.
    fn distance(&self, graph: &Graph, from: CityId, to: CityId) -> GraphResult<f64>;
}

/// Standard Dijkstra over the graph's adjacency lists.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn distance(&self, graph: &Graph, from: CityId, to: CityId) -> GraphResult<f64> {
        graph.dijkstra(from, to)
    }
}
