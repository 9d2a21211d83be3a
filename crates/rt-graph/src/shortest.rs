//! Weighted shortest paths: Dijkstra and Bellman-Ford.
//!
//! Distances are `f64` miles; an unreachable vertex has distance
//! `f64::INFINITY`.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rt_core::CityId;

use crate::{GraphError, GraphResult, Graph};

/// Single-source result of Bellman-Ford.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub source:    CityId,
    pub distances: Vec<f64>,
    /// Predecessor on the best known path; `None` for the source and for
    /// unreached vertices.
    pub parents:   Vec<Option<CityId>>,
}

impl ShortestPaths {
    #[inline]
    pub fn distance(&self, v: CityId) -> f64 {
        self.distances.get(v.index()).copied().unwrap_or(f64::INFINITY)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Min-heap entry.  Secondary key `CityId` keeps pop order deterministic.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost:   f64,
    vertex: CityId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Graph {
    /// Shortest weighted distance from `source` to `target`.
    ///
    /// Returns `f64::INFINITY` if `target` is unreachable.  Assumes
    /// non-negative weights.
    pub fn dijkstra(&self, source: CityId, target: CityId) -> GraphResult<f64> {
        self.check_vertex(target)?;
        let dist = self.dijkstra_until(source, Some(target))?;
        Ok(dist[target.index()])
    }

    /// Shortest weighted distances from `source` to every vertex.
    pub fn dijkstra_all(&self, source: CityId) -> GraphResult<Vec<f64>> {
        self.dijkstra_until(source, None)
    }

    /// Core loop.  Stops as soon as `target` is settled, leaving other
    /// entries of the returned vector as upper bounds.
    fn dijkstra_until(&self, source: CityId, target: Option<CityId>) -> GraphResult<Vec<f64>> {
        self.check_vertex(source)?;

        let mut dist = vec![f64::INFINITY; self.vertex_count()];
        dist[source.index()] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Frontier { cost: 0.0, vertex: source }));

        while let Some(Reverse(Frontier { cost, vertex })) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist[vertex.index()] {
                continue;
            }
            if Some(vertex) == target {
                break;
            }

            for nb in self.neighbors(vertex) {
                let next = cost + nb.weight;
                if next < dist[nb.to.index()] {
                    dist[nb.to.index()] = next;
                    heap.push(Reverse(Frontier { cost: next, vertex: nb.to }));
                }
            }
        }

        Ok(dist)
    }

    // ── Bellman-Ford ──────────────────────────────────────────────────────

    /// Single-source shortest paths tolerating negative weights.
    ///
    /// Relaxes the whole edge list up to `n - 1` times, stopping early after
    /// a pass with no update.  A further improvement found by one extra scan
    /// means a negative cycle is reachable from `source`.
    pub fn bellman_ford(&self, source: CityId) -> GraphResult<ShortestPaths> {
        self.check_vertex(source)?;

        let n = self.vertex_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut parents   = vec![None; n];
        distances[source.index()] = 0.0;

        for _ in 0..n.saturating_sub(1) {
            let mut updated = false;
            for e in self.edges() {
                let via = distances[e.from.index()] + e.weight;
                if distances[e.from.index()].is_finite() && via < distances[e.to.index()] {
                    distances[e.to.index()] = via;
                    parents[e.to.index()] = Some(e.from);
                    updated = true;
                }
            }
            if !updated {
                break;
            }
        }

        let improvable = self.edges().iter().any(|e| {
            distances[e.from.index()].is_finite()
                && distances[e.from.index()] + e.weight < distances[e.to.index()]
        });
        if improvable {
            return Err(GraphError::NegativeCycle { origin: source });
        }

        Ok(ShortestPaths { source, distances, parents })
    }
}
