//! Weighted graph representation.
//!
//! # Data layout
//!
//! Two parallel views of the same edges are kept:
//!
//! - `adjacency[v]`: outgoing `(neighbor, weight)` pairs of `v`, in the
//!   order they were added.  Traversals and Dijkstra walk this.
//! - `edges`: flat `(from, to, weight)` triples.  Bellman-Ford and Kruskal
//!   scan this.
//!
//! An undirected edge is stored as two directed entries: it appears in both
//! endpoints' adjacency lists and twice in `edges` (once per direction).
//! Unlike a CSR layout the adjacency lists are growable, so edges can be
//! appended at any time without a separate build step.

use rt_core::CityId;

use crate::{GraphError, GraphResult};

/// An outgoing adjacency entry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub to:     CityId,
    /// Map distance in miles.
    pub weight: f64,
}

/// A directed edge triple.  Also used for MST results.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   CityId,
    pub to:     CityId,
    pub weight: f64,
}

/// Weighted graph over a fixed vertex set `0..n`.
///
/// # Example
///
/// ```
/// use rt_core::CityId;
/// use rt_graph::Graph;
///
/// let mut g = Graph::new(2);
/// g.add_road(CityId(0), CityId(1), 300.0).unwrap();
/// assert_eq!(g.edge_count(), 2); // both directions
/// assert_eq!(g.direct_weight(CityId(1), CityId(0)), Some(300.0));
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adjacency: Vec<Vec<Neighbor>>,
    edges:     Vec<Edge>,
}

impl Graph {
    /// Graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges:     Vec::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed entries in the edge list (an undirected edge
    /// counts twice).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append an edge `u → v`, plus `v → u` when `undirected` is set.
    pub fn add_edge(&mut self, u: CityId, v: CityId, weight: f64, undirected: bool) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.adjacency[u.index()].push(Neighbor { to: v, weight });
        self.edges.push(Edge { from: u, to: v, weight });
        if undirected {
            self.adjacency[v.index()].push(Neighbor { to: u, weight });
            self.edges.push(Edge { from: v, to: u, weight });
        }
        Ok(())
    }

    /// Convenience: add an undirected road between `a` and `b`.
    pub fn add_road(&mut self, a: CityId, b: CityId, miles: f64) -> GraphResult<()> {
        self.add_edge(a, b, miles, true)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Outgoing entries of `v` in insertion order.  Empty for an unknown
    /// vertex.
    #[inline]
    pub fn neighbors(&self, v: CityId) -> &[Neighbor] {
        self.adjacency
            .get(v.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the first `u → v` entry in `u`'s adjacency list, if any.
    pub fn direct_weight(&self, u: CityId, v: CityId) -> Option<f64> {
        self.neighbors(u)
            .iter()
            .find(|n| n.to == v)
            .map(|n| n.weight)
    }

    pub fn contains_vertex(&self, v: CityId) -> bool {
        v.index() < self.vertex_count()
    }

    /// `Ok` if `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: CityId) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex: v, count: self.vertex_count() })
        }
    }
}
