//! Minimum spanning trees: lazy Prim and Kruskal with union-find.
//!
//! Both algorithms treat the graph as undirected.  On a disconnected graph
//! they return a spanning forest fragment and log a warning instead of
//! failing; callers can check [`SpanningTree::is_spanning`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::warn;

use rt_core::CityId;

use crate::{Edge, Graph, GraphResult};

/// MST edges in the order they were accepted, plus their total weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    pub edges:        Vec<Edge>,
    pub total_weight: f64,
}

impl SpanningTree {
    /// `true` if the tree connects all `vertex_count` vertices.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        vertex_count == 0 || self.edges.len() == vertex_count - 1
    }

    fn accept(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }
}

// ── Prim ──────────────────────────────────────────────────────────────────────

/// Heap entry for Prim: a candidate edge into `to`.  The seed entry for the
/// start vertex has no predecessor.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    weight: f64,
    from:   Option<CityId>,
    to:     CityId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Graph {
    /// Prim's algorithm grown from `start`.
    ///
    /// Candidate edges are pushed lazily; a popped entry whose target is
    /// already in the tree is discarded (no decrease-key).  Ties on weight
    /// are broken by source then target id.
    pub fn prim_mst(&self, start: CityId) -> GraphResult<SpanningTree> {
        self.check_vertex(start)?;

        let n = self.vertex_count();
        let mut in_tree = vec![false; n];
        let mut tree = SpanningTree::default();

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Candidate { weight: 0.0, from: None, to: start }));

        while let Some(Reverse(Candidate { weight, from, to })) = heap.pop() {
            if in_tree[to.index()] {
                continue;
            }
            in_tree[to.index()] = true;

            if let Some(from) = from {
                tree.accept(Edge { from, to, weight });
            }

            for nb in self.neighbors(to) {
                if !in_tree[nb.to.index()] {
                    heap.push(Reverse(Candidate { weight: nb.weight, from: Some(to), to: nb.to }));
                }
            }
        }

        if !tree.is_spanning(n) {
            warn!(
                start = %start,
                edges = tree.edges.len(),
                vertices = n,
                "Prim MST does not span the graph; graph may not be fully connected"
            );
        }
        Ok(tree)
    }

    // ── Kruskal ───────────────────────────────────────────────────────────

    /// Kruskal's algorithm over the de-duplicated undirected edge set.
    ///
    /// Parallel and reverse-direction entries collapse onto their unordered
    /// vertex pair, keeping the minimum weight.  Unique edges are sorted
    /// ascending by weight (stable, so first-seen pairs win ties) and
    /// accepted whenever they join two different components.
    pub fn kruskal_mst(&self) -> SpanningTree {
        let n = self.vertex_count();

        let mut slot_of: FxHashMap<(CityId, CityId), usize> = FxHashMap::default();
        let mut unique: Vec<Edge> = Vec::new();
        for e in self.edges() {
            let key = (e.from.min(e.to), e.from.max(e.to));
            match slot_of.get(&key) {
                Some(&i) => {
                    if e.weight < unique[i].weight {
                        unique[i].weight = e.weight;
                    }
                }
                None => {
                    slot_of.insert(key, unique.len());
                    unique.push(Edge { from: key.0, to: key.1, weight: e.weight });
                }
            }
        }
        unique.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut components = UnionFind::new(n);
        let mut tree = SpanningTree::default();
        for e in unique {
            if components.union(e.from.index(), e.to.index()) {
                tree.accept(e);
            }
        }

        if !tree.is_spanning(n) {
            warn!(
                edges = tree.edges.len(),
                vertices = n,
                "Kruskal MST does not span the graph; graph may not be fully connected"
            );
        }
        tree
    }
}

// ── Union-find ────────────────────────────────────────────────────────────────

/// Disjoint sets with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank:   Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress the walked path onto the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`.  Returns `false` if they were
    /// already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less    => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal   => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}
