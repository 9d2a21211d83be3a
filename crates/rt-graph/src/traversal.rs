//! Unweighted traversals: BFS hop distances and DFS visitation orders.
//!
//! Neighbors are always visited in adjacency-list order, so every traversal
//! here is deterministic for a given graph.

use std::collections::VecDeque;

use rt_core::CityId;

use crate::{Graph, GraphResult};

// ── BFS ───────────────────────────────────────────────────────────────────────

/// Breadth-first search tree rooted at `start`.
///
/// `hops[v]` is the number of edges on the shortest unweighted path from the
/// root, `parents[v]` the vertex that discovered `v`.  Unreached vertices have
/// `None` in both; the root has `hops = Some(0)` and `parents = None`.
#[derive(Clone, Debug, PartialEq)]
pub struct BfsTree {
    pub start:   CityId,
    pub hops:    Vec<Option<u32>>,
    pub parents: Vec<Option<CityId>>,
}

impl BfsTree {
    pub fn is_reached(&self, v: CityId) -> bool {
        self.hops.get(v.index()).is_some_and(Option::is_some)
    }

    /// Walk the parent chain from `v` back to the root.  Returns the path
    /// root-first, or `None` if `v` was not reached.
    pub fn path_to(&self, v: CityId) -> Option<Vec<CityId>> {
        if !self.is_reached(v) {
            return None;
        }
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.parents[cur.index()] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

impl Graph {
    /// Unweighted shortest-hop distances from `start`.  O(V + E).
    pub fn bfs(&self, start: CityId) -> GraphResult<BfsTree> {
        self.check_vertex(start)?;

        let n = self.vertex_count();
        let mut hops    = vec![None; n];
        let mut parents = vec![None; n];

        let mut queue = VecDeque::from([start]);
        hops[start.index()] = Some(0);

        while let Some(u) = queue.pop_front() {
            let next_hop = hops[u.index()].map_or(0, |h: u32| h + 1);
            for nb in self.neighbors(u) {
                if hops[nb.to.index()].is_none() {
                    hops[nb.to.index()] = Some(next_hop);
                    parents[nb.to.index()] = Some(u);
                    queue.push_back(nb.to);
                }
            }
        }

        Ok(BfsTree { start, hops, parents })
    }

    // ── DFS ───────────────────────────────────────────────────────────────

    /// Depth-first visitation order from `start`, by recursive descent.
    ///
    /// Recursion depth equals the longest DFS path, so very large graphs
    /// should use [`dfs_iterative`](Self::dfs_iterative), which produces the
    /// same order.
    pub fn dfs_recursive(&self, start: CityId) -> GraphResult<Vec<CityId>> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        self.descend(start, &mut visited, &mut order);
        Ok(order)
    }

    fn descend(&self, u: CityId, visited: &mut [bool], order: &mut Vec<CityId>) {
        visited[u.index()] = true;
        order.push(u);
        for nb in self.neighbors(u) {
            if !visited[nb.to.index()] {
                self.descend(nb.to, visited, order);
            }
        }
    }

    /// Depth-first visitation order from `start` using an explicit stack.
    ///
    /// Neighbors are pushed in reverse adjacency order and a vertex is marked
    /// visited when popped, so the pop sequence matches
    /// [`dfs_recursive`](Self::dfs_recursive) exactly.
    pub fn dfs_iterative(&self, start: CityId) -> GraphResult<Vec<CityId>> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            if visited[u.index()] {
                continue;
            }
            visited[u.index()] = true;
            order.push(u);
            for nb in self.neighbors(u).iter().rev() {
                if !visited[nb.to.index()] {
                    stack.push(nb.to);
                }
            }
        }

        Ok(order)
    }
}

// ── Tree routes ───────────────────────────────────────────────────────────────

/// Depth-first preorder of the tree described by `parents`, rooted at
/// `start`.
///
/// Children are visited in ascending vertex order.  Used to turn a BFS tree
/// into a single visiting order that covers every reached city.
pub fn tree_preorder(parents: &[Option<CityId>], start: CityId) -> Vec<CityId> {
    let mut children: Vec<Vec<CityId>> = vec![Vec::new(); parents.len()];
    for (v, p) in parents.iter().enumerate() {
        if let Some(slot) = p.and_then(|p| children.get_mut(p.index())) {
            slot.push(CityId(v as u32));
        }
    }

    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        order.push(u);
        if let Some(kids) = children.get(u.index()) {
            stack.extend(kids.iter().rev().copied());
        }
    }
    order
}
