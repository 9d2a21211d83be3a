//! `rt-graph` — weighted city graph and the algorithms run over it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `Graph` (adjacency lists + edge list), `Edge`, `Neighbor` |
//! | [`traversal`] | BFS (`BfsTree`), recursive/iterative DFS, `tree_preorder` |
//! | [`mst`]       | Prim and Kruskal, `SpanningTree`                          |
//! | [`shortest`]  | Dijkstra, Bellman-Ford, `ShortestPaths`                   |
//! | [`router`]    | `Router` trait, `DijkstraRouter`                          |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod mst;
pub mod router;
pub mod shortest;
pub mod traversal;


pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Neighbor};
pub use mst::SpanningTree;
pub use router::{DijkstraRouter, Router};
pub use shortest::ShortestPaths;
pub use traversal::{BfsTree, tree_preorder};
