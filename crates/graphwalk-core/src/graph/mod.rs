//! Graph store, loading and traversal
//!
//! Provides the in-memory graph and the algorithms that walk it:
//! - `Graph`: fixed-size 0/1 adjacency matrix with vertex labels
//! - `load`: plain-text graph description loader
//! - `algos`: depth-first and breadth-first predecessor trees
//! - `path`: predecessor-walk path reconstruction and rendering
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod display;
pub mod load;
pub mod path;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs, dfs, traverse};
pub use display::{render_graph, GraphSummary, VertexSummary};
pub use load::{load_graph_file, parse_graph};
pub use path::{print_path, reconstruct, render_path, write_path, PathResult};
pub use store::{Graph, VertexId};
pub use traversal::GraphProvider;
pub use types::{Predecessors, Strategy};
