//! Graph algorithm implementations
//!
//! Contains the two predecessor-tree traversals:
//! - `bfs`: Breadth-first search (shortest-hop tree)
//! - `dfs`: Stack-based depth-first search

pub mod bfs;
pub mod dfs;

pub use bfs::bfs;
pub use dfs::dfs;

use crate::error::{Result, VertexRole};
use crate::graph::types::{Predecessors, Strategy};
use crate::graph::{GraphProvider, VertexId};

/// Run the traversal selected by `strategy` from `source`.
pub fn traverse(
    provider: &dyn GraphProvider,
    source: VertexId,
    strategy: Strategy,
) -> Result<Predecessors> {
    match strategy {
        Strategy::Bfs => bfs(provider, source),
        Strategy::Dfs => dfs(provider, source),
    }
}

/// Fresh all-sentinel state for a traversal, after validating `source`.
fn start(
    provider: &dyn GraphProvider,
    source: VertexId,
    strategy: Strategy,
) -> Result<(Predecessors, Vec<bool>)> {
    let size = provider.vertex_count();
    if source >= size {
        crate::bail_out_of_range!(VertexRole::Source, source, size);
    }
    Ok((Predecessors::new(source, strategy, size), vec![false; size]))
}

/// Neighbors of `vertex`, rejecting any index the provider reports outside
/// the vertex range.
fn checked_neighbors(provider: &dyn GraphProvider, vertex: VertexId) -> Result<Vec<VertexId>> {
    let size = provider.vertex_count();
    let neighbors = provider.neighbors(vertex)?;
    if let Some(&bad) = neighbors.iter().find(|&&n| n >= size) {
        crate::bail_out_of_range!(VertexRole::Neighbor, bad, size);
    }
    Ok(neighbors)
}
