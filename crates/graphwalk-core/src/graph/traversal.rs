use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Trait for providing adjacency and labels to the traversal algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>>;
    fn label(&self, vertex: VertexId) -> Result<&str>;
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Graph::neighbors(self, vertex)
    }

    fn label(&self, vertex: VertexId) -> Result<&str> {
        Graph::label(self, vertex)
    }
}
