use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_out_of_range;
use crate::error::{GraphError, Result, VertexRole};
use crate::graph::VertexId;

/// Search-order policy for building a predecessor tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first: FIFO frontier, first discoverer wins
    Bfs,
    /// Depth-first: LIFO frontier, last pusher before first pop wins
    Dfs,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Bfs, Strategy::Dfs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
        }
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => Err(GraphError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one traversal run.
///
/// `get(v)` is the vertex that caused `v` to be reached, or `None` (the
/// "no predecessor" sentinel) for the source and for unreached vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    source: VertexId,
    strategy: Strategy,
    prev: Vec<Option<VertexId>>,
}

impl Predecessors {
    /// All-sentinel array of length `size` for a traversal from `source`.
    pub(crate) fn new(source: VertexId, strategy: Strategy, size: usize) -> Self {
        Self {
            source,
            strategy,
            prev: vec![None; size],
        }
    }

    /// Wrap a hand-built array, checking that every index is in range.
    pub fn from_parts(
        source: VertexId,
        strategy: Strategy,
        prev: Vec<Option<VertexId>>,
    ) -> Result<Self> {
        let size = prev.len();
        if source >= size {
            bail_out_of_range!(VertexRole::Source, source, size);
        }
        if let Some(&bad) = prev.iter().flatten().find(|&&p| p >= size) {
            bail_out_of_range!(VertexRole::Vertex, bad, size);
        }
        Ok(Self {
            source,
            strategy,
            prev,
        })
    }

    pub(crate) fn set(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.prev[vertex] = Some(predecessor);
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.prev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<VertexId>] {
        &self.prev
    }

    /// Predecessor of `vertex`, or `None` for the sentinel.
    pub fn get(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        match self.prev.get(vertex) {
            Some(&p) => Ok(p),
            None => bail_out_of_range!(VertexRole::Vertex, vertex, self.prev.len()),
        }
    }

    /// True for the source and for every vertex with a predecessor.
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        vertex == self.source || self.prev.get(vertex).is_some_and(Option::is_some)
    }

    /// Reached vertices in ascending order, source included.
    pub fn reached(&self) -> Vec<VertexId> {
        (0..self.prev.len()).filter(|&v| self.is_reached(v)).collect()
    }
}
