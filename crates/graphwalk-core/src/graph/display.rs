//! Diagnostic rendering of a loaded graph

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, VertexId};

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.is_symmetric() { "edges" } else { "arcs" };
        writeln!(
            f,
            "graph: {} vertices, {} {}",
            self.size(),
            self.edge_count(),
            noun
        )?;
        for (vertex, label) in self.labels().iter().enumerate() {
            write!(f, "{}:", label)?;
            for n in self.neighbors(vertex).map_err(|_| fmt::Error)? {
                write!(f, " {}", self.labels()[n])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Human-readable dump of `graph`, one adjacency line per vertex.
pub fn render_graph(graph: &Graph) -> String {
    graph.to_string()
}

/// One vertex in a [`GraphSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct VertexSummary {
    pub index: VertexId,
    pub label: String,
    pub neighbors: Vec<VertexId>,
}

/// Machine-readable form of a graph for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub size: usize,
    pub edges: usize,
    pub symmetric: bool,
    pub vertices: Vec<VertexSummary>,
}

impl GraphSummary {
    pub fn from_graph(graph: &Graph) -> crate::error::Result<Self> {
        let vertices = graph
            .labels()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                Ok(VertexSummary {
                    index,
                    label: label.clone(),
                    neighbors: graph.neighbors(index)?,
                })
            })
            .collect::<crate::error::Result<Vec<_>>>()?;

        Ok(Self {
            size: graph.size(),
            edges: graph.edge_count(),
            symmetric: graph.is_symmetric(),
            vertices,
        })
    }
}
