//! Path reconstruction from a predecessor array

use std::io::{self, Write};

use serde::Serialize;

use crate::bail_out_of_range;
use crate::error::{GraphError, Result, VertexRole};
use crate::graph::types::{Predecessors, Strategy};
use crate::graph::{GraphProvider, VertexId};

/// Walk `prev` backward from `destination` to the sentinel and return the
/// vertices source-first.
///
/// A destination the traversal never reached has the sentinel itself, so the
/// result degenerates to `[destination]`. Use [`PathResult::found`] (or compare
/// the first element with `prev.source()`) to tell that case apart from a
/// real path.
pub fn reconstruct(prev: &Predecessors, destination: VertexId) -> Result<Vec<VertexId>> {
    if destination >= prev.len() {
        bail_out_of_range!(VertexRole::Destination, destination, prev.len());
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(vertex) = current {
        // A valid tree visits each vertex at most once on the way back.
        if path.len() == prev.len() {
            return Err(GraphError::CorruptPredecessors {
                reason: format!("cycle while walking back from vertex {}", destination),
            });
        }
        path.push(vertex);
        current = prev.get(vertex)?;
    }

    path.reverse();
    Ok(path)
}

/// Labels of `path` separated by single spaces, newline-terminated.
pub fn render_path(provider: &dyn GraphProvider, path: &[VertexId]) -> Result<String> {
    let labels = path
        .iter()
        .map(|&v| provider.label(v))
        .collect::<Result<Vec<&str>>>()?;
    Ok(format!("{}\n", labels.join(" ")))
}

/// Reconstruct the path to `destination` and write its rendered line.
pub fn write_path<W: Write>(
    writer: &mut W,
    provider: &dyn GraphProvider,
    prev: &Predecessors,
    destination: VertexId,
) -> Result<()> {
    let path = reconstruct(prev, destination)?;
    let line = render_path(provider, &path)?;
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Write the path to `destination` as one line on standard output.
pub fn print_path(
    provider: &dyn GraphProvider,
    prev: &Predecessors,
    destination: VertexId,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_path(&mut handle, provider, prev, destination)
}

/// A reconstructed path plus enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub strategy: Strategy,
    pub source: VertexId,
    pub destination: VertexId,
    /// False when the destination was never reached and the path is just
    /// `[destination]`.
    pub found: bool,
    pub vertices: Vec<VertexId>,
    pub labels: Vec<String>,
}

impl PathResult {
    pub fn build(
        provider: &dyn GraphProvider,
        prev: &Predecessors,
        destination: VertexId,
    ) -> Result<Self> {
        let vertices = reconstruct(prev, destination)?;
        let labels = vertices
            .iter()
            .map(|&v| provider.label(v).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            strategy: prev.strategy(),
            source: prev.source(),
            destination,
            found: vertices.first() == Some(&prev.source()),
            vertices,
            labels,
        })
    }

    /// Rendered line, same text as [`print_path`] writes.
    pub fn line(&self) -> String {
        format!("{}\n", self.labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{bfs, Graph};

    fn chain() -> Graph {
        Graph::from_undirected_edges(["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_reconstruct_chain() {
        let graph = chain();
        let prev = bfs(&graph, 0).unwrap();
        assert_eq!(reconstruct(&prev, 3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reconstruct_source_is_single_vertex() {
        let graph = chain();
        let prev = bfs(&graph, 2).unwrap();
        assert_eq!(reconstruct(&prev, 2).unwrap(), vec![2]);
    }

    #[test]
    fn test_reconstruct_rejects_out_of_range_destination() {
        let graph = chain();
        let prev = bfs(&graph, 0).unwrap();
        let err = reconstruct(&prev, 4).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                role: VertexRole::Destination,
                vertex: 4,
                size: 4
            }
        ));
        // The array is untouched by the failed call.
        assert_eq!(reconstruct(&prev, 3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reconstruct_detects_cycle() {
        let prev =
            Predecessors::from_parts(0, Strategy::Dfs, vec![None, Some(2), Some(1)]).unwrap();
        let err = reconstruct(&prev, 1).unwrap_err();
        assert!(matches!(err, GraphError::CorruptPredecessors { .. }));
    }

    #[test]
    fn test_write_path() {
        let graph = chain();
        let prev = bfs(&graph, 0).unwrap();
        let mut out = Vec::new();
        write_path(&mut out, &graph, &prev, 3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A B C D\n");
    }

    #[test]
    fn test_print_path_to_stdout() {
        let graph = chain();
        let prev = bfs(&graph, 0).unwrap();
        print_path(&graph, &prev, 1).unwrap();
    }

    #[test]
    fn test_path_result_unreachable_is_degenerate() {
        let graph = Graph::from_undirected_edges(["A", "B", "E"], &[(0, 1)]).unwrap();
        let prev = bfs(&graph, 0).unwrap();
        let result = PathResult::build(&graph, &prev, 2).unwrap();
        assert!(!result.found);
        assert_eq!(result.vertices, vec![2]);
        assert_eq!(result.line(), "E\n");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["strategy"], "bfs");
        assert_eq!(json["found"], false);
    }

    #[test]
    fn test_path_result_to_source_is_found() {
        let graph = chain();
        let prev = bfs(&graph, 0).unwrap();
        let result = PathResult::build(&graph, &prev, 0).unwrap();
        assert!(result.found);
        assert_eq!(result.labels, vec!["A"]);
    }
}
