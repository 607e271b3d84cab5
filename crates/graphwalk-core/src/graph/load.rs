//! Plain-text graph loader
//!
//! Format (whitespace-separated, `#` comments, blank lines ignored):
//!
//! ```text
//! 4            # vertex count
//! A            # one label per line
//! B
//! C
//! D
//! 0 1 0 0      # one adjacency row per vertex, 0 or 1
//! 1 0 1 0
//! 0 1 0 1
//! 0 0 1 0
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::bail_parse;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::trace_time;

/// Read and parse a graph description file.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph_file(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read graph file", path.display(), e))?;

    let graph = parse_graph(&content)?;
    trace_time!(start, "load_graph_file");

    tracing::debug!(
        size = graph.size(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    if !graph.is_symmetric() {
        tracing::warn!(path = %path.display(), "adjacency matrix is not symmetric");
    }

    Ok(graph)
}

/// Parse a graph description held in memory.
///
/// The vertex count is checked against the lines actually present before
/// anything is sized from it.
pub fn parse_graph(content: &str) -> Result<Graph> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let Some((&(size_line, size_text), rest)) = lines.split_first() else {
        bail_parse!(last_line(content), "empty graph description");
    };
    let size = parse_size(size_line, size_text)?;
    if size > rest.len() {
        bail_parse!(
            size_line,
            "vertex count {} exceeds the {} lines that follow",
            size,
            rest.len()
        );
    }

    let (label_lines, rest) = rest.split_at(size);
    let labels = label_lines
        .iter()
        .map(|&(_, text)| text.to_string())
        .collect();

    if rest.len() < size {
        bail_parse!(
            last_line(content),
            "expected {} adjacency rows, found {}",
            size,
            rest.len()
        );
    }
    let (row_lines, trailing) = rest.split_at(size);
    let rows = row_lines
        .iter()
        .map(|&(line_no, text)| parse_row(line_no, text, size))
        .collect::<Result<Vec<_>>>()?;

    if let Some(&(line_no, text)) = trailing.first() {
        bail_parse!(line_no, "unexpected trailing data `{}`", text);
    }

    Graph::new(labels, rows)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// 1-based number of the last line, for errors about missing content.
fn last_line(content: &str) -> usize {
    content.lines().count().max(1)
}

fn parse_size(line_no: usize, text: &str) -> Result<usize> {
    let size: usize = text
        .parse()
        .map_err(|_| GraphError::parse(line_no, format!("invalid vertex count `{}`", text)))?;
    if size == 0 {
        bail_parse!(line_no, "vertex count must be positive");
    }
    Ok(size)
}

fn parse_row(line_no: usize, text: &str, size: usize) -> Result<Vec<bool>> {
    let row = text
        .split_whitespace()
        .map(|token| match token {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(GraphError::parse(
                line_no,
                format!("expected 0 or 1, found `{}`", other),
            )),
        })
        .collect::<Result<Vec<bool>>>()?;

    if row.len() != size {
        bail_parse!(
            line_no,
            "adjacency row has {} entries, expected {}",
            row.len(),
            size
        );
    }
    Ok(row)
}
