//! Tree command: print one traversal's predecessor array
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{traverse, Graph, Predecessors, Strategy, VertexId};

/// Execute the tree command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    source: VertexId,
    strategy: Strategy,
) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;
    let prev = traverse(&graph, source, strategy)?;

    match ctx.format {
        OutputFormat::Human => output_tree_human(&graph, &prev)?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "strategy": strategy,
                "source": source,
                "predecessors": prev.as_slice(),
                "reached": prev.reached(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// One line per vertex: `label <- predecessor-label`, `-` for the sentinel
fn output_tree_human(graph: &Graph, prev: &Predecessors) -> Result<()> {
    for (vertex, pred) in prev.as_slice().iter().enumerate() {
        let pred_label = match pred {
            Some(p) => graph.label(*p)?,
            None => "-",
        };
        println!("{} <- {}", graph.label(vertex)?, pred_label);
    }
    Ok(())
}
