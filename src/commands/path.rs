//! Path command: source-to-destination path per strategy
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::{Result, VertexRole};
use graphwalk_core::graph::{traverse, Graph, PathResult, Strategy, VertexId};

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    source: VertexId,
    destination: VertexId,
    strategies: &[Strategy],
) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;
    graph.check_vertex(VertexRole::Destination, destination)?;

    let results = collect_paths(&graph, source, destination, strategies)?;

    match ctx.format {
        OutputFormat::Human => output_paths_human(ctx, &graph, &results)?,
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

/// Traverse once per strategy and reconstruct the path to `destination`.
pub fn collect_paths(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    strategies: &[Strategy],
) -> Result<Vec<PathResult>> {
    strategies
        .iter()
        .map(|&strategy| {
            let prev = traverse(graph, source, strategy)?;
            let result = PathResult::build(graph, &prev, destination)?;
            if !result.found {
                tracing::warn!(%strategy, source, destination, "destination not reached");
            }
            Ok(result)
        })
        .collect()
}

/// One line per path, with a note for each destination left unreached.
pub fn output_paths_human(
    ctx: &CommandContext,
    graph: &Graph,
    results: &[PathResult],
) -> Result<()> {
    for result in results {
        print!("{}", result.line());
        if !result.found {
            ctx.note(&format!(
                "{} from {} does not reach {}",
                result.strategy,
                graph.label(result.source)?,
                graph.label(result.destination)?
            ));
        }
    }
    Ok(())
}
