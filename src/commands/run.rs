//! Run command: show the graph, then print each configured strategy's path
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::path::{collect_paths, output_paths_human};
use graphwalk_core::error::{Result, VertexRole};
use graphwalk_core::graph::GraphSummary;

/// Execute the run command
pub fn execute(ctx: &CommandContext, graph_path: &Path) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;
    let config = &ctx.config;
    graph.check_vertex(VertexRole::Source, config.source)?;
    graph.check_vertex(VertexRole::Destination, config.destination)?;

    let paths = collect_paths(
        &graph,
        config.source,
        config.destination,
        &config.strategies,
    )?;

    match ctx.format {
        OutputFormat::Human => {
            print!("{}", graph);
            output_paths_human(ctx, &graph, &paths)?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "graph": GraphSummary::from_graph(&graph)?,
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
