//! Show command: diagnostic dump of a graph file
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::graph::GraphSummary;

/// Execute the show command
pub fn execute(ctx: &CommandContext, graph_path: &Path) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;

    match ctx.format {
        OutputFormat::Human => print!("{}", graph),
        OutputFormat::Json => {
            let summary = GraphSummary::from_graph(&graph)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
