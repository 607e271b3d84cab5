//! Command dispatch logic for graphwalk
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use graphwalk_core::bail_usage;
use graphwalk_core::config::RunConfig;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::{load_graph_file, Graph};
use graphwalk_core::trace_time;

/// Shared context for command execution
pub struct CommandContext {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config: RunConfig,
    pub start: Instant,
}

impl CommandContext {
    /// Load a graph file, logging how long it took
    pub fn load_graph(&self, path: &Path) -> Result<Graph> {
        let graph = load_graph_file(path)?;
        trace_time!(self.start, "load_graph", vertices = graph.size());
        Ok(graph)
    }

    /// Side note on stderr for human output; dropped by --quiet and in JSON mode
    pub fn note(&self, message: &str) {
        if self.format == OutputFormat::Human && !self.quiet {
            eprintln!("note: {}", message);
        }
    }
}

/// Print `err` the way `format` asks: a JSON envelope, or one `error:` line
/// unless quiet.
pub fn report_error(err: &GraphError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext {
        format: cli.format,
        quiet: cli.quiet,
        config,
        start,
    };

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Show { graph }) => commands::show::execute(&ctx, graph),

        Some(Commands::Tree {
            graph,
            source,
            strategy,
        }) => commands::tree::execute(
            &ctx,
            graph,
            source.unwrap_or(ctx.config.source),
            *strategy,
        ),

        Some(Commands::Path {
            graph,
            source,
            destination,
            strategies,
        }) => {
            let strategies = if strategies.is_empty() {
                ctx.config.strategies.clone()
            } else {
                strategies.clone()
            };
            commands::path::execute(
                &ctx,
                graph,
                source.unwrap_or(ctx.config.source),
                destination.unwrap_or(ctx.config.destination),
                &strategies,
            )
        }

        Some(Commands::Run { graph }) => {
            let Some(graph) = graph.clone().or_else(|| ctx.config.graph.clone()) else {
                bail_usage!("no graph file given (pass one or set `graph` in --config)");
            };
            commands::run::execute(&ctx, &graph)
        }
    }
}

/// Load the run config, resolving a relative `graph` against the config's directory
fn load_config(path: &Path) -> Result<RunConfig> {
    let mut config = RunConfig::load(path)?;
    if let (Some(graph), Some(dir)) = (&config.graph, path.parent()) {
        if graph.is_relative() {
            let resolved: PathBuf = dir.join(graph);
            config.graph = Some(resolved);
        }
    }
    Ok(config)
}

fn handle_no_command() -> Result<()> {
    println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
    println!("Run `graphwalk --help` for usage.");
    Ok(())
}
