//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Strategy, VertexId};
use parse::{parse_format, parse_strategy};

/// Graphwalk - depth-first and breadth-first paths through a graph file
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `graphwalk_core=debug`)
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Run configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display a graph file
    Show {
        /// Graph description file
        graph: PathBuf,
    },

    /// Print the predecessor tree of one traversal
    Tree {
        /// Graph description file
        graph: PathBuf,

        /// Source vertex index
        #[arg(long, short)]
        source: Option<VertexId>,

        /// Traversal strategy (bfs or dfs)
        #[arg(long, default_value = "bfs", value_parser = parse_strategy)]
        strategy: Strategy,
    },

    /// Print the path from source to destination for each strategy
    Path {
        /// Graph description file
        graph: PathBuf,

        /// Source vertex index
        #[arg(long, short)]
        source: Option<VertexId>,

        /// Destination vertex index
        #[arg(long, short)]
        destination: Option<VertexId>,

        /// Traversal strategy; repeat to run several (default: bfs then dfs)
        #[arg(long = "strategy", value_parser = parse_strategy, action = clap::ArgAction::Append)]
        strategies: Vec<Strategy>,
    },

    /// Display the graph, then print each configured strategy's path
    Run {
        /// Graph description file (falls back to `graph` in the config)
        graph: Option<PathBuf>,
    },
}
