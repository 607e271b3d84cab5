//! Graphwalk - trace depth-first and breadth-first paths through a graph
//!
//! Loads a fixed, unweighted graph from a plain-text file and prints the
//! predecessor trees and source-to-destination paths the two traversals
//! produce.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{ContextKind, ErrorKind};
use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::dispatch::report_error;
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => GraphExitCode::Success.into(),
        Err(err) => {
            report_error(&err, cli.format, cli.quiet);
            err.exit_code().into()
        }
    }
}

/// Help and version go through clap untouched. Argument errors use clap's
/// own report, unless `--format json` was asked for, in which case they get
/// the same envelope as every other usage error.
fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !format_json_in(env::args().skip(1))
    {
        err.exit();
    }

    let graph_error = usage_error_from(&err);
    report_error(&graph_error, OutputFormat::Json, false);
    graph_error.exit_code().into()
}

/// `Cli.format` does not exist yet when parsing fails, so look at argv.
fn format_json_in(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|arg| arg == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}

/// Map a clap failure onto this CLI's arguments.
fn usage_error_from(err: &clap::Error) -> GraphError {
    let arg = err.get(ContextKind::InvalidArg).map(ToString::to_string);
    let value = err.get(ContextKind::InvalidValue).map(ToString::to_string);

    match (err.kind(), arg, value) {
        (ErrorKind::ValueValidation | ErrorKind::InvalidValue, Some(arg), Some(value)) => {
            if arg.starts_with("--strategy") {
                GraphError::UnknownStrategy(value)
            } else if arg.starts_with("--format") {
                GraphError::UnknownFormat(value)
            } else {
                // --source / --destination take a vertex index
                GraphError::UsageError(format!(
                    "invalid value `{}` for {}: expected a vertex index",
                    value, arg
                ))
            }
        }
        _ => GraphError::UsageError(clap_summary(err)),
    }
}

/// First line of clap's rendered error, without its `error: ` prefix.
fn clap_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
