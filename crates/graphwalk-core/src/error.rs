//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range vertex)
//! - 3: Data error (malformed graph file)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Which argument a vertex index was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Source,
    Destination,
    Neighbor,
    Vertex,
}

impl std::fmt::Display for VertexRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VertexRole::Source => "source",
            VertexRole::Destination => "destination",
            VertexRole::Neighbor => "neighbor",
            VertexRole::Vertex => "vertex",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs or dfs)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{role} vertex {vertex} out of range (graph has {size} vertices)")]
    VertexOutOfRange {
        role: VertexRole,
        vertex: VertexId,
        size: usize,
    },

    // Data errors (exit code 3)
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("corrupt predecessor array: {reason}")]
    CorruptPredecessors { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex index outside `[0, size)`
    pub fn out_of_range(role: VertexRole, vertex: VertexId, size: usize) -> Self {
        GraphError::VertexOutOfRange { role, vertex, size }
    }

    /// Create a parse error at a 1-based line number
    pub fn parse(line: usize, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a graph that violates its structural invariants
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownStrategy(_)
            | GraphError::UsageError(_)
            | GraphError::VertexOutOfRange { .. } => ExitCode::Usage,

            GraphError::Parse { .. } | GraphError::InvalidGraph { .. } => ExitCode::Data,

            GraphError::CorruptPredecessors { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownStrategy(_) => "unknown_strategy",
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::Parse { .. } => "parse_error",
            GraphError::InvalidGraph { .. } => "invalid_graph",
            GraphError::CorruptPredecessors { .. } => "corrupt_predecessors",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
