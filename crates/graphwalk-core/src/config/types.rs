//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::{Strategy, VertexId};

/// Default source vertex when neither config nor flags name one
pub const DEFAULT_SOURCE: VertexId = 0;

/// Default destination vertex when neither config nor flags name one
pub const DEFAULT_DESTINATION: VertexId = 5;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Graph description file (optional; may be given on the command line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Vertex every traversal starts from
    #[serde(default = "default_source")]
    pub source: VertexId,

    /// Vertex whose path is reconstructed
    #[serde(default = "default_destination")]
    pub destination: VertexId,

    /// Traversals to run, in order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

fn default_source() -> VertexId {
    DEFAULT_SOURCE
}

fn default_destination() -> VertexId {
    DEFAULT_DESTINATION
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph: None,
            source: default_source(),
            destination: default_destination(),
            strategies: default_strategies(),
        }
    }
}
