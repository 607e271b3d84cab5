//! Run configuration for graphwalk
//!
//! Optional TOML file passed with `--config`; command-line flags override it.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{RunConfig, DEFAULT_DESTINATION, DEFAULT_SOURCE};

impl RunConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: RunConfig = toml::from_str(&content)?;

        if config.strategies.is_empty() {
            tracing::warn!(path = %path.display(), "config lists no strategies; nothing will run");
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Strategy;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.source, 0);
        assert_eq!(config.destination, 5);
        assert_eq!(config.strategies, vec![Strategy::Bfs, Strategy::Dfs]);
        assert!(config.graph.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");

        let config = RunConfig {
            graph: Some(PathBuf::from("graph.dat")),
            source: 2,
            destination: 3,
            strategies: vec![Strategy::Dfs],
        };
        config.save(&path).unwrap();

        let loaded = RunConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "destination = 3\n").unwrap();

        let loaded = RunConfig::load(&path).unwrap();
        assert_eq!(loaded.source, DEFAULT_SOURCE);
        assert_eq!(loaded.destination, 3);
        assert_eq!(loaded.strategies.len(), 2);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "strategies = [\"astar\"]\n").unwrap();

        let err = RunConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }
}
