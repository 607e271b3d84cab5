//! Graphwalk Core Library
//!
//! Graph store, plain-text loader, depth-first and breadth-first
//! predecessor trees, and path reconstruction for the graphwalk CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
