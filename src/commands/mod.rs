//! CLI commands for graphwalk

pub mod dispatch;
pub mod path;
pub mod run;
pub mod show;
pub mod tree;
