//! CLI interface for levtrie
//!
//! Provides command-line utilities for loading corpora and querying them.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands};
pub use config::PersistentConfig;
