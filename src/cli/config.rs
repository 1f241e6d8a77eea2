//! Persistent CLI configuration

use crate::search::Algorithm;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default maximum edit distance
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// User configuration stored in a JSON file.
///
/// Every field is optional; unset fields fall back to the built-in defaults,
/// and command-line flags override both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersistentConfig {
    /// Corpus files loaded when a command names none
    pub dictionaries: Vec<PathBuf>,
    /// Default max distance
    pub max_distance: Option<usize>,
    /// Default search strategy
    pub algorithm: Option<Algorithm>,
    /// Default show distances
    pub show_distances: Option<bool>,
    /// Default result limit
    pub limit: Option<usize>,
}

impl PersistentConfig {
    /// Load configuration from an optional path.
    ///
    /// No path, or a path that does not exist, yields the defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            dictionaries: if cli.dictionaries.is_empty() {
                self.dictionaries.clone()
            } else {
                cli.dictionaries.clone()
            },
            max_distance: cli.max_distance.or(self.max_distance),
            algorithm: cli.algorithm.or(self.algorithm),
            show_distances: cli.show_distances.or(self.show_distances),
            limit: cli.limit.or(self.limit),
        }
    }

    /// Effective max distance
    pub fn max_distance(&self) -> usize {
        self.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE)
    }

    /// Effective search strategy
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or_default()
    }

    /// Effective show-distances flag
    pub fn show_distances(&self) -> bool {
        self.show_distances.unwrap_or(false)
    }
}
