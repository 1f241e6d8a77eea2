//! CLI argument definitions

use crate::search::Algorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "levtrie")]
#[command(about = "Fuzzy dictionary matching with a code-point trie")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file with default settings
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find dictionary terms within an edit distance of each query
    Query {
        /// Query terms
        #[arg(required = true)]
        terms: Vec<String>,

        /// Corpus files, one term per line
        #[arg(short, long = "dict")]
        dicts: Vec<PathBuf>,

        /// Maximum edit distance
        #[arg(short = 'm', long)]
        max_distance: Option<usize>,

        /// Search strategy
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Show distances
        #[arg(short = 's', long)]
        show_distances: bool,

        /// Limit results per query
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check exact membership of each term
    Contains {
        /// Terms to look up
        #[arg(required = true)]
        terms: Vec<String>,

        /// Corpus files, one term per line
        #[arg(short, long = "dict")]
        dicts: Vec<PathBuf>,
    },

    /// Compute the Levenshtein distance between two strings
    Distance {
        /// First string
        source: String,

        /// Second string
        target: String,
    },

    /// Display index statistics
    Info {
        /// Corpus files, one term per line
        #[arg(short, long = "dict")]
        dicts: Vec<PathBuf>,
    },
}
