//! Error types for corpus loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus into an index.
///
/// Loading stops at the first error. Terms inserted before the failure stay
/// in the index.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be opened.
    #[error("Failed to open corpus {}", .path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading from the corpus failed part way through.
    ///
    /// `origin` is the file path, or `<reader>` for loads from an arbitrary
    /// reader.
    #[error("Failed to read corpus {origin} after {terms} terms")]
    Read {
        /// Where the corpus was being read from
        origin: String,
        /// Number of terms seen before the failure
        terms: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
