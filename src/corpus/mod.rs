//! Line-oriented corpus loading.
//!
//! A corpus is a text source with one term per line, such as a password
//! denylist or a spelling dictionary:
//!
//! ```text
//! password1
//! p@ssword
//! passw0rd
//! ```
//!
//! Each line is stripped of leading and trailing ASCII whitespace; blank lines
//! are skipped. `\n`, `\r\n` and bare `\r` line endings are all accepted, and
//! the last line does not need a terminator. Bytes that are not valid UTF-8 are
//! decoded with the replacement character rather than rejected.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use levtrie::corpus;
//! use levtrie::prelude::*;
//!
//! let mut trie = FuzzyTrie::new();
//! let stats = corpus::load_path(&mut trie, "data/passwords.txt")?;
//! println!("{} terms, {} new", stats.terms, stats.inserted);
//! ```

mod error;

pub use error::{CorpusError, Result};

use crate::dictionary::trie::FuzzyTrie;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters for a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-empty lines seen
    pub terms: usize,
    /// Terms that were not indexed before
    pub inserted: usize,
    /// Terms that were already indexed
    pub duplicates: usize,
}

/// Load every line of `reader` into `trie`.
///
/// # Errors
///
/// Returns [`CorpusError::Read`] if the reader fails. Terms read before the
/// failure remain indexed.
pub fn load_reader<R: BufRead>(trie: &mut FuzzyTrie, reader: R) -> Result<LoadStats> {
    read_lines(reader, None, |line| trie.insert(line))
}

/// Load every line of the file at `path` into `trie`.
///
/// # Errors
///
/// Returns [`CorpusError::Open`] if the file cannot be opened and
/// [`CorpusError::Read`] if reading fails. Terms read before a read failure
/// remain indexed.
pub fn load_path<P: AsRef<Path>>(trie: &mut FuzzyTrie, path: P) -> Result<LoadStats> {
    let path = path.as_ref();
    let reader = open(path)?;
    read_lines(reader, Some(path), |line| trie.insert(line))
}

/// Open a corpus file for buffered reading.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Feed each trimmed, non-empty line of `reader` to `insert`.
///
/// `insert` returns whether the line was a new term.
pub(crate) fn read_lines<R, F>(mut reader: R, path: Option<&Path>, mut insert: F) -> Result<LoadStats>
where
    R: BufRead,
    F: FnMut(&[u8]) -> bool,
{
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(CorpusError::Read {
                    origin: origin(path),
                    terms: stats.terms,
                    source,
                })
            }
        }

        // A bare '\r' also ends a line
        for line in buf.split(|&b| b == b'\r') {
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            stats.terms += 1;
            if insert(line) {
                stats.inserted += 1;
            } else {
                stats.duplicates += 1;
            }
        }
    }

    tracing::debug!(
        origin = %origin(path),
        terms = stats.terms,
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        "corpus loaded"
    );
    Ok(stats)
}

fn origin(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<reader>".to_string(),
    }
}
