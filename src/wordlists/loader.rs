//! Word list loading utilities
//!
//! Provides functions to load word lists from files, convert embedded
//! constants, and pick a random root word.

use crate::core::DEFAULT_ROOT;
use derive_more::{Display, Error};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// A word list file could not be read
#[derive(Debug, Display, Error)]
#[display("Couldn't load {}: {source}", path.display())]
pub struct WordListError {
    /// File that failed to load
    pub path: PathBuf,
    /// Underlying I/O failure
    pub source: io::Error,
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns a `WordListError` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument]
pub fn load_from_file<P: AsRef<Path> + std::fmt::Debug>(
    path: P,
) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        warn!(path = %path.display(), "Word list is empty");
    } else {
        info!(path = %path.display(), count = words.len(), "Loaded word list");
    }

    Ok(words)
}

/// Split text on line boundaries into normalized words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Pick a root word uniformly at random
///
/// Falls back to `"silkworm"` when there are no candidates, so a round can
/// always start.
pub fn pick_root<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> String {
    candidates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROOT.to_string())
}
