//! Reveal command
//!
//! Lists every dictionary word a root allows under the active rules.

use crate::core::normalize;
use crate::dictionary::{Dictionary, WordSet};
use crate::game::Game;
use rayon::prelude::*;

/// Every answer a root word allows
pub struct RevealResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub dictionary_size: usize,
}

impl RevealResult {
    /// Length of the longest answer, 0 if there are none
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }
}

/// Find all words in `candidates` the game would accept against `root`
///
/// # Errors
///
/// Returns an error if the root is blank.
pub fn reveal_words<D: Dictionary + Sync>(
    game: &Game<D>,
    candidates: &WordSet,
    root: &str,
) -> Result<RevealResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let pool: Vec<&str> = candidates.iter().collect();
    let mut words: Vec<String> = pool
        .par_iter()
        .filter(|&&word| game.is_answer(&root, word))
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    Ok(RevealResult {
        root,
        words,
        dictionary_size: candidates.len(),
    })
}
