//! Letter budget of a root word
//!
//! A `LetterPool` is the multiset of characters in a root word. Spelling a
//! guess consumes one occurrence per character, so a letter that appears `k`
//! times in the root can be used at most `k` times.

use rustc_hash::FxHashMap;

/// Multiset of the letters available for spelling guesses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool from every character of `root`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn from_word(root: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in root.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `ch`
    ///
    /// Returns `false` and leaves the pool unchanged if no occurrence is left.
    pub fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy, so the pool itself is never consumed. Stops at the
    /// first character that has no occurrence left.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut budget = self.clone();
        word.chars().all(|ch| budget.take(ch))
    }

    /// Number of remaining occurrences of `ch`
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// True when every letter has been consumed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
