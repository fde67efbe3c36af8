//! Hash set backed dictionary

use super::{DEFAULT_LOCALE, Dictionary};
use rustc_hash::FxHashSet;

/// Dictionary built from a word list
///
/// Entries are trimmed and lowercased on insertion; blank lines are skipped.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FxHashSet<String>,
    locale: String,
}

impl WordSet {
    /// Build a dictionary for the default locale
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSet};
    ///
    /// let dict = WordSet::new(["silk", "Worm"]);
    /// assert!(dict.is_real_word("worm"));
    /// assert!(!dict.is_real_word("silkk"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_locale(words, DEFAULT_LOCALE)
    }

    /// Build a dictionary tagged with an explicit locale
    pub fn with_locale<I, S>(words: I, locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            words,
            locale: locale.into(),
        }
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl Dictionary for WordSet {
    fn is_real_word(&self, word: &str) -> bool {
        !word.is_empty() && self.words.contains(word)
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}
