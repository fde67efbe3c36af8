//! Dictionary membership oracle
//!
//! The rules engine only needs to know whether a string is a real word. That
//! capability sits behind the [`Dictionary`] trait so it can be backed by an
//! embedded word list, a spell-check library, or anything else that gives a
//! stable answer.

mod word_set;

pub use word_set::WordSet;

/// Locale of the embedded word list
pub const DEFAULT_LOCALE: &str = "en";

/// Decides whether a string is a correctly spelled word
pub trait Dictionary {
    /// Return `true` if `word` is a real word in this dictionary's locale
    ///
    /// Input is expected to be lowercased already. Identical input must always
    /// give an identical answer.
    fn is_real_word(&self, word: &str) -> bool;

    /// Locale the dictionary answers for
    fn locale(&self) -> &str {
        DEFAULT_LOCALE
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str) -> bool {
        (**self).is_real_word(word)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlySilk;

    impl Dictionary for OnlySilk {
        fn is_real_word(&self, word: &str) -> bool {
            word == "silk"
        }
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(OnlySilk.locale(), "en");
    }

    #[test]
    fn references_delegate() {
        let dict = OnlySilk;
        let by_ref = &dict;
        assert!(by_ref.is_real_word("silk"));
        assert!(!by_ref.is_real_word("worm"));
    }
}
