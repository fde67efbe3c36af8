//! Per-round game state
//!
//! A `Session` owns everything that changes while playing: the root word, the
//! accepted guesses, and the one-shot rejection slot. It is a plain value, so
//! a host can keep as many independent sessions as it needs.

use crate::core::{LetterPool, Rejection};

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    letters: LetterPool,
    accepted: Vec<String>,
    rejection: Option<Rejection>,
}

impl Session {
    /// Start a round on `root` with no accepted words
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let letters = LetterPool::from_word(&root);
        Self {
            root,
            letters,
            accepted: Vec::new(),
            rejection: None,
        }
    }

    /// Root word of the round
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Letter budget of the root word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Accepted guesses, most recent first
    #[inline]
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Whether `word` has already been accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.accepted.iter().any(|w| w == word)
    }

    /// Most recent rejection, if it has not been dismissed
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// Remove and return the pending rejection
    pub fn take_rejection(&mut self) -> Option<Rejection> {
        self.rejection.take()
    }

    pub(crate) fn accept(&mut self, word: String) {
        self.accepted.insert(0, word);
        self.rejection = None;
    }

    pub(crate) fn reject(&mut self, rejection: Rejection) {
        self.rejection = Some(rejection);
    }

    /// Replace the whole round with a fresh one on `root`
    pub(crate) fn reset(&mut self, root: String) {
        *self = Self::new(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new("silkworm");
        assert_eq!(session.root(), "silkworm");
        assert!(session.accepted().is_empty());
        assert!(session.rejection().is_none());
        assert_eq!(session.letters().len(), 8);
    }

    #[test]
    fn accept_prepends() {
        let mut session = Session::new("silkworm");
        session.accept("silk".to_string());
        session.accept("worm".to_string());
        assert_eq!(session.accepted(), ["worm", "silk"]);
        assert!(session.is_used("silk"));
        assert!(!session.is_used("milk"));
    }

    #[test]
    fn accept_clears_rejection() {
        let mut session = Session::new("silkworm");
        session.reject(Rejection::NotReal);
        session.accept("silk".to_string());
        assert!(session.rejection().is_none());
    }

    #[test]
    fn take_rejection_is_one_shot() {
        let mut session = Session::new("silkworm");
        session.reject(Rejection::AlreadyUsed);
        assert_eq!(session.take_rejection(), Some(Rejection::AlreadyUsed));
        assert_eq!(session.take_rejection(), None);
    }

    #[test]
    fn new_rejection_replaces_old() {
        let mut session = Session::new("silkworm");
        session.reject(Rejection::AlreadyUsed);
        session.reject(Rejection::NotReal);
        assert_eq!(session.rejection(), Some(&Rejection::NotReal));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new("silkworm");
        session.accept("silk".to_string());
        session.reject(Rejection::NotReal);

        session.reset("absolute".to_string());
        assert_eq!(session.root(), "absolute");
        assert!(session.accepted().is_empty());
        assert!(session.rejection().is_none());
        assert_eq!(session.letters().count('a'), 1);
    }
}
