//! Rules engine
//!
//! Validates guesses against a `Session` and records the ones that pass.

use super::{Policy, Session};
use crate::core::{Rejection, normalize};
use crate::dictionary::Dictionary;
use crate::wordlists::loader::pick_root;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Result of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The normalized word was added to the front of the accepted list
    Accepted(String),
    /// The input was blank after trimming; nothing happened
    Ignored,
}

/// Game rules over a dictionary and a pool of root candidates
///
/// The engine holds no per-round state. Every operation takes the session it
/// acts on, so one engine can serve any number of sessions.
pub struct Game<'a, D: Dictionary> {
    dictionary: D,
    roots: &'a [String],
    policy: Policy,
}

impl<'a, D: Dictionary> Game<'a, D> {
    /// Create an engine with the permissive default policy
    ///
    /// # Parameters
    /// - `dictionary`: Oracle deciding whether a guess is a real word
    /// - `roots`: Candidate root words; may be empty
    pub fn new(dictionary: D, roots: &'a [String]) -> Self {
        Self {
            dictionary,
            roots,
            policy: Policy::default(),
        }
    }

    /// Replace the house rules
    #[must_use]
    pub const fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Active house rules
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Dictionary backing the realness check
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Candidate root words
    pub const fn roots(&self) -> &'a [String] {
        self.roots
    }

    /// Start a new session on a randomly chosen root
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Session {
        let root = pick_root(self.roots, rng);
        info!(root = %root, "Starting round");
        Session::new(root)
    }

    /// Throw away the current round and start another on a fresh root
    ///
    /// The new root is drawn from the same candidates and may repeat.
    #[instrument(skip_all, fields(previous = %session.root()))]
    pub fn restart<R: Rng + ?Sized>(&self, session: &mut Session, rng: &mut R) {
        let root = pick_root(self.roots, rng);
        info!(root = %root, "Restarting round");
        session.reset(root);
    }

    /// Submit raw player input
    ///
    /// Input is trimmed and lowercased first. Blank input is ignored without
    /// a rejection. Otherwise checks run in order: originality, house rules,
    /// possibility, realness. The first failing check is recorded in the
    /// session and returned; a passing word goes to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` for the first check the word fails.
    #[instrument(skip(self, session), fields(root = %session.root()))]
    pub fn submit(&self, session: &mut Session, raw: &str) -> Result<Submission, Rejection> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(Submission::Ignored);
        }

        if let Err(rejection) = self.validate(session, &word) {
            debug!(word = %word, reason = rejection.title(), "Rejected guess");
            session.reject(rejection.clone());
            return Err(rejection);
        }

        debug!(word = %word, "Accepted guess");
        session.accept(word.clone());
        Ok(Submission::Accepted(word))
    }

    /// Run every check on an already-normalized word without recording
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` for the first check the word fails.
    pub fn validate(&self, session: &Session, word: &str) -> Result<(), Rejection> {
        if session.is_used(word) {
            return Err(Rejection::AlreadyUsed);
        }

        if word.chars().count() < self.policy.min_length {
            return Err(Rejection::TooShort {
                min: self.policy.min_length,
            });
        }

        if !self.policy.allow_root && word == session.root() {
            return Err(Rejection::SameAsRoot {
                root: session.root().to_string(),
            });
        }

        if !session.letters().can_spell(word) {
            return Err(Rejection::NotPossible {
                root: session.root().to_string(),
            });
        }

        if !self.dictionary.is_real_word(word) {
            return Err(Rejection::NotReal);
        }

        Ok(())
    }

    /// Whether `word` would be accepted as a fresh guess against `root`
    ///
    /// Ignores originality; used to enumerate every answer a root allows.
    pub fn is_answer(&self, root: &str, word: &str) -> bool {
        self.validate(&Session::new(root), word).is_ok()
    }
}
