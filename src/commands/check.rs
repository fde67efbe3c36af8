//! Check a single word against a root

use crate::core::{Rejection, normalize};
use crate::dictionary::Dictionary;
use crate::game::{Game, Session, Submission};

/// Outcome of checking one word on a fresh round
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub outcome: Result<Submission, Rejection>,
}

impl CheckResult {
    /// True when the word was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.outcome, Ok(Submission::Accepted(_)))
    }
}

/// Submit `word` to a new session on `root`
///
/// # Errors
///
/// Returns an error if the root is blank.
pub fn check_word<D: Dictionary>(
    game: &Game<D>,
    root: &str,
    word: &str,
) -> Result<CheckResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let mut session = Session::new(root.clone());
    let outcome = game.submit(&mut session, word);

    Ok(CheckResult {
        root,
        word: normalize(word),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    #[test]
    fn check_accepts_valid_word() {
        let dict = WordSet::new(["silk"]);
        let game = Game::new(&dict, &[]);

        let result = check_word(&game, "Silkworm", " SILK ").unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.word, "silk");
        assert!(result.is_accepted());
    }

    #[test]
    fn check_reports_rejection() {
        let dict = WordSet::new(["silk"]);
        let game = Game::new(&dict, &[]);

        let result = check_word(&game, "silkworm", "zzz").unwrap();
        assert!(!result.is_accepted());
        assert!(matches!(result.outcome, Err(Rejection::NotPossible { .. })));
    }

    #[test]
    fn check_blank_word_is_ignored() {
        let dict = WordSet::new(["silk"]);
        let game = Game::new(&dict, &[]);

        let result = check_word(&game, "silkworm", "  ").unwrap();
        assert_eq!(result.outcome, Ok(Submission::Ignored));
        assert!(!result.is_accepted());
    }

    #[test]
    fn check_blank_root_fails() {
        let dict = WordSet::new(["silk"]);
        let game = Game::new(&dict, &[]);
        assert!(check_word(&game, "", "silk").is_err());
    }
}
