//! Reasons a guess can be turned down

use derive_more::{Display, Error};

/// Closed set of rejection kinds
///
/// Each kind carries a fixed title and message for the player. `Display`
/// renders `"{title}: {message}"`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    /// The guess was already accepted this round
    #[display("Word used already: Be more original!")]
    AlreadyUsed,

    /// The guess cannot be spelled from the root's letters
    #[display("Word not possible: You can't spell this word from {root}")]
    NotPossible {
        /// Root word of the round
        root: String,
    },

    /// The dictionary does not know the guess
    #[display("Not a real word: You can't just make them up, you know!")]
    NotReal,

    /// The guess is shorter than the configured minimum
    #[display("Word too short: Words must be at least {min} letters long")]
    TooShort {
        /// Minimum number of letters
        min: usize,
    },

    /// The guess is the root word and the policy disallows it
    #[display("That's the start word: You can't just use {root}!")]
    SameAsRoot {
        /// Root word of the round
        root: String,
    },
}

impl Rejection {
    /// Short heading for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotReal => "Not a real word",
            Self::TooShort { .. } => "Word too short",
            Self::SameAsRoot { .. } => "That's the start word",
        }
    }

    /// Body text for an alert
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible { root } => format!("You can't spell this word from {root}"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooShort { min } => format!("Words must be at least {min} letters long"),
            Self::SameAsRoot { root } => format!("You can't just use {root}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_messages() {
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already");
        assert_eq!(Rejection::AlreadyUsed.message(), "Be more original!");

        assert_eq!(Rejection::NotReal.title(), "Not a real word");
        assert_eq!(
            Rejection::NotReal.message(),
            "You can't just make them up, you know!"
        );

        let impossible = Rejection::NotPossible {
            root: "silkworm".to_string(),
        };
        assert_eq!(impossible.title(), "Word not possible");
        assert_eq!(
            impossible.message(),
            "You can't spell this word from silkworm"
        );
    }

    #[test]
    fn display_joins_title_and_message() {
        let rejections = [
            Rejection::AlreadyUsed,
            Rejection::NotReal,
            Rejection::NotPossible {
                root: "silkworm".to_string(),
            },
            Rejection::TooShort { min: 3 },
            Rejection::SameAsRoot {
                root: "silkworm".to_string(),
            },
        ];

        for rejection in rejections {
            assert_eq!(
                rejection.to_string(),
                format!("{}: {}", rejection.title(), rejection.message())
            );
        }
    }

    #[test]
    fn rejection_is_an_error() {
        let err: Box<dyn std::error::Error> = Box::new(Rejection::NotReal);
        assert_eq!(
            err.to_string(),
            "Not a real word: You can't just make them up, you know!"
        );
    }
}
