//! Word Scramble
//!
//! A word derivation game: a root word is picked at random and the player
//! spells as many dictionary words as possible from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::game::{Game, Session, Submission};
//! use word_scramble::core::Rejection;
//!
//! let dictionary = WordSet::new(["silk", "worm", "milk"]);
//! let game = Game::new(&dictionary, &[]);
//! let mut session = Session::new("silkworm");
//!
//! assert_eq!(
//!     game.submit(&mut session, "Silk"),
//!     Ok(Submission::Accepted("silk".to_string()))
//! );
//! assert_eq!(game.submit(&mut session, "silk"), Err(Rejection::AlreadyUsed));
//! ```

// Core domain types
pub mod core;

// Dictionary membership oracle
pub mod dictionary;

// Rules engine and round state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
