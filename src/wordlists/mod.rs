//! Word lists for the game
//!
//! Provides the embedded root candidates and dictionary compiled into the
//! binary, plus loaders for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
