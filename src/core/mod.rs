//! Core domain types for the word game
//!
//! Pure types with no I/O: guess normalization, the letter budget a root
//! word provides, and the closed set of reasons a guess can be rejected.

mod letters;
mod rejection;
mod word;

pub use letters::LetterPool;
pub use rejection::Rejection;
pub use word::{DEFAULT_ROOT, normalize};
