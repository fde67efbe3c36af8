//! Guess normalization

/// Root word used when no candidate list is available
pub const DEFAULT_ROOT: &str = "silkworm";

/// Normalize raw player input into a guess
///
/// Trims leading and trailing whitespace (newlines included) and lowercases
/// the result. An empty return value means there is nothing to submit.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
