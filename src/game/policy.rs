//! Optional house rules layered on top of the core checks

/// Extra restrictions on what counts as a guess
///
/// The default is permissive: any non-empty word passes, including the root
/// word itself and one or two letter words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Minimum number of letters a guess must have
    pub min_length: usize,
    /// Whether the root word itself may be submitted
    pub allow_root: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 1,
            allow_root: true,
        }
    }
}

impl Policy {
    /// Policy that rejects the root word and anything under three letters
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_length: 3,
            allow_root: false,
        }
    }

    /// Set the minimum guess length
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Allow or disallow submitting the root word
    #[must_use]
    pub const fn with_allow_root(mut self, allow_root: bool) -> Self {
        self.allow_root = allow_root;
        self
    }

    /// True when the permissive defaults are in effect
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.min_length <= 1 && self.allow_root
    }
}
