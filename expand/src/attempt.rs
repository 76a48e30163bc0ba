//! Spelling attempts: candidate strings awaiting parity check.

/// Where a spelling attempt came from.
///
/// `ordinal` is the zero-based index of the product combination the
/// attempt descends from, so padded attempts can be traced to their
/// origin in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOriginV1 {
    /// Drawn directly from the Cartesian product.
    Product { ordinal: u64 },
    /// An odd attempt with a `0` nibble prepended.
    PaddedLeft { ordinal: u64 },
    /// An odd attempt with a `0` nibble appended.
    PaddedRight { ordinal: u64 },
}

impl AttemptOriginV1 {
    /// The product ordinal this attempt descends from.
    #[must_use]
    pub const fn ordinal(self) -> u64 {
        match self {
            Self::Product { ordinal }
            | Self::PaddedLeft { ordinal }
            | Self::PaddedRight { ordinal } => ordinal,
        }
    }
}

/// One candidate: the concatenation of one substitute per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingAttemptV1 {
    pub text: String,
    pub origin: AttemptOriginV1,
}

/// The nibble used to pad odd-length attempts.
pub const PAD_NIBBLE: char = '0';

impl SpellingAttemptV1 {
    /// Build a product attempt by concatenating `parts` in order.
    #[must_use]
    pub fn from_parts(parts: &[&str], ordinal: u64) -> Self {
        Self {
            text: parts.concat(),
            origin: AttemptOriginV1::Product { ordinal },
        }
    }

    /// Whether the text splits into whole bytes (even hex-digit count).
    #[must_use]
    pub fn is_byte_aligned(&self) -> bool {
        self.text.chars().count() % 2 == 0
    }

    /// This attempt with [`PAD_NIBBLE`] prepended.
    #[must_use]
    pub fn pad_left(&self) -> Self {
        let mut text = String::with_capacity(self.text.len() + 1);
        text.push(PAD_NIBBLE);
        text.push_str(&self.text);
        Self {
            text,
            origin: AttemptOriginV1::PaddedLeft {
                ordinal: self.origin.ordinal(),
            },
        }
    }

    /// This attempt with [`PAD_NIBBLE`] appended.
    #[must_use]
    pub fn pad_right(&self) -> Self {
        let mut text = self.text.clone();
        text.push(PAD_NIBBLE);
        Self {
            text,
            origin: AttemptOriginV1::PaddedRight {
                ordinal: self.origin.ordinal(),
            },
        }
    }
}
