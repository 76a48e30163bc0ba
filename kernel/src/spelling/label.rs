//! `LabelV1`: the case-folded service name being encoded.

use std::fmt;

/// A service label, lowercased at construction.
///
/// Length is measured in characters, not bytes. Digest inputs use the
/// UTF-8 encoding of the lowercased text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelV1 {
    text: String,
}

impl LabelV1 {
    /// Case-fold a raw label.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    /// The lowercased text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// UTF-8 bytes of the lowercased text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the label has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over characters in order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

impl fmt::Display for LabelV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
