//! `TranslationTableV1`: letter → hex-digit spelling substitutes.
//!
//! The table is validated at construction time. Every substitute must be a
//! non-empty string of ASCII hex digits, so a candidate built only from
//! table substitutes (and hex-digit label characters) always decodes.
//! Entries are stored in a `BTreeMap` for deterministic iteration order.

use std::collections::BTreeMap;
use std::fmt;

/// The builtin substitutes, in the order they are tried.
///
/// `'p'` spells pi without the decimal point; a dot is not a hex digit.
const BUILTIN_ENTRIES: &[(char, &[&str])] = &[
    ('a', &["4"]),
    ('b', &["13"]),
    ('e', &["3"]),
    ('g', &["6", "9"]),
    ('h', &["4"]),
    ('i', &["1"]),
    ('j', &["d"]),
    ('k', &["15"]),
    ('l', &["1", "2"]),
    ('m', &["177"]),
    ('n', &["17"]),
    ('o', &["0"]),
    ('p', &["314"]),
    ('q', &["9", "15"]),
    ('r', &["12"]),
    ('s', &["5"]),
    ('t', &["7"]),
    ('u', &["4"]),
    ('v', &["4"]),
    ('w', &["44"]),
    ('x', &["155"]),
    ('y', &["e", "ee", "3", "33"]),
    ('z', &["743"]),
];

/// A validated character → substitutes table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTableV1 {
    entries: BTreeMap<char, Vec<String>>,
}

/// Error type for table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A character was listed more than once.
    DuplicateEntry { ch: char },
    /// A character maps to no substitutes at all.
    NoSubstitutes { ch: char },
    /// A substitute is the empty string.
    EmptySubstitute { ch: char },
    /// A substitute contains a character that is not an ASCII hex digit.
    NonHexSubstitute { ch: char, substitute: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry { ch } => write!(f, "duplicate table entry for {ch:?}"),
            Self::NoSubstitutes { ch } => write!(f, "table entry for {ch:?} has no substitutes"),
            Self::EmptySubstitute { ch } => {
                write!(f, "table entry for {ch:?} has an empty substitute")
            }
            Self::NonHexSubstitute { ch, substitute } => write!(
                f,
                "table entry for {ch:?} has non-hex substitute {substitute:?}"
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl TranslationTableV1 {
    /// Build a table from `(character, substitutes)` pairs.
    ///
    /// Substitutes are lowercased; their order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] on duplicate characters, empty substitute
    /// lists, empty substitutes, or substitutes with non-hex characters.
    pub fn new<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut map: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for (ch, subs) in entries {
            if map.contains_key(&ch) {
                return Err(TableError::DuplicateEntry { ch });
            }
            if subs.is_empty() {
                return Err(TableError::NoSubstitutes { ch });
            }
            let mut validated = Vec::with_capacity(subs.len());
            for sub in subs {
                let sub = sub.as_ref();
                if sub.is_empty() {
                    return Err(TableError::EmptySubstitute { ch });
                }
                if !sub.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(TableError::NonHexSubstitute {
                        ch,
                        substitute: sub.to_string(),
                    });
                }
                validated.push(sub.to_ascii_lowercase());
            }
            map.insert(ch, validated);
        }
        Ok(Self { entries: map })
    }

    /// The builtin table.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(ch, subs)| {
                (
                    *ch,
                    subs.iter().map(|s| (*s).to_string()).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Substitutes for `ch`, in order. Empty if unmapped.
    #[must_use]
    pub fn substitutes(&self, ch: char) -> &[String] {
        self.entries.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `ch` has an entry.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of mapped characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.entries.iter().map(|(ch, subs)| (*ch, subs.as_slice()))
    }
}

impl Default for TranslationTableV1 {
    fn default() -> Self {
        Self::builtin()
    }
}
