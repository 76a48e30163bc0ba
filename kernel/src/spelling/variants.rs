//! Per-character variant sets.
//!
//! The variant set of a character is, in order:
//! 1. the character itself, if it is an ASCII hex digit;
//! 2. its translation-table substitutes.
//!
//! A character with neither contributes an empty set, which makes the
//! whole label unspellable.

use crate::spelling::label::LabelV1;
use crate::spelling::table::TranslationTableV1;

/// Candidate substitutes for one label character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSetV1 {
    /// The label character.
    pub ch: char,
    /// Substitutes in enumeration order.
    pub variants: Vec<String>,
}

impl VariantSetV1 {
    /// Compute the variant set of `ch` under `table`.
    #[must_use]
    pub fn for_char(ch: char, table: &TranslationTableV1) -> Self {
        let mut variants = Vec::new();
        if ch.is_ascii_hexdigit() {
            variants.push(ch.to_string());
        }
        variants.extend(table.substitutes(ch).iter().cloned());
        Self { ch, variants }
    }

    /// Whether no substitute exists for this character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Number of substitutes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Width of the longest substitute, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.variants
            .iter()
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Variant sets for every character of `label`, in label order.
#[must_use]
pub fn variant_sets(label: &LabelV1, table: &TranslationTableV1) -> Vec<VariantSetV1> {
    label
        .chars()
        .map(|ch| VariantSetV1::for_char(ch, table))
        .collect()
}

/// Whether every character has at least one substitute.
///
/// The empty label is reported spellable here; enumeration over zero sets
/// still yields no candidate (see `CartesianProduct`).
#[must_use]
pub fn is_spellable(sets: &[VariantSetV1]) -> bool {
    sets.iter().all(|s| !s.is_empty())
}

/// Number of combinations the product of `sets` will yield, saturating.
#[must_use]
pub fn combination_count(sets: &[VariantSetV1]) -> u64 {
    if sets.is_empty() {
        return 0;
    }
    sets.iter()
        .fold(1u64, |acc, s| acc.saturating_mul(s.len() as u64))
}
