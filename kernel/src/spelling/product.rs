//! Lazy Cartesian product over variant sets.
//!
//! An odometer over per-set indices: the right-most set varies fastest,
//! the first set slowest. Memory is proportional to the number of sets,
//! never to the number of combinations.
//!
//! A product over zero sets yields nothing (there is no label to spell),
//! and a product containing an empty set yields nothing.

use crate::spelling::variants::VariantSetV1;

/// Iterator over combinations, one substitute per set.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a> {
    sets: &'a [VariantSetV1],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> CartesianProduct<'a> {
    /// Start enumerating combinations of `sets`.
    #[must_use]
    pub fn new(sets: &'a [VariantSetV1]) -> Self {
        let exhausted = sets.is_empty() || sets.iter().any(VariantSetV1::is_empty);
        Self {
            sets,
            indices: vec![0; sets.len()],
            exhausted,
        }
    }

    /// Advance the odometer. Returns `false` once every position wrapped.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl<'a> Iterator for CartesianProduct<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = self
            .indices
            .iter()
            .zip(self.sets)
            .map(|(&i, set)| set.variants[i].as_str())
            .collect();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(combination)
    }
}
