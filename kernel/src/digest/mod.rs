//! Digest layer: the fixed, ordered list of fallback hash functions.

pub mod algorithm;
