//! Spelling layer: turning a label into hex-digit spelling candidates.
//!
//! `label` → `variants` (per character, via `table`) → `product`
//! (lazy combinations). Candidate assembly and parity fixup live in the
//! expansion crate; this module only enumerates.

pub mod label;
pub mod product;
pub mod table;
pub mod variants;
