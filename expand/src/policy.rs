//! Expansion policy: the network, table, and digest list a run uses.

use lospell_kernel::digest::algorithm::DigestAlgorithmV1;
use lospell_kernel::net::loopback::{LoopbackNetV1, LOOPBACK_V4};
use lospell_kernel::spelling::table::TranslationTableV1;

use crate::error::ExpandError;

/// Configuration shared by spell expansion and hash fallback.
///
/// Defaults reproduce the builtin behavior: 127.0.0.0/8, the builtin
/// table, and every digest in [`DigestAlgorithmV1::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandPolicyV1 {
    /// Network providing the prefix octets and suffix capacity.
    pub net: LoopbackNetV1,
    /// Character → substitute table (validated at construction).
    pub table: TranslationTableV1,
    /// Fallback digests, in emission order.
    pub algorithms: Vec<DigestAlgorithmV1>,
}

impl ExpandPolicyV1 {
    /// Longest label whose full spelling can fit in one address.
    ///
    /// Equal to the suffix capacity in hex digits; longer labels are
    /// still processed but their candidates are truncated.
    #[must_use]
    pub fn length_limit(&self) -> usize {
        self.net.suffix_hex_digits()
    }

    /// Validate the policy before any processing starts.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidPolicy`] if the digest list is empty
    /// (the fallback must always produce output) or names an algorithm
    /// twice.
    pub fn validate(&self) -> Result<(), ExpandError> {
        if self.algorithms.is_empty() {
            return Err(ExpandError::InvalidPolicy {
                detail: "at least one fallback digest algorithm is required".into(),
            });
        }
        for (i, alg) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(alg) {
                return Err(ExpandError::InvalidPolicy {
                    detail: format!("digest algorithm {alg} listed more than once"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ExpandPolicyV1 {
    fn default() -> Self {
        Self {
            net: LOOPBACK_V4,
            table: TranslationTableV1::builtin(),
            algorithms: DigestAlgorithmV1::ALL.to_vec(),
        }
    }
}
