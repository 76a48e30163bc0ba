//! Hash fallback: one digest-derived address per configured algorithm.
//!
//! Total over all labels: every algorithm in the policy produces exactly
//! one address, in policy order, whatever the label contains.

use tracing::{debug, info};

use lospell_kernel::net::address::LoopbackAddrV1;
use lospell_kernel::spelling::label::LabelV1;

use crate::contract::{AddressRecordV1, AddressSink, AddressSourceV1};
use crate::error::ExpandError;
use crate::policy::ExpandPolicyV1;

/// Counters describing one hash fallback run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackStatsV1 {
    /// Addresses handed to the sink (one per algorithm).
    pub emitted: u64,
}

/// Stream one address per digest algorithm into `sink`.
///
/// Each address is the network prefix followed by the first
/// `suffix_bytes()` octets of the digest of the label's UTF-8 bytes.
///
/// # Errors
///
/// Returns [`ExpandError::InvalidPolicy`] if the policy fails validation
/// and [`ExpandError::EmitFailed`] if the sink fails.
pub fn hash_fallback(
    label: &LabelV1,
    policy: &ExpandPolicyV1,
    sink: &mut dyn AddressSink,
) -> Result<FallbackStatsV1, ExpandError> {
    policy.validate()?;

    debug!("Fallback: hashes");
    let mut emitted: u64 = 0;
    for &algorithm in &policy.algorithms {
        let digest = algorithm.digest(label.as_bytes());
        info!("Hash {algorithm}: {}", hex::encode(&digest));
        let address = LoopbackAddrV1::from_leading_bytes(&policy.net, &digest);
        sink.emit(&AddressRecordV1 {
            address,
            source: AddressSourceV1::Hashed { algorithm },
        })?;
        emitted += 1;
    }
    Ok(FallbackStatsV1 { emitted })
}
