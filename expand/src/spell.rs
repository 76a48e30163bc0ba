//! Spell expansion: label → hex spellings → loopback addresses.
//!
//! # Loop
//!
//! ```text
//! variant_sets() → CartesianProduct → WorkQueue
//!   pop attempt
//!     odd length  → push_front(pad_left, pad_right), emit nothing
//!     even length → truncate to capacity → decode → emit
//! ```
//!
//! Padding adds exactly one nibble, so a padded attempt is always even and
//! the loop re-injects at most once per product combination. Duplicate
//! addresses are emitted as they arise; nothing is deduplicated.

use tracing::{debug, info, Level};

use lospell_kernel::net::address::LoopbackAddrV1;
use lospell_kernel::spelling::label::LabelV1;
use lospell_kernel::spelling::product::CartesianProduct;
use lospell_kernel::spelling::variants::{is_spellable, variant_sets};

use crate::contract::{AddressRecordV1, AddressSink, AddressSourceV1};
use crate::error::ExpandError;
use crate::policy::ExpandPolicyV1;
use crate::queue::WorkQueue;
use crate::render::render_spelling_choices;

/// Counters describing one spell expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellStatsV1 {
    /// Every character had at least one substitute.
    pub spellable: bool,
    /// The label was longer than the policy's length limit.
    pub length_exceeded: bool,
    /// Combinations drawn from the Cartesian product.
    pub combinations: u64,
    /// Padded attempts re-injected for odd-length combinations.
    pub reinjected: u64,
    /// Addresses handed to the sink.
    pub emitted: u64,
    /// High-water mark of pending re-injected attempts.
    pub queue_high_water: usize,
}

/// Stream every address spellable from `label` into `sink`.
///
/// An unspellable label emits nothing and is not an error. A label longer
/// than [`ExpandPolicyV1::length_limit`] is reported at info level and
/// processed anyway; its candidates are truncated to capacity.
///
/// # Errors
///
/// Returns [`ExpandError::InvalidPolicy`] before any work if the policy
/// fails validation, [`ExpandError::MalformedCandidate`] if a candidate
/// fails to decode, and [`ExpandError::EmitFailed`] if the sink fails.
pub fn spell_expand(
    label: &LabelV1,
    policy: &ExpandPolicyV1,
    sink: &mut dyn AddressSink,
) -> Result<SpellStatsV1, ExpandError> {
    policy.validate()?;

    let limit = policy.length_limit();
    let char_len = label.char_len();
    let length_exceeded = char_len > limit;
    if length_exceeded {
        info!("maximum chars possible: {limit}");
        info!("got: {char_len}");
    }

    let sets = variant_sets(label, &policy.table);
    if tracing::enabled!(Level::DEBUG) {
        debug!("Spelling choices:");
        for line in render_spelling_choices(&sets) {
            debug!("{line}");
        }
    }
    let spellable = is_spellable(&sets);
    if !spellable {
        let missing: String = sets.iter().filter(|s| s.is_empty()).map(|s| s.ch).collect();
        debug!(missing = %missing, "label has characters without a hex spelling");
    }

    debug!("Variants:");
    let mut queue = WorkQueue::new(CartesianProduct::new(&sets));
    let mut emitted: u64 = 0;
    while let Some(attempt) = queue.pop() {
        if !attempt.is_byte_aligned() {
            debug!(candidate = %attempt.text, "odd length, re-injecting padded variants");
            let left = attempt.pad_left();
            let right = attempt.pad_right();
            queue.push_front_pair(left, right);
            continue;
        }

        info!("Hex string: {}", attempt.text);
        let address = LoopbackAddrV1::from_hex(&policy.net, &attempt.text).map_err(|e| {
            ExpandError::MalformedCandidate {
                text: attempt.text.clone(),
                detail: e.to_string(),
            }
        })?;
        sink.emit(&AddressRecordV1 {
            address,
            source: AddressSourceV1::Spelled { hex: attempt.text },
        })?;
        emitted += 1;
    }

    Ok(SpellStatsV1 {
        spellable,
        length_exceeded,
        combinations: queue.drawn(),
        reinjected: queue.reinjected(),
        emitted,
        queue_high_water: queue.high_water(),
    })
}
