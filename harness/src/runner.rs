//! Runner: orchestrates both pipelines for one label.
//!
//! The runner uses ONLY `lospell_expand` entry points. It does not spell,
//! hash, or format addresses itself.
//!
//! # Pipeline
//!
//! ```text
//! validate policy → case-fold label → [debug: network attributes]
//!   → spell_expand()  (zero or more addresses)
//!   → hash_fallback() (one address per algorithm)
//! ```
//!
//! Both stages stream into the same sink, spell results first.

use tracing::{debug, Level};

use lospell_expand::contract::AddressSink;
use lospell_expand::error::ExpandError;
use lospell_expand::fallback::{hash_fallback, FallbackStatsV1};
use lospell_expand::policy::ExpandPolicyV1;
use lospell_expand::spell::{spell_expand, SpellStatsV1};
use lospell_kernel::spelling::label::LabelV1;

use crate::output::LineSink;

/// What one run did. Logged at debug level; never written to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummaryV1 {
    /// The case-folded label.
    pub label: LabelV1,
    /// Spell expansion counters.
    pub spell: SpellStatsV1,
    /// Hash fallback counters.
    pub fallback: FallbackStatsV1,
}

impl RunSummaryV1 {
    /// Total addresses emitted by both stages.
    #[must_use]
    pub fn total_emitted(&self) -> u64 {
        self.spell.emitted + self.fallback.emitted
    }
}

/// Derive every address for `raw_label` and stream them into `sink`.
///
/// # Errors
///
/// Returns [`ExpandError::InvalidPolicy`] before any output if the policy
/// is invalid, and propagates pipeline errors (malformed candidate, sink
/// failure) as they occur.
pub fn run(
    raw_label: &str,
    policy: &ExpandPolicyV1,
    sink: &mut dyn AddressSink,
) -> Result<RunSummaryV1, ExpandError> {
    policy.validate()?;

    if tracing::enabled!(Level::DEBUG) {
        debug!("{}", policy.net);
        for (name, value) in policy.net.attributes() {
            debug!("\t {name} = {value}");
        }
    }

    let label = LabelV1::new(raw_label);
    let spell = spell_expand(&label, policy, sink)?;
    let fallback = hash_fallback(&label, policy, sink)?;

    let summary = RunSummaryV1 {
        label,
        spell,
        fallback,
    };
    debug!(
        label = %summary.label,
        spelled = summary.spell.emitted,
        hashed = summary.fallback.emitted,
        combinations = summary.spell.combinations,
        reinjected = summary.spell.reinjected,
        "run complete"
    );
    Ok(summary)
}

/// Run and collect the output lines exactly as the CLI prints them.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_to_string(raw_label: &str, policy: &ExpandPolicyV1) -> Result<String, ExpandError> {
    let mut sink = LineSink::new(Vec::new());
    run(raw_label, policy, &mut sink)?;
    String::from_utf8(sink.into_inner()).map_err(|e| ExpandError::EmitFailed {
        detail: e.to_string(),
    })
}
