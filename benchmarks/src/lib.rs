//! Shared helpers for lospell benchmark suites.

use lospell_expand::contract::{AddressRecordV1, AddressSink};
use lospell_kernel::spelling::label::LabelV1;
use lospell_kernel::spelling::table::TranslationTableV1;
use lospell_kernel::spelling::variants::{variant_sets, VariantSetV1};

/// Labels spanning the interesting regimes: short, multi-substitute
/// (wide product), long (truncated), and unspellable.
pub const BENCH_LABELS: &[(&str, &str)] = &[
    ("short", "svc"),
    ("wide", "yyyy"),
    ("long", "loopback"),
    ("unspellable", "a!"),
];

/// Variant sets for `label` under the builtin table.
#[must_use]
pub fn builtin_sets(label: &str) -> Vec<VariantSetV1> {
    variant_sets(&LabelV1::new(label), &TranslationTableV1::builtin())
}

/// A sink that only counts emitted records.
#[derive(Debug, Default)]
pub struct CountingSink {
    pub count: u64,
}

impl AddressSink for CountingSink {
    fn emit(&mut self, _record: &AddressRecordV1) -> std::io::Result<()> {
        self.count += 1;
        Ok(())
    }
}
