//! Tiny binary that derives addresses for a fixed label set and prints
//! deterministic output lines for cross-process verification.
//!
//! Used by the cross-process determinism lock to verify that output is
//! identical across process environments (cwd, locale, env).
//!
//! Usage: `address_fixture`
//! Output: one `label=address` line per emitted address, labels in
//! `FIXTURE_LABELS` order, followed by `total=<n>`.

use lospell_expand::policy::ExpandPolicyV1;
use lospell_harness::runner::run_to_string;

/// Labels covering spellable, unspellable, long, empty, and non-ASCII input.
const FIXTURE_LABELS: &[&str] = &["e", "svc", "gy", "a!", "loopback", "", "Straße"];

fn main() {
    let policy = ExpandPolicyV1::default();
    let mut total = 0usize;
    for label in FIXTURE_LABELS {
        let out = match run_to_string(label, &policy) {
            Ok(out) => out,
            Err(e) => {
                eprintln!("address_fixture: {label:?}: {e}");
                std::process::exit(1);
            }
        };
        for line in out.lines() {
            println!("{label}={line}");
            total += 1;
        }
    }
    println!("total={total}");
}
