//! Determinism and structural lock tests.
//!
//! - DETERMINISM-INPROC: N>=10 runs yield byte-identical output.
//! - SPELL-PREFIX: every spelled address starts with 127 and carries at
//!   most `suffix_bytes` content octets.
//! - ODD-PADDING: a single odd substitute yields exactly its left- and
//!   right-padded forms.
//! - EMPTY-VARIANT: an unmapped character suppresses all spellings.

use lospell_expand::contract::{AddressRecordV1, AddressSourceV1};
use lospell_expand::policy::ExpandPolicyV1;
use lospell_expand::spell::spell_expand;
use lospell_harness::runner::run_to_string;
use lospell_kernel::net::address::LoopbackAddrV1;
use lospell_kernel::spelling::label::LabelV1;

const LABELS: &[&str] = &[
    "e", "svc", "gy", "a!", "loopback", "", "cafe", "web", "db", "pi", "zzz", "yyy", "Mixed",
    "0123456789", "quickbrownfox", "ünï",
];

fn spelled(label: &str) -> Vec<AddressRecordV1> {
    let mut sink: Vec<AddressRecordV1> = Vec::new();
    spell_expand(&LabelV1::new(label), &ExpandPolicyV1::default(), &mut sink).unwrap();
    sink
}

// --- DETERMINISM-INPROC ---

#[test]
fn determinism_inproc_n10() {
    let policy = ExpandPolicyV1::default();
    for label in LABELS {
        let first = run_to_string(label, &policy).unwrap();
        for i in 1..=10 {
            let again = run_to_string(label, &policy).unwrap();
            assert_eq!(again, first, "run {i}: output differs for {label:?}");
        }
    }
}

// --- SPELL-PREFIX ---

#[test]
fn spelled_addresses_start_with_127_and_fit_capacity() {
    let capacity = ExpandPolicyV1::default().net.suffix_bytes();
    for label in LABELS {
        for record in spelled(label) {
            let octets = record.address.octets();
            assert_eq!(octets[0], 127, "{label:?}: {}", record.address);
            assert!(
                octets.len() - 1 <= capacity,
                "{label:?}: {} exceeds capacity",
                record.address
            );
            assert!(octets.len() >= 2, "{label:?}: spelled address has no content");
        }
    }
}

#[test]
fn spelled_hex_is_even_and_decodes_to_address() {
    let policy = ExpandPolicyV1::default();
    for label in LABELS {
        for record in spelled(label) {
            let AddressSourceV1::Spelled { hex } = &record.source else {
                panic!("{label:?}: spell expansion emitted a non-spelled record");
            };
            assert_eq!(hex.len() % 2, 0, "{label:?}: odd candidate {hex} emitted");
            let rebuilt = LoopbackAddrV1::from_hex(&policy.net, hex).unwrap();
            assert_eq!(rebuilt, record.address);
        }
    }
}

// --- ODD-PADDING ---

#[test]
fn single_odd_substitute_yields_both_paddings_only() {
    // 's' → ["5"]: not a hex digit, one odd substitute.
    let hexes: Vec<String> = spelled("s")
        .into_iter()
        .map(|r| match r.source {
            AddressSourceV1::Spelled { hex } => hex,
            AddressSourceV1::Hashed { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(hexes, vec!["05", "50"]);
}

#[test]
fn label_e_enumerates_all_padded_variants() {
    let addrs: Vec<String> = spelled("e")
        .iter()
        .map(|r| r.address.to_string())
        .collect();
    assert_eq!(addrs, vec!["127.14", "127.224", "127.3", "127.48"]);
}

// --- EMPTY-VARIANT ---

#[test]
fn unmapped_char_suppresses_spellings() {
    for label in ["a!", "caf!", "!", "svc-1", "ünï"] {
        assert!(spelled(label).is_empty(), "label {label:?} should not spell");
    }
}

#[test]
fn hash_addresses_follow_spelled_ones() {
    let policy = ExpandPolicyV1::default();
    for label in LABELS {
        let out = run_to_string(label, &policy).unwrap();
        let total = out.lines().count();
        let spelled = spelled(label).len();
        assert_eq!(total, spelled + 6, "label {label:?}");
    }
}
