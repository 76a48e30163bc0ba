//! Golden output lock: full stdout for fixed labels.
//!
//! Expected lines were produced by an independent reference
//! implementation and cross-checked against digests computed with
//! standard tools.

use lospell_expand::policy::ExpandPolicyV1;
use lospell_harness::runner::run_to_string;

fn lines(label: &str) -> Vec<String> {
    run_to_string(label, &ExpandPolicyV1::default())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn assert_golden(label: &str, expected: &[&str]) {
    let got = lines(label);
    assert_eq!(got, expected, "golden mismatch for label {label:?}");
}

#[test]
fn golden_e() {
    assert_golden(
        "e",
        &[
            "127.14",
            "127.224",
            "127.3",
            "127.48",
            "127.225.103.23",
            "127.88.230.179",
            "127.63.121.187",
            "127.135.197.104",
            "127.66.83.134",
            "127.110.187.138",
        ],
    );
}

#[test]
fn golden_svc() {
    assert_golden(
        "svc",
        &[
            "127.5.76",
            "127.84.192",
            "127.150.30.56",
            "127.160.8.145",
            "127.52.140.101",
            "127.69.181.114",
            "127.122.102.94",
            "127.84.216.15",
        ],
    );
}

#[test]
fn golden_unspellable() {
    assert_golden(
        "a!",
        &[
            "127.164.109.163",
            "127.52.128.14",
            "127.36.46.213",
            "127.111.121.40",
            "127.110.222.186",
            "127.131.132.123",
        ],
    );
}

#[test]
fn golden_loopback_truncated_with_duplicates() {
    assert_golden(
        "loopback",
        &[
            "127.1.0.49",
            "127.16.3.20",
            "127.1.0.49",
            "127.16.3.20",
            "127.16.3.20",
            "127.16.3.20",
            "127.2.0.49",
            "127.32.3.20",
            "127.2.0.49",
            "127.32.3.20",
            "127.32.3.20",
            "127.32.3.20",
            "127.116.42.118",
            "127.60.126.205",
            "127.100.237.170",
            "127.111.41.207",
            "127.247.205.114",
            "127.230.12.59",
        ],
    );
}

#[test]
fn golden_gy_multi_substitute() {
    assert_golden(
        "gy",
        &[
            "127.110",
            "127.6.238",
            "127.110.224",
            "127.99",
            "127.6.51",
            "127.99.48",
            "127.158",
            "127.9.238",
            "127.158.224",
            "127.147",
            "127.9.51",
            "127.147.48",
            "127.94.8.190",
            "127.31.214.66",
            "127.167.90.192",
            "127.24.235.247",
            "127.142.198.151",
            "127.41.1.30",
        ],
    );
}

#[test]
fn golden_single_digit() {
    assert_golden(
        "1",
        &[
            "127.1",
            "127.16",
            "127.196.202.66",
            "127.53.106.25",
            "127.107.134.178",
            "127.77.255.78",
            "127.103.177.118",
            "127.202.44.112",
        ],
    );
}

#[test]
fn golden_cafe_even_spellings() {
    assert_golden(
        "cafe",
        &[
            "127.202.254",
            "127.202.243",
            "127.196.254",
            "127.196.243",
            "127.210.98.111",
            "127.152.78.24",
            "127.168.96.184",
            "127.53.157.81",
            "127.0.121.240",
            "127.201.82.153",
        ],
    );
}

#[test]
fn golden_web() {
    assert_golden(
        "web",
        &[
            "127.68.235",
            "127.4.78.19",
            "127.68.225.48",
            "127.68.59",
            "127.4.67.19",
            "127.68.49.48",
            "127.37.103.165",
            "127.202.132.209",
            "127.75.94.87",
            "127.203.234.216",
            "127.106.49.129",
            "127.72.13.183",
        ],
    );
}

#[test]
fn golden_pi_uses_hex_only_substitute() {
    assert_golden(
        "pi",
        &[
            "127.49.65",
            "127.114.171.138",
            "127.176.46.91",
            "127.133.180.46",
            "127.136.19.133",
            "127.125.150.5",
            "127.105.84.87",
        ],
    );
}

#[test]
fn golden_db() {
    assert_golden(
        "db",
        &[
            "127.219",
            "127.13.19",
            "127.209.48",
            "127.215.125.94",
            "127.3.82.168",
            "127.123.220.37",
            "127.45.137.230",
            "127.31.76.220",
            "127.40.41.215",
        ],
    );
}

#[test]
fn golden_empty_label() {
    assert_golden(
        "",
        &[
            "127.212.29.140",
            "127.218.57.163",
            "127.227.176.196",
            "127.207.131.225",
            "127.167.255.198",
            "127.166.159.115",
        ],
    );
}
