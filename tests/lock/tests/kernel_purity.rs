//! Build-graph isolation: the kernel stays pure.
//!
//! Verifies that nothing under `kernel/` logs or touches process I/O, and
//! that the kernel manifest does not pull in logging or CLI crates.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment kernel source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[
    "tracing::",
    "println!",
    "eprintln!",
    "std::io::stdout",
    "std::io::stderr",
    "std::env::",
    "std::fs::",
];

fn scan_rs_files(dir: &Path) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    walk(dir, &mut violations);
    violations
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        // Skip comments.
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn kernel_source_performs_no_io_or_logging() {
    let kernel_src = workspace_root().join("kernel").join("src");
    assert!(kernel_src.is_dir(), "kernel/src not found");

    let violations = scan_rs_files(&kernel_src);

    if !violations.is_empty() {
        let mut msg = String::from("I/O or logging found in kernel source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_cargo_toml_has_no_logging_or_cli_dependencies() {
    let cargo_toml = workspace_root().join("kernel").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("kernel Cargo.toml readable");
    for dep in ["tracing", "clap", "anyhow", "lospell-expand", "lospell-harness"] {
        assert!(
            !content
                .lines()
                .any(|l| l.trim_start().starts_with(&format!("{dep} "))
                    || l.trim_start().starts_with(&format!("{dep}="))),
            "kernel must not depend on {dep}"
        );
    }
}
