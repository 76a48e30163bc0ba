//! `lospell` -- derives memorable loopback addresses from a service name.
//!
//! **Output:** one dotted-decimal address per line on stdout. Spelled
//! addresses come first (possibly none), then one hash-derived address per
//! digest algorithm. Diagnostics go to stderr.
//!
//! **Usage:**
//! ```text
//! lospell [-v|-vv] <service>
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lospell_expand::policy::ExpandPolicyV1;
use lospell_harness::logging::{stderr_subscriber, Verbosity};
use lospell_harness::output::LineSink;
use lospell_harness::runner::run;

/// Derive memorable loopback addresses from a service name.
#[derive(Parser, Debug)]
#[command(
    name = "lospell",
    version,
    about = "Derive memorable loopback addresses from a service name"
)]
struct Args {
    /// Service label to encode (case-insensitive).
    service: String,

    /// Increase diagnostic detail on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let subscriber = stderr_subscriber(Verbosity::from_count(args.verbose));
    let policy = ExpandPolicyV1::default();

    let stdout = io::stdout();
    let mut sink = LineSink::new(stdout.lock());
    tracing::subscriber::with_default(subscriber, || run(&args.service, &policy, &mut sink))
        .with_context(|| format!("deriving addresses for {:?}", args.service))?;

    Ok(())
}
