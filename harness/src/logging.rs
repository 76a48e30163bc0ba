//! Diagnostic logging setup.
//!
//! Verbosity is an explicit value turned into a subscriber once at
//! startup. The subscriber is installed for the duration of a run with
//! `tracing::subscriber::with_default`, never as a process-global, and
//! always writes to stderr so diagnostics cannot mix with addresses.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// How much diagnostic detail to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only (no `-v`).
    Errors,
    /// Informational messages (`-v`).
    Info,
    /// Debug dumps of spelling choices and network attributes (`-vv`).
    Debug,
}

impl Verbosity {
    /// Map a repeated-flag count to a verbosity.
    #[must_use]
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Errors,
            1 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// The `tracing` level filter for this verbosity.
    #[must_use]
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Errors => LevelFilter::ERROR,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Subscriber writing plain diagnostics to `make_writer`.
pub fn subscriber_with_writer<W>(
    verbosity: Verbosity,
    make_writer: W,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_max_level(verbosity.level_filter())
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .finish()
}

/// Subscriber writing diagnostics to stderr, colored only on a terminal.
pub fn stderr_subscriber(verbosity: Verbosity) -> impl tracing::Subscriber + Send + Sync + 'static {
    let ansi = std::io::stderr().is_terminal();
    subscriber_with_writer(verbosity, std::io::stderr, ansi)
}
