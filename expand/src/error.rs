//! Typed expansion errors.
//!
//! `ExpandError` covers pre-flight failures (policy, table) and the two
//! runtime failures that cannot be expressed as "zero addresses": a
//! candidate that fails to decode and a sink that fails to accept output.
//! An unspellable or over-long label is never an error.

use lospell_kernel::spelling::table::TableError;

/// Typed failure for address expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The policy failed pre-flight validation.
    InvalidPolicy { detail: String },
    /// The translation table failed validation.
    Table(TableError),
    /// A byte-aligned candidate could not be decoded into an address.
    MalformedCandidate { text: String, detail: String },
    /// The address sink rejected an address.
    EmitFailed { detail: String },
}

impl std::fmt::Display for ExpandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid expansion policy: {detail}"),
            Self::Table(e) => write!(f, "invalid translation table: {e}"),
            Self::MalformedCandidate { text, detail } => {
                write!(f, "malformed spelling candidate {text:?}: {detail}")
            }
            Self::EmitFailed { detail } => write!(f, "failed to emit address: {detail}"),
        }
    }
}

impl std::error::Error for ExpandError {}

impl From<TableError> for ExpandError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

impl From<std::io::Error> for ExpandError {
    fn from(e: std::io::Error) -> Self {
        Self::EmitFailed {
            detail: e.to_string(),
        }
    }
}
