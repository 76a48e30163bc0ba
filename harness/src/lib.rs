//! Lospell Harness: runs both pipelines for a label and owns the process
//! surface (line output, diagnostic logging, the `lospell` binary).
//!
//! # Modules
//!
//! - [`runner`] -- orchestrates spell expansion then hash fallback
//! - [`output`] -- `LineSink`, one address per line
//! - [`logging`] -- verbosity → stderr `tracing` subscriber

#![forbid(unsafe_code)]

pub mod logging;
pub mod output;
pub mod runner;
