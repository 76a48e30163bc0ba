//! Lospell Expand: the two address pipelines over kernel primitives.
//!
//! This crate depends only on `lospell_kernel` -- it does NOT depend on
//! `lospell_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lospell_kernel  ←  lospell_expand  ←  lospell_harness
//! (pure types)       (pipelines)         (runner, sinks, CLI)
//! ```
//!
//! # Key items
//!
//! - [`spell::spell_expand`] -- stream every hex spelling of a label as an address
//! - [`fallback::hash_fallback`] -- stream one digest-derived address per algorithm
//! - [`policy::ExpandPolicyV1`] -- network, table and digest configuration
//! - [`contract::AddressSink`] -- trait receiving emitted addresses
//! - [`queue::WorkQueue`] -- worklist with front re-injection of padded attempts

#![forbid(unsafe_code)]

pub mod attempt;
pub mod contract;
pub mod error;
pub mod fallback;
pub mod policy;
pub mod queue;
pub mod render;
pub mod spell;
