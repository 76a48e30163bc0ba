//! Lospell Kernel: the pure core of loopback address spelling.
//!
//! # API Surface
//!
//! - [`net::loopback::LoopbackNetV1`] -- the network and its suffix capacity
//! - [`net::address::LoopbackAddrV1`] -- addresses built from hex or raw bytes
//! - [`spelling::variants::variant_sets`] -- per-character spelling choices
//! - [`spelling::product::CartesianProduct`] -- lazy combination enumeration
//! - [`digest::algorithm::DigestAlgorithmV1`] -- the ordered fallback digests
//!
//! # Module Dependency Direction
//!
//! `net`, `spelling` and `digest` are independent leaves. Assembling
//! addresses from spellings or digests happens in `lospell_expand`.
//!
//! The kernel performs no I/O and does not log.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod net;
pub mod spelling;
