//! Network layer: the loopback network and the addresses derived from it.
//!
//! - [`loopback`]: `LoopbackNetV1`, suffix capacity, diagnostic attributes
//! - [`address`]: `LoopbackAddrV1`, hex/byte construction, dotted rendering

pub mod address;
pub mod loopback;
