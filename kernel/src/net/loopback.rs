//! `LoopbackNetV1`: the network whose suffix carries encoded content.
//!
//! # Capacity
//!
//! The fixed network prefix occupies the leading octets of every address;
//! the remaining octets carry content. Capacity is expressed in hex digits
//! because spelling candidates are hex strings:
//!
//! ```text
//! suffix_hex_digits = (MAX_PREFIX_LEN - prefix_len) / 8 * 2
//! ```
//!
//! For 127.0.0.0/8 this is 6 hex digits (3 octets).

use std::fmt;
use std::net::Ipv4Addr;

/// Bit width of an IPv4 address.
pub const MAX_PREFIX_LEN: u8 = 32;

/// The IPv4 loopback network, 127.0.0.0/8.
pub const LOOPBACK_V4: LoopbackNetV1 = LoopbackNetV1 {
    octets: [127, 0, 0, 0],
    prefix_len: 8,
};

/// An octet-aligned IPv4 network inside 127.0.0.0/8.
///
/// Invariants (enforced by [`LoopbackNetV1::new`]):
/// - `prefix_len` is a multiple of 8 in `8..32`, so at least one octet is
///   left for content;
/// - `network` lies inside 127.0.0.0/8 and has no host bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopbackNetV1 {
    octets: [u8; 4],
    prefix_len: u8,
}

/// Error constructing a [`LoopbackNetV1`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    /// Prefix length is not octet-aligned or leaves no content octet.
    UnsupportedPrefix { prefix_len: u8 },
    /// The network address lies outside 127.0.0.0/8.
    NotLoopback { network: Ipv4Addr },
    /// The network address has bits set below the prefix.
    HostBitsSet { network: Ipv4Addr, prefix_len: u8 },
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPrefix { prefix_len } => write!(
                f,
                "prefix length /{prefix_len} is not a multiple of 8 in 8..{MAX_PREFIX_LEN}"
            ),
            Self::NotLoopback { network } => {
                write!(f, "network {network} is outside 127.0.0.0/8")
            }
            Self::HostBitsSet {
                network,
                prefix_len,
            } => write!(f, "network {network}/{prefix_len} has host bits set"),
        }
    }
}

impl std::error::Error for NetError {}

impl LoopbackNetV1 {
    /// Construct a validated loopback network.
    ///
    /// # Errors
    ///
    /// Returns [`NetError`] if the prefix is not octet-aligned, leaves no
    /// content octet, the address is outside 127.0.0.0/8, or host bits are
    /// set.
    pub fn new(network: Ipv4Addr, prefix_len: u8) -> Result<Self, NetError> {
        if prefix_len < 8 || prefix_len >= MAX_PREFIX_LEN || prefix_len % 8 != 0 {
            return Err(NetError::UnsupportedPrefix { prefix_len });
        }
        if network.octets()[0] != 127 {
            return Err(NetError::NotLoopback { network });
        }
        let net = Self {
            octets: network.octets(),
            prefix_len,
        };
        if u32::from(network) & net.hostmask_bits() != 0 {
            return Err(NetError::HostBitsSet {
                network,
                prefix_len,
            });
        }
        Ok(net)
    }

    /// The network address.
    #[must_use]
    pub const fn network(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets;
        Ipv4Addr::new(a, b, c, d)
    }

    /// The prefix length in bits.
    #[must_use]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Number of octets fixed by the prefix.
    #[must_use]
    pub const fn prefix_octet_count(&self) -> usize {
        (self.prefix_len / 8) as usize
    }

    /// The fixed leading octets shared by every address in this network.
    #[must_use]
    pub fn prefix_octets(&self) -> &[u8] {
        &self.octets[..self.prefix_octet_count()]
    }

    /// Number of octets available for content.
    #[must_use]
    pub const fn suffix_bytes(&self) -> usize {
        ((MAX_PREFIX_LEN - self.prefix_len) / 8) as usize
    }

    /// Content capacity in hex digits (two per octet).
    #[must_use]
    pub const fn suffix_hex_digits(&self) -> usize {
        self.suffix_bytes() * 2
    }

    /// Total number of addresses in the network.
    #[must_use]
    pub const fn num_addresses(&self) -> u64 {
        1u64 << (MAX_PREFIX_LEN - self.prefix_len)
    }

    fn hostmask_bits(&self) -> u32 {
        u32::MAX >> self.prefix_len
    }

    /// The host mask (e.g. `0.255.255.255` for /8).
    #[must_use]
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.hostmask_bits())
    }

    /// The network mask (e.g. `255.0.0.0` for /8).
    #[must_use]
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.hostmask_bits())
    }

    /// Named attributes describing this network, for diagnostics.
    ///
    /// Attributes with an empty or zero value are omitted.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let with_prefixlen = self.to_string();
        let attrs = [
            ("max_prefixlen", MAX_PREFIX_LEN.to_string()),
            ("network_address", self.network().to_string()),
            ("hostmask", self.hostmask().to_string()),
            ("netmask", self.netmask().to_string()),
            ("with_prefixlen", with_prefixlen.clone()),
            ("compressed", with_prefixlen.clone()),
            ("exploded", with_prefixlen),
            ("with_netmask", format!("{}/{}", self.network(), self.netmask())),
            (
                "with_hostmask",
                format!("{}/{}", self.network(), self.hostmask()),
            ),
            ("num_addresses", self.num_addresses().to_string()),
            ("prefixlen", self.prefix_len.to_string()),
        ];
        attrs
            .into_iter()
            .filter(|(_, v)| !v.is_empty() && v != "0" && v != "0.0.0.0")
            .collect()
    }
}

impl Default for LoopbackNetV1 {
    fn default() -> Self {
        LOOPBACK_V4
    }
}

impl fmt::Display for LoopbackNetV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len)
    }
}
