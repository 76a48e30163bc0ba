//! `LoopbackAddrV1`: an address built from a network prefix plus content.
//!
//! # Layout
//!
//! | Octets                      | Source                          |
//! |-----------------------------|---------------------------------|
//! | `0..prefix_octet_count`     | network prefix (127 for /8)     |
//! | `prefix_octet_count..len`   | content, at most `suffix_bytes` |
//!
//! Content shorter than capacity is NOT zero-filled: the address simply
//! carries fewer octets and renders with fewer dotted groups (`127.3`).

use std::fmt;
use std::net::Ipv4Addr;

use crate::net::loopback::LoopbackNetV1;

/// A loopback address with between one and four octets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopbackAddrV1 {
    octets: [u8; 4],
    len: u8,
}

/// Error building a [`LoopbackAddrV1`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Content is longer than the network's suffix capacity.
    ContentTooLong { len: usize, capacity: usize },
    /// A hex candidate could not be decoded into whole octets.
    InvalidHex { text: String, detail: String },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentTooLong { len, capacity } => {
                write!(f, "content of {len} octets exceeds capacity of {capacity}")
            }
            Self::InvalidHex { text, detail } => {
                write!(f, "cannot decode hex candidate {text:?}: {detail}")
            }
        }
    }
}

impl std::error::Error for AddressError {}

impl LoopbackAddrV1 {
    /// Build an address from raw content octets.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::ContentTooLong`] if `content` exceeds
    /// `net.suffix_bytes()`.
    pub fn from_content(net: &LoopbackNetV1, content: &[u8]) -> Result<Self, AddressError> {
        let capacity = net.suffix_bytes();
        if content.len() > capacity {
            return Err(AddressError::ContentTooLong {
                len: content.len(),
                capacity,
            });
        }
        let prefix = net.prefix_octets();
        let mut octets = [0u8; 4];
        octets[..prefix.len()].copy_from_slice(prefix);
        octets[prefix.len()..prefix.len() + content.len()].copy_from_slice(content);
        let len = u8::try_from(prefix.len() + content.len()).unwrap_or(4);
        Ok(Self { octets, len })
    }

    /// Build an address from the leading octets of a digest (or any byte
    /// string longer than capacity). Excess bytes are discarded.
    #[must_use]
    pub fn from_leading_bytes(net: &LoopbackNetV1, bytes: &[u8]) -> Self {
        let take = bytes.len().min(net.suffix_bytes());
        let prefix = net.prefix_octets();
        let mut octets = [0u8; 4];
        octets[..prefix.len()].copy_from_slice(prefix);
        octets[prefix.len()..prefix.len() + take].copy_from_slice(&bytes[..take]);
        let len = u8::try_from(prefix.len() + take).unwrap_or(4);
        Self { octets, len }
    }

    /// Build an address from a hex candidate string.
    ///
    /// Only the first `net.suffix_hex_digits()` characters are used; the
    /// remainder is silently discarded. The retained prefix must be an even
    /// number of hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidHex`] if the retained characters are
    /// not valid hex or have odd length.
    pub fn from_hex(net: &LoopbackNetV1, text: &str) -> Result<Self, AddressError> {
        let truncated: String = text.chars().take(net.suffix_hex_digits()).collect();
        let content = hex::decode(&truncated).map_err(|e| AddressError::InvalidHex {
            text: text.to_string(),
            detail: e.to_string(),
        })?;
        Self::from_content(net, &content)
    }

    /// The octets present in this address (prefix first).
    #[must_use]
    pub fn octets(&self) -> &[u8] {
        &self.octets[..usize::from(self.len)]
    }

    /// Number of octets present.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether no octets are present (never true for a built address).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The full IPv4 address, if all four octets are present.
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        (self.len == 4).then(|| Ipv4Addr::from(self.octets))
    }
}

impl fmt::Display for LoopbackAddrV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.octets().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{octet}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LoopbackAddrV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoopbackAddrV1({self})")
    }
}
