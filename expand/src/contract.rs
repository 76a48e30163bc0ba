//! Emission contract between the pipelines and their output.
//!
//! Both pipelines stream: each address is handed to the sink as soon as it
//! is produced, never batched. The sink decides where it goes.

use lospell_kernel::digest::algorithm::DigestAlgorithmV1;
use lospell_kernel::net::address::LoopbackAddrV1;

/// Which pipeline produced an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSourceV1 {
    /// Spell expansion, from the given even-length hex candidate.
    Spelled { hex: String },
    /// Hash fallback, from the given digest.
    Hashed { algorithm: DigestAlgorithmV1 },
}

/// One emitted address with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecordV1 {
    pub address: LoopbackAddrV1,
    pub source: AddressSourceV1,
}

/// Receiver for emitted addresses.
pub trait AddressSink {
    /// Accept one address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the address could not be delivered; the
    /// pipeline stops and reports it.
    fn emit(&mut self, record: &AddressRecordV1) -> std::io::Result<()>;
}

/// Collects records in memory, in emission order.
impl AddressSink for Vec<AddressRecordV1> {
    fn emit(&mut self, record: &AddressRecordV1) -> std::io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
