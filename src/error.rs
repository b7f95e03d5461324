//! Error taxonomy shared by the composer, the parser and the helpers
//! around them.

use thiserror::Error;

use crate::address::Address;

#[derive(Error, Debug)]
pub enum Error {
    /// The buffer cannot hold a complete parameter message.
    #[error("message too short: {length} bytes")]
    TooShort { length: usize },

    /// Start/end bytes or the Roland/device/model header are wrong.
    #[error("invalid System Exclusive header")]
    InvalidHeader,

    /// The checksum byte does not match the address and data bytes.
    /// The address is kept for diagnostics; nothing else from the
    /// message should be trusted.
    #[error("checksum mismatch at {address}: expected {expected:02X}h, found {found:02X}h")]
    ChecksumInvalid { address: Address, expected: u8, found: u8 },

    #[error("address field {field} out of range: {value}")]
    AddressFieldOutOfRange { field: &'static str, value: u32 },

    #[error("value {value} out of range for {name} ({min}..={max})")]
    ValueOutOfRange { name: String, value: i32, min: i32, max: i32 },

    #[error("cannot resolve section of {parameter} for {family}")]
    UnresolvedSection { parameter: String, family: String },

    /// The composer produced a header that differs from the configured
    /// device header. Indicates a bug, not bad input.
    #[error("composed header does not match device header")]
    HeaderMismatch,

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("timed out waiting for a response")]
    Timeout,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
