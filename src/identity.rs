//! Universal Non-Real-time identity request and reply.
//!
//! ```text
//! request: F0 7E <dev> 06 01 F7
//! reply:   F0 7E <dev> 06 02 <manufacturer> <family x2> <model x2> <version x4> F7
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::message::ROLAND_ID;
use crate::{INITIATOR, NON_REAL_TIME, TERMINATOR};

/// General information sub-ID.
pub const GENERAL_INFORMATION: u8 = 0x06;
pub const IDENTITY_REQUEST: u8 = 0x01;
pub const IDENTITY_REPLY: u8 = 0x02;

/// Device ID that every device answers to.
pub const BROADCAST: u8 = 0x7F;

/// Family code of the JD-Xi.
pub const JDXI_FAMILY: [u8; 2] = [0x0E, 0x03];

const REPLY_LENGTH: usize = 15;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct IdentityRequest {
    pub device_id: u8,
}

impl Default for IdentityRequest {
    fn default() -> Self {
        IdentityRequest { device_id: BROADCAST }
    }
}

impl IdentityRequest {
    pub fn new(device_id: u8) -> Self {
        IdentityRequest { device_id }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        vec![
            INITIATOR,
            NON_REAL_TIME,
            self.device_id,
            GENERAL_INFORMATION,
            IDENTITY_REQUEST,
            TERMINATOR,
        ]
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct IdentityReply {
    pub device_id: u8,
    pub manufacturer: u8,
    pub family: [u8; 2],
    pub model: [u8; 2],
    pub version: [u8; 4],
}

impl IdentityReply {
    /// Parses a reply. Only single byte manufacturer IDs are recognized.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < REPLY_LENGTH {
            return Err(Error::TooShort { length: data.len() });
        }
        if data.len() != REPLY_LENGTH
            || data[0] != INITIATOR
            || data[1] != NON_REAL_TIME
            || data[3] != GENERAL_INFORMATION
            || data[4] != IDENTITY_REPLY
            || data[REPLY_LENGTH - 1] != TERMINATOR
        {
            return Err(Error::InvalidHeader);
        }
        Ok(IdentityReply {
            device_id: data[2],
            manufacturer: data[5],
            family: [data[6], data[7]],
            model: [data[8], data[9]],
            version: [data[10], data[11], data[12], data[13]],
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = vec![
            INITIATOR,
            NON_REAL_TIME,
            self.device_id,
            GENERAL_INFORMATION,
            IDENTITY_REPLY,
            self.manufacturer,
        ];
        result.extend(self.family);
        result.extend(self.model);
        result.extend(self.version);
        result.push(TERMINATOR);
        result
    }

    /// True if the reply comes from a JD-Xi.
    pub fn is_jdxi(&self) -> bool {
        self.manufacturer == ROLAND_ID && self.family == JDXI_FAMILY
    }
}

impl fmt::Display for IdentityReply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "manufacturer {:02X}h, family {}, model {}, version {}",
            self.manufacturer,
            hex::encode_upper(self.family),
            hex::encode_upper(self.model),
            hex::encode_upper(self.version)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JDXI_REPLY: [u8; 15] = [
        0xF0, 0x7E, 0x10, 0x06, 0x02, 0x41, 0x0E, 0x03, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0xF7,
    ];

    #[test]
    fn request_bytes() {
        assert_eq!(IdentityRequest::default().to_bytes(), vec![0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7]);
        assert_eq!(IdentityRequest::new(0x10).to_bytes()[2], 0x10);
    }

    #[test]
    fn jdxi_reply() {
        let reply = IdentityReply::parse(&JDXI_REPLY).unwrap();
        assert!(reply.is_jdxi());
        assert_eq!(reply.device_id, 0x10);
        assert_eq!(reply.version, [0x00, 0x03, 0x00, 0x00]);
        assert_eq!(reply.to_bytes(), JDXI_REPLY.to_vec());
        assert_eq!(reply.to_string(), "manufacturer 41h, family 0E03, model 0000, version 00030000");
    }

    #[test]
    fn other_device() {
        let mut data = JDXI_REPLY;
        data[6] = 0x1A;
        assert!(!IdentityReply::parse(&data).unwrap().is_jdxi());

        let mut data = JDXI_REPLY;
        data[5] = 0x40;
        assert!(!IdentityReply::parse(&data).unwrap().is_jdxi());
    }

    #[test]
    fn malformed_reply() {
        assert!(matches!(IdentityReply::parse(&JDXI_REPLY[..6]), Err(Error::TooShort { length: 6 })));

        let mut data = JDXI_REPLY;
        data[4] = IDENTITY_REQUEST;
        assert!(matches!(IdentityReply::parse(&data), Err(Error::InvalidHeader)));
    }
}
