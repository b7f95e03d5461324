//! The Roland DT1/RQ1 wire envelope.
//!
//! ```text
//! F0 41 <dev> <model x4> <cmd> <address x4> <data ...> <checksum> F7
//! ```

use std::fmt;

use crate::address::Address;
use crate::checksum::checksum;
use crate::{INITIATOR, TERMINATOR};

/// Roland manufacturer ID.
pub const ROLAND_ID: u8 = 0x41;

/// Bytes before the address: initiator, Roland ID, device ID, model ID
/// and command.
pub const HEADER_LENGTH: usize = 8;

/// Index of the first data byte.
pub const DATA_START: usize = HEADER_LENGTH + 4;

/// Device-level constants shared by every message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeviceConfig {
    pub device_id: u8,
    pub model_id: [u8; 4],
}

impl DeviceConfig {
    pub const JDXI: DeviceConfig = DeviceConfig {
        device_id: 0x10,
        model_id: [0x00, 0x00, 0x00, 0x0E],
    };

    /// Initiator, manufacturer, device and model bytes.
    pub fn header(&self) -> [u8; 7] {
        let [m0, m1, m2, m3] = self.model_id;
        [INITIATOR, ROLAND_ID, self.device_id, m0, m1, m2, m3]
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig::JDXI
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    /// DT1, "Data Set 1": write data at an address.
    DataSet1,
    /// RQ1, "Data Request 1": ask for `size` bytes at an address.
    DataRequest1,
}

impl Command {
    pub fn to_byte(&self) -> u8 {
        match self {
            Command::DataSet1 => 0x12,
            Command::DataRequest1 => 0x11,
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x12 => Some(Command::DataSet1),
            0x11 => Some(Command::DataRequest1),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Command::DataSet1 => "DT1",
            Command::DataRequest1 => "RQ1",
        })
    }
}

/// A complete DT1 or RQ1 message.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SysExMessage {
    pub device: DeviceConfig,
    pub command: Command,
    pub address: Address,
    pub data: Vec<u8>,
}

impl SysExMessage {
    /// Checksum over the address and data.
    pub fn checksum(&self) -> u8 {
        let mut span = self.address.to_bytes().to_vec();
        span.extend(&self.data);
        checksum(&span)
    }

    /// Converts the message into bytes for MIDI messaging.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.device.header());
        result.push(self.command.to_byte());
        result.extend(self.address.to_bytes());
        result.extend(&self.data);
        result.push(self.checksum());
        result.push(TERMINATOR);
        result
    }

    /// Length of the message on the wire.
    pub fn len(&self) -> usize {
        DATA_START + self.data.len() + 2
    }

    /// Gets the wire bytes as an upper case hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    /// MD5 digest of the wire bytes.
    pub fn digest(&self) -> md5::Digest {
        md5::compute(self.to_bytes())
    }
}

impl fmt::Display for SysExMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes: Vec<String> = self.to_bytes().iter().map(|b| format!("{:02X}", b)).collect();
        write!(f, "{}", bytes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdxi_header() {
        assert_eq!(DeviceConfig::JDXI.header(), [0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E]);
        assert_eq!(DeviceConfig::default(), DeviceConfig::JDXI);
    }

    #[test]
    fn command_bytes() {
        assert_eq!(Command::from_byte(0x12), Some(Command::DataSet1));
        assert_eq!(Command::from_byte(0x11), Some(Command::DataRequest1));
        assert_eq!(Command::from_byte(0x13), None);
        assert_eq!(Command::DataRequest1.to_string(), "RQ1");
    }

    #[test]
    fn message_bytes() {
        let message = SysExMessage {
            device: DeviceConfig::JDXI,
            command: Command::DataSet1,
            address: Address::new(0x19, 0x01, 0x20, 0x0C).unwrap(),
            data: vec![0x64],
        };
        // 19 + 01 + 20 + 0C + 64 = AAh, 128 - 2Ah = 56h
        assert_eq!(
            message.to_bytes(),
            vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x01, 0x20, 0x0C, 0x64, 0x56, 0xF7]
        );
        assert_eq!(message.len(), 15);
        assert_eq!(message.to_hex(), "F041100000000E121901200C6456F7");
        assert_eq!(format!("{}", message), "F0 41 10 00 00 00 0E 12 19 01 20 0C 64 56 F7");
    }

    #[test]
    fn digest_is_stable() {
        let message = SysExMessage {
            device: DeviceConfig::JDXI,
            command: Command::DataSet1,
            address: Address::new(0x18, 0x00, 0x00, 0x10).unwrap(),
            data: vec![0x78],
        };
        assert_eq!(message.digest().0, md5::compute(message.to_bytes()).0);
        assert_eq!(format!("{:x}", message.digest()).len(), 32);
    }
}
