//! # jdxi-sysex
//!
//! `jdxi-sysex` builds and parses the Roland System Exclusive messages used to
//! edit a JD-Xi synthesizer: DT1 parameter writes and block dumps, RQ1 data
//! requests, and the universal identity request/reply.
//!
//! Parameters are described by static tables in [registry]. A write is
//! composed from a family, a parameter and a display value:
//!
//! ```
//! use jdxi_sysex::{SysExComposer, SynthFamily, registry};
//!
//! let family = SynthFamily::DigitalSynth1;
//! let cutoff = registry::resolve_name(family, "FILTER_CUTOFF").unwrap();
//! let message = SysExComposer::default()
//!     .compose(family.base_address(), family, cutoff, 100, Some(1))
//!     .unwrap();
//! assert_eq!(message.to_string(), "F0 41 10 00 00 00 0E 12 19 01 20 0C 64 56 F7");
//! ```

use std::fs;

use log::error;

pub mod address;
pub mod checksum;
pub mod compose;
pub mod diagnostics;
pub mod error;
pub mod identity;
pub mod message;
pub mod nibble;
pub mod parameter;
pub mod parse;
pub mod registry;
pub mod request;

pub use address::{Address, SynthFamily, SynthTone};
pub use compose::SysExComposer;
pub use diagnostics::{Diagnostics, LogDiagnostics, RecordingDiagnostics};
pub use error::{Error, Result};
pub use message::{Command, DeviceConfig, SysExMessage};
pub use parameter::{Parameter, Section, Transform, Width};
pub use parse::{parse, DecodeReport, ParsedMessage, SysExParser};

/// System Exclusive message initiator.
pub const INITIATOR: u8 = 0xf0;

/// System Exclusive message terminator.
pub const TERMINATOR: u8 = 0xf7;

/// Universal non-real-time SysEx message indicator.
pub const NON_REAL_TIME: u8 = 0x7e;

/// Returns the number of System Exclusive messages in this slice,
/// based on the count of terminator bytes.
pub fn message_count(data: &[u8]) -> usize {
    data.iter().filter(|&n| *n == TERMINATOR).count()
}

/// Splits the data by the terminator byte, including it. Bytes before an
/// initiator and an unterminated tail are dropped.
pub fn split_messages(data: &[u8]) -> Vec<Vec<u8>> {
    data.split_inclusive(|&n| n == TERMINATOR)
        .filter(|part| part.last() == Some(&TERMINATOR))
        .filter_map(|part| {
            let start = part.iter().position(|&n| n == INITIATOR)?;
            Some(part[start..].to_vec())
        })
        .collect()
}

/// Reads the whole file, typically a .syx dump.
pub fn read_file(name: &str) -> Option<Vec<u8>> {
    match fs::read(name) {
        Ok(data) => Some(data),
        Err(e) => {
            error!("Error reading file {}: {}", name, e);
            None
        }
    }
}
