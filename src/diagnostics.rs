//! Diagnostics sink handed to the composer and the parser.
//!
//! The codec itself never logs. Callers that want to see what happened
//! pass a sink: [LogDiagnostics] forwards to the `log` facade,
//! [RecordingDiagnostics] keeps the events in memory.

use std::sync::Mutex;

use log::{debug, warn};

use crate::address::Address;
use crate::error::Error;
use crate::message::SysExMessage;
use crate::parameter::Parameter;
use crate::parse::ParsedMessage;

/// Receives events from compose and parse calls. Every method has an
/// empty default, so a sink only implements what it cares about.
pub trait Diagnostics {
    fn composed(&self, _parameter: &Parameter, _message: &SysExMessage) {}

    fn parsed(&self, _message: &ParsedMessage) {}

    fn checksum_mismatch(&self, _address: &Address, _expected: u8, _found: u8) {}

    fn decode_failed(&self, _name: &str, _error: &Error) {}

    /// An LMB was resolved by stepping back to a block that started at the
    /// previous LMB.
    fn block_spill(&self, _lmb: u8) {}
}

/// Forwards events to the `log` crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn composed(&self, parameter: &Parameter, message: &SysExMessage) {
        debug!("{} {} -> {}", message.command, parameter, message);
    }

    fn parsed(&self, message: &ParsedMessage) {
        debug!(
            "{} {} {} {}: {} decoded, {} failed",
            message.command,
            message.address,
            message.temporary_area,
            message.synth_tone(),
            message.report.successes.len(),
            message.report.failures.len()
        );
    }

    fn checksum_mismatch(&self, address: &Address, expected: u8, found: u8) {
        warn!("checksum mismatch at {}: expected {:02X}h, found {:02X}h", address, expected, found);
    }

    fn decode_failed(&self, name: &str, error: &Error) {
        warn!("cannot decode {}: {}", name, error);
    }

    fn block_spill(&self, lmb: u8) {
        debug!("LMB {:02X}h resolved to block at {:02X}h", lmb, lmb.wrapping_sub(1));
    }
}

/// Keeps a text line per event.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the events recorded so far.
    pub fn take(&self) -> Vec<String> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    fn record(&self, event: String) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn composed(&self, parameter: &Parameter, message: &SysExMessage) {
        self.record(format!("composed {} {}", parameter, message));
    }

    fn parsed(&self, message: &ParsedMessage) {
        self.record(format!(
            "parsed {} {} {}",
            message.address,
            message.temporary_area,
            message.synth_tone()
        ));
    }

    fn checksum_mismatch(&self, address: &Address, expected: u8, found: u8) {
        self.record(format!("checksum {} {:02X} {:02X}", address, expected, found));
    }

    fn decode_failed(&self, name: &str, error: &Error) {
        self.record(format!("failed {}: {}", name, error));
    }

    fn block_spill(&self, lmb: u8) {
        self.record(format!("block spill {:02X}", lmb));
    }
}
