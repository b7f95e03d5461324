//! Synchronous parameter read over a MIDI transport.
//!
//! The wire protocol has no request IDs: a response is recognized only by
//! being a DT1 for the requested address. Callers must therefore keep at
//! most one read in flight per transport.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::address::{Address, SynthFamily};
use crate::compose::SysExComposer;
use crate::error::{Error, Result};
use crate::message::Command;
use crate::parameter::Parameter;
use crate::parse::SysExParser;

/// How long a read waits for the device by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A bidirectional SysEx connection.
pub trait Transport {
    fn send(&mut self, message: &[u8]) -> io::Result<()>;

    /// Returns the next complete message, or `None` if nothing is waiting.
    fn receive(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Requests one parameter and waits for the device to answer. Returns
/// the raw value.
#[allow(clippy::too_many_arguments)]
pub fn read_parameter<T: Transport>(
    transport: &mut T,
    composer: &SysExComposer,
    parser: &SysExParser,
    base: Address,
    family: SynthFamily,
    parameter: &Parameter,
    partial: Option<u8>,
    timeout: Duration,
) -> Result<u32> {
    let request = composer.request_parameter(base, family, parameter, partial)?;
    transport.send(&request.to_bytes())?;

    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        let Some(bytes) = transport.receive()? else {
            thread::sleep(POLL_INTERVAL);
            continue;
        };
        let parsed = match parser.parse(&bytes) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("discarding message while waiting for {}: {}", parameter, e);
                continue;
            }
        };
        if parsed.command != Command::DataSet1 || parsed.address != request.address {
            continue;
        }
        match parsed.value(parameter.name) {
            Some(value) => return Ok(value),
            None => debug!("response at {} did not decode {}", parsed.address, parameter),
        }
    }
    Err(Error::Timeout)
}
