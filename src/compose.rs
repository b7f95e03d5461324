//! Building DT1 parameter writes and RQ1 requests.

use crate::address::{Address, SynthFamily};
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::message::{Command, DeviceConfig, SysExMessage};
use crate::parameter::{Parameter, Section};
use crate::{INITIATOR, TERMINATOR};

/// Composes messages for one device. Holds no state between calls.
pub struct SysExComposer<'a> {
    device: DeviceConfig,
    diagnostics: Option<&'a dyn Diagnostics>,
}

impl Default for SysExComposer<'_> {
    fn default() -> Self {
        SysExComposer::new(DeviceConfig::JDXI)
    }
}

impl<'a> SysExComposer<'a> {
    pub fn new(device: DeviceConfig) -> Self {
        SysExComposer { device, diagnostics: None }
    }

    pub fn with_diagnostics(self, diagnostics: &'a dyn Diagnostics) -> Self {
        SysExComposer { diagnostics: Some(diagnostics), ..self }
    }

    pub fn device(&self) -> DeviceConfig {
        self.device
    }

    /// Resolves the address of the block holding `section` for `family`,
    /// relative to `base` (normally the family's temporary area).
    pub fn section_address(
        &self,
        base: Address,
        family: SynthFamily,
        section: Section,
        partial: Option<u8>,
    ) -> Result<Address> {
        let lmb = section.resolve_lmb(family, partial).ok_or_else(|| Error::UnresolvedSection {
            parameter: section.name().to_string(),
            family: family.to_string(),
        })?;
        base.offset_by((lmb as u16) << 8)
    }

    /// Resolves the address of a single parameter.
    pub fn parameter_address(
        &self,
        base: Address,
        family: SynthFamily,
        parameter: &Parameter,
        partial: Option<u8>,
    ) -> Result<Address> {
        let block = self
            .section_address(base, family, parameter.section, partial)
            .map_err(|e| match e {
                Error::UnresolvedSection { family, .. } => Error::UnresolvedSection {
                    parameter: parameter.name.to_string(),
                    family,
                },
                other => other,
            })?;
        block.offset_by(parameter.offset)
    }

    /// Composes a DT1 write of `display` to `parameter`.
    pub fn compose(
        &self,
        base: Address,
        family: SynthFamily,
        parameter: &Parameter,
        display: i32,
        partial: Option<u8>,
    ) -> Result<SysExMessage> {
        let address = self.parameter_address(base, family, parameter, partial)?;
        let raw = parameter.to_midi(display)?;
        let data = parameter.encode(raw)?;
        let message = self.finish(Command::DataSet1, address, data)?;
        if let Some(diagnostics) = self.diagnostics {
            diagnostics.composed(parameter, &message);
        }
        Ok(message)
    }

    /// Composes a DT1 write of a switch parameter by its label.
    pub fn compose_label(
        &self,
        base: Address,
        family: SynthFamily,
        parameter: &Parameter,
        label: &str,
        partial: Option<u8>,
    ) -> Result<SysExMessage> {
        let raw = parameter
            .raw_for_label(label)
            .ok_or_else(|| Error::UnknownParameter(format!("{}={}", parameter.name, label)))?;
        self.compose(base, family, parameter, parameter.from_midi(raw), partial)
    }

    /// Composes an RQ1 request for `size` bytes (a `0xHHLL` size) at
    /// `address`.
    pub fn compose_request(&self, address: Address, size: u16) -> Result<SysExMessage> {
        let size = Address::new(0, 0, 0, 0)?.offset_by(size)?;
        self.finish(Command::DataRequest1, address, size.to_bytes().to_vec())
    }

    /// Composes an RQ1 request for the value of one parameter.
    pub fn request_parameter(
        &self,
        base: Address,
        family: SynthFamily,
        parameter: &Parameter,
        partial: Option<u8>,
    ) -> Result<SysExMessage> {
        let address = self.parameter_address(base, family, parameter, partial)?;
        self.compose_request(address, parameter.size() as u16)
    }

    /// Composes an RQ1 request for a whole section dump.
    pub fn request_section(
        &self,
        base: Address,
        family: SynthFamily,
        section: Section,
        partial: Option<u8>,
    ) -> Result<SysExMessage> {
        let address = self.section_address(base, family, section, partial)?;
        self.compose_request(address, section.block_size())
    }

    fn finish(&self, command: Command, address: Address, data: Vec<u8>) -> Result<SysExMessage> {
        let message = SysExMessage { device: self.device, command, address, data };
        let bytes = message.to_bytes();

        let header = self.device.header();
        let header_ok = bytes.starts_with(&header)
            && header[1..].iter().all(|&b| b <= 0x7F)
            && bytes.first() == Some(&INITIATOR)
            && bytes.last() == Some(&TERMINATOR);
        if !header_ok {
            return Err(Error::HeaderMismatch);
        }
        Ok(message)
    }
}
