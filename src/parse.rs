//! Parsing of incoming DT1/RQ1 messages into named parameter values.
//!
//! Structural problems (too short, wrong header) and checksum mismatches
//! are errors: nothing from such a message is applied. A parameter whose
//! bytes are present but do not decode is recorded in the report instead,
//! so one stale table entry does not throw away a whole dump.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::address::{linear_offset, resolve_tone, Address, SynthFamily, ToneLocation};
use crate::checksum::checksum;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::message::{Command, DeviceConfig, DATA_START, HEADER_LENGTH};
use crate::nibble::NIBBLE_COUNT;
use crate::parameter::{Parameter, Section, Width};
use crate::registry::table;
use crate::{split_messages, INITIATOR, TERMINATOR};

/// Shortest parameter message: header, address, one data byte, checksum
/// and terminator.
pub const MIN_MESSAGE_LENGTH: usize = 15;

/// Length of the name at the start of named blocks.
pub const NAME_LENGTH: usize = 12;

/// Label used when an area or name cannot be determined.
pub const UNKNOWN: &str = "Unknown";

/// Which parameters decoded and which did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodeReport {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl DecodeReport {
    /// Percentage of attempted parameters that decoded. 100 when nothing
    /// was attempted.
    pub fn success_rate(&self) -> f64 {
        let total = self.successes.len() + self.failures.len();
        if total == 0 {
            return 100.0;
        }
        self.successes.len() as f64 * 100.0 / total as f64
    }
}

/// Decoded raw values.
#[derive(Clone, Debug, PartialEq)]
pub enum Values {
    /// No table matched, or the message carries no parameter data.
    None,
    /// A single parameter write.
    Single { parameter: &'static Parameter, value: u32 },
    /// A block dump, by parameter name.
    Full(BTreeMap<&'static str, u32>),
}

/// Result of parsing one message.
#[derive(Clone, Debug)]
pub struct ParsedMessage {
    pub command: Command,
    /// Bytes 0 to 7 as hex.
    pub header: String,
    pub address: Address,
    pub family: Option<SynthFamily>,
    pub temporary_area: &'static str,
    pub tone: ToneLocation,
    pub section: Option<Section>,
    pub tone_name: Option<String>,
    pub values: Values,
    pub report: DecodeReport,
}

impl ParsedMessage {
    pub fn synth_tone(&self) -> String {
        self.tone.tone.to_string()
    }

    /// Raw value of a decoded parameter.
    pub fn value(&self, name: &str) -> Option<u32> {
        match &self.values {
            Values::Single { parameter, value } if parameter.name == name => Some(*value),
            Values::Full(values) => values.get(name).copied(),
            _ => None,
        }
    }

    /// Display value of a decoded parameter.
    pub fn display_value(&self, name: &str) -> Option<i32> {
        let parameter = self.section.and_then(|section| table(section).by_name(name))?;
        self.value(name).map(|raw| parameter.from_midi(raw))
    }

    /// Builds the debug/export object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("JD_XI_HEADER".to_string(), json!(self.header));
        object.insert("ADDRESS".to_string(), json!(self.address.to_hex()));
        object.insert("TEMPORARY_AREA".to_string(), json!(self.temporary_area));
        object.insert("SYNTH_TONE".to_string(), json!(self.synth_tone()));
        if let Some(name) = &self.tone_name {
            object.insert("TONE_NAME".to_string(), json!(name));
        }
        match &self.values {
            Values::None => {}
            Values::Single { parameter, value } => {
                object.insert("PARAM".to_string(), json!(parameter.name));
                object.insert("VALUE".to_string(), json!(value));
            }
            Values::Full(values) => {
                for (name, value) in values {
                    object.insert(name.to_string(), json!(value));
                }
            }
        }
        Value::Object(object)
    }
}

/// Parses messages for one device. Holds no state between calls.
pub struct SysExParser<'a> {
    device: DeviceConfig,
    diagnostics: Option<&'a dyn Diagnostics>,
}

impl Default for SysExParser<'_> {
    fn default() -> Self {
        SysExParser::new(DeviceConfig::JDXI)
    }
}

impl<'a> SysExParser<'a> {
    pub fn new(device: DeviceConfig) -> Self {
        SysExParser { device, diagnostics: None }
    }

    pub fn with_diagnostics(self, diagnostics: &'a dyn Diagnostics) -> Self {
        SysExParser { diagnostics: Some(diagnostics), ..self }
    }

    /// Parses one complete message.
    pub fn parse(&self, bytes: &[u8]) -> Result<ParsedMessage> {
        if bytes.len() < MIN_MESSAGE_LENGTH {
            return Err(Error::TooShort { length: bytes.len() });
        }
        let header = self.device.header();
        let end = bytes.len() - 1;
        if bytes[0] != INITIATOR || bytes[end] != TERMINATOR || bytes[1..header.len()] != header[1..] {
            return Err(Error::InvalidHeader);
        }
        if bytes[1..end].iter().any(|&b| b > 0x7F) {
            return Err(Error::InvalidHeader);
        }
        let command = Command::from_byte(bytes[HEADER_LENGTH - 1]).ok_or(Error::InvalidHeader)?;

        let address = Address::from_bytes(&bytes[HEADER_LENGTH..DATA_START])?;
        let found = bytes[end - 1];
        let expected = checksum(&bytes[HEADER_LENGTH..end - 1]);
        if found != expected {
            if let Some(diagnostics) = self.diagnostics {
                diagnostics.checksum_mismatch(&address, expected, found);
            }
            return Err(Error::ChecksumInvalid { address, expected, found });
        }

        let family = SynthFamily::from_area_bytes(address.msb(), address.umb());
        let tone = resolve_tone(family, address.lmb());
        if tone.lmb_offset != 0 {
            if let Some(diagnostics) = self.diagnostics {
                diagnostics.block_spill(address.lmb());
            }
        }
        let section = family.and_then(|family| Section::for_tone(family, tone.tone));
        let payload = &bytes[DATA_START..end - 1];

        let mut parsed = ParsedMessage {
            command,
            header: hex::encode_upper(&bytes[..HEADER_LENGTH]),
            address,
            family,
            temporary_area: family.map_or(UNKNOWN, |family| family.temporary_area()),
            tone,
            section,
            tone_name: None,
            values: Values::None,
            report: DecodeReport::default(),
        };

        if command == Command::DataSet1 {
            parsed.tone_name = extract_tone_name(section, &address, tone, payload);
            if let Some(section) = section {
                // Offset of the first payload byte from the block start.
                let start = ((tone.lmb_offset as u16) << 8) | address.lsb() as u16;
                if is_single_write(section, start, payload) {
                    self.decode_single(&mut parsed, section, start, payload);
                } else {
                    self.decode_block(&mut parsed, section, linear_offset(start), payload);
                }
            }
        }

        if let Some(diagnostics) = self.diagnostics {
            diagnostics.parsed(&parsed);
        }
        Ok(parsed)
    }

    /// Parses every message in a buffer that may hold several, such as
    /// the contents of a .syx file.
    pub fn parse_all(&self, bytes: &[u8]) -> Vec<Result<ParsedMessage>> {
        split_messages(bytes)
            .iter()
            .map(|message| self.parse(message))
            .collect()
    }

    fn decode_single(&self, parsed: &mut ParsedMessage, section: Section, offset: u16, payload: &[u8]) {
        let Some(parameter) = table(section).by_offset(offset) else {
            let label = format!("{}@{:04X}", section.name(), offset);
            self.fail(parsed, label, &Error::UnknownParameter(format!("offset {:04X}", offset)));
            return;
        };
        let decoded = parameter.decode_at(payload, 0).unwrap_or_else(|| Err(Error::TooShort {
            length: payload.len(),
        }));
        match decoded {
            Ok(value) => {
                parsed.report.successes.push(parameter.name.to_string());
                parsed.values = Values::Single { parameter, value };
            }
            Err(e) => self.fail(parsed, parameter.name.to_string(), &e),
        }
    }

    fn decode_block(&self, parsed: &mut ParsedMessage, section: Section, start: usize, payload: &[u8]) {
        let mut values = BTreeMap::new();
        for parameter in table(section).parameters() {
            let Some(index) = parameter.payload_index().checked_sub(start) else {
                continue;
            };
            match parameter.decode_at(payload, index) {
                None => {}
                Some(Ok(value)) => {
                    parsed.report.successes.push(parameter.name.to_string());
                    values.insert(parameter.name, value);
                }
                Some(Err(e)) => self.fail(parsed, parameter.name.to_string(), &e),
            }
        }
        parsed.values = Values::Full(values);
    }

    fn fail(&self, parsed: &mut ParsedMessage, name: String, error: &Error) {
        if let Some(diagnostics) = self.diagnostics {
            diagnostics.decode_failed(&name, error);
        }
        parsed.report.failures.push(name);
    }
}

/// Parses one message with the JD-Xi device settings.
pub fn parse(bytes: &[u8]) -> Result<ParsedMessage> {
    SysExParser::default().parse(bytes)
}

/// A payload is one parameter write if it is a single byte, or exactly the
/// nibbles of the wide parameter at `offset`. Anything else is a dump.
fn is_single_write(section: Section, offset: u16, payload: &[u8]) -> bool {
    match payload.len() {
        1 => true,
        NIBBLE_COUNT => table(section)
            .by_offset(offset)
            .is_some_and(|parameter| parameter.width == Width::Nibbles),
        _ => false,
    }
}

fn extract_tone_name(
    section: Option<Section>,
    address: &Address,
    tone: ToneLocation,
    payload: &[u8],
) -> Option<String> {
    let named = section.map_or(true, |section| section.has_name());
    if !named || address.lsb() != 0 || tone.lmb_offset != 0 || payload.len() < NAME_LENGTH {
        return None;
    }
    let name: String = payload[..NAME_LENGTH].iter().map(|&b| b as char).collect();
    let name = name.trim_end_matches(['\0', '\r', ' ']);
    Some(if name.is_empty() { UNKNOWN.to_string() } else { name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{SynthTone, DRUM_PAD_COUNT};
    use crate::compose::SysExComposer;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::registry::{lookup_by_name, resolve_name};

    const CEREMONY: &str = "F0 41 10 00 00 00 0E 12 18 00 00 00 43 45 52 45 4D 4F 4E 59 20 20 20 20 20 20 20 20 78 01 0D 0B 00 00 00 01 01 01 01 00 00 00 00 00 00 00 00 00 71 F7";

    fn from_hex(text: &str) -> Vec<u8> {
        hex::decode(text.replace(' ', "")).unwrap()
    }

    #[test]
    fn program_common_dump() {
        let bytes = from_hex(CEREMONY);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.address.to_hex(), "18000000");
        assert_eq!(parsed.header, "F041100000000E12");
        assert_eq!(parsed.temporary_area, "TEMPORARY_PROGRAM");
        assert_eq!(parsed.synth_tone(), "COMMON");
        assert_eq!(parsed.section, Some(Section::ProgramCommon));
        assert_eq!(parsed.tone_name.as_deref(), Some("CEREMONY"));
        assert!(parsed.report.failures.is_empty());
        assert_eq!(parsed.report.success_rate(), 100.0);
        assert_eq!(parsed.value("PROGRAM_LEVEL"), Some(120));
        assert_eq!(parsed.value("PROGRAM_TEMPO"), Some(7600));
        assert_eq!(parsed.value("VOCAL_EFFECT"), Some(0));
        assert_eq!(parsed.report.successes.len(), table(Section::ProgramCommon).len());
    }

    #[test]
    fn program_common_json() {
        let parsed = parse(&from_hex(CEREMONY)).unwrap();
        let exported = parsed.to_json();
        assert_eq!(exported["JD_XI_HEADER"], "F041100000000E12");
        assert_eq!(exported["ADDRESS"], "18000000");
        assert_eq!(exported["TEMPORARY_AREA"], "TEMPORARY_PROGRAM");
        assert_eq!(exported["SYNTH_TONE"], "COMMON");
        assert_eq!(exported["TONE_NAME"], "CEREMONY");
        assert_eq!(exported["PROGRAM_TEMPO"], 7600);
    }

    #[test]
    fn corrupted_checksum() {
        let mut bytes = from_hex(CEREMONY);
        let index = bytes.len() - 2;
        bytes[index] = 0x70;
        let recording = RecordingDiagnostics::new();
        match SysExParser::default().with_diagnostics(&recording).parse(&bytes) {
            Err(Error::ChecksumInvalid { address, expected, found }) => {
                assert_eq!(address.to_hex(), "18000000");
                assert_eq!(expected, 0x71);
                assert_eq!(found, 0x70);
            }
            other => panic!("expected checksum error, got {:?}", other),
        }
        assert_eq!(recording.take(), vec!["checksum 18 00 00 00 71 70".to_string()]);
    }

    #[test]
    fn corrupted_data_byte() {
        let mut bytes = from_hex(CEREMONY);
        bytes[28] = 0x77;
        assert!(matches!(parse(&bytes), Err(Error::ChecksumInvalid { .. })));
    }

    #[test]
    fn too_short() {
        assert!(matches!(parse(&[0xF0, 0x41, 0xF7]), Err(Error::TooShort { length: 3 })));
    }

    #[test]
    fn wrong_header() {
        let mut bytes = from_hex(CEREMONY);
        bytes[6] = 0x0F;
        assert!(matches!(parse(&bytes), Err(Error::InvalidHeader)));

        let mut bytes = from_hex(CEREMONY);
        let end = bytes.len() - 1;
        bytes[end] = 0x00;
        assert!(matches!(parse(&bytes), Err(Error::InvalidHeader)));

        let mut bytes = from_hex(CEREMONY);
        bytes[7] = 0x13;
        assert!(matches!(parse(&bytes), Err(Error::InvalidHeader)));
    }

    #[test]
    fn single_parameter_write() {
        let family = SynthFamily::DigitalSynth1;
        let cutoff = lookup_by_name(Section::DigitalPartial, "FILTER_CUTOFF").unwrap();
        let message = SysExComposer::default()
            .compose(family.base_address(), family, cutoff, 100, Some(2))
            .unwrap();
        let parsed = parse(&message.to_bytes()).unwrap();
        assert_eq!(parsed.temporary_area, "TEMPORARY_DIGITAL_SYNTH_1");
        assert_eq!(parsed.synth_tone(), "PARTIAL_2");
        assert_eq!(parsed.tone_name, None);
        assert_eq!(parsed.values, Values::Single { parameter: cutoff, value: 100 });
        let exported = parsed.to_json();
        assert_eq!(exported["PARAM"], "FILTER_CUTOFF");
        assert_eq!(exported["VALUE"], 100);
    }

    #[test]
    fn bipolar_center_decodes_to_zero() {
        let family = SynthFamily::AnalogSynth;
        let fine = lookup_by_name(Section::AnalogTone, "OSC_PITCH_FINE").unwrap();
        let message = SysExComposer::default()
            .compose(family.base_address(), family, fine, 0, None)
            .unwrap();
        assert_eq!(message.data, vec![64]);
        let parsed = parse(&message.to_bytes()).unwrap();
        assert_eq!(parsed.value("OSC_PITCH_FINE"), Some(64));
        assert_eq!(parsed.display_value("OSC_PITCH_FINE"), Some(0));
    }

    #[test]
    fn drum_pad_second_half_write() {
        let family = SynthFamily::DrumKit;
        let one_shot = lookup_by_name(Section::DrumPartial, "ONE_SHOT_MODE").unwrap();
        let message = SysExComposer::default()
            .compose(family.base_address(), family, one_shot, 1, Some(2))
            .unwrap();
        let recording = RecordingDiagnostics::new();
        let parsed = SysExParser::default()
            .with_diagnostics(&recording)
            .parse(&message.to_bytes())
            .unwrap();
        assert_eq!(parsed.tone, ToneLocation { tone: SynthTone::DrumPad(2), lmb_offset: 1 });
        assert_eq!(parsed.synth_tone(), "DRUM_KIT_PART_2");
        assert_eq!(parsed.value("ONE_SHOT_MODE"), Some(1));
        assert!(recording.take().contains(&"block spill 31".to_string()));
    }

    #[test]
    fn program_effect_second_half_write() {
        let family = SynthFamily::Program;
        let parameter = resolve_name(family, "PROGRAM_EFFECT_1.PARAMETER_29").unwrap();
        let message = SysExComposer::default()
            .compose(family.base_address(), family, parameter, 0, None)
            .unwrap();
        assert_eq!(message.address.to_hex(), "18000301");

        let recording = RecordingDiagnostics::new();
        let parsed = SysExParser::default()
            .with_diagnostics(&recording)
            .parse(&message.to_bytes())
            .unwrap();
        assert_eq!(parsed.tone, ToneLocation { tone: SynthTone::Effect1, lmb_offset: 1 });
        assert_eq!(parsed.synth_tone(), "EFFECT_1");
        assert_eq!(parsed.section, Some(Section::ProgramEffect1));
        assert_eq!(parsed.value("PARAMETER_29"), Some(32768));
        assert_eq!(parsed.display_value("PARAMETER_29"), Some(0));
        assert!(parsed.report.failures.is_empty());
        assert!(recording.take().contains(&"block spill 03".to_string()));
    }

    #[test]
    fn every_parameter_parses_back() {
        let composer = SysExComposer::default();
        let mut checked = 0;
        for family in SynthFamily::ALL {
            let partials: Vec<Option<u8>> = (1..=DRUM_PAD_COUNT)
                .filter(|&number| family.group_map().contains(number))
                .map(Some)
                .collect();
            for section in Section::ALL.iter().copied().filter(|s| s.belongs_to(family)) {
                let numbers = if section.is_per_partial() { partials.clone() } else { vec![None] };
                assert!(!numbers.is_empty(), "{} {}", family, section);
                for partial in numbers {
                    for parameter in table(section).parameters() {
                        for raw in [parameter.min, parameter.max] {
                            let message = composer
                                .compose(family.base_address(), family, parameter, parameter.from_midi(raw), partial)
                                .unwrap();
                            let parsed = parse(&message.to_bytes()).unwrap();
                            let context = format!("{} {} {:?}", family, parameter, partial);

                            assert_eq!(parsed.family, Some(family), "{}", context);
                            assert_eq!(parsed.section, Some(section), "{}", context);
                            assert_eq!(parsed.values, Values::Single { parameter, value: raw }, "{}", context);
                            assert!(parsed.report.failures.is_empty(), "{}", context);
                            if let Some(number) = partial {
                                let resolved = match parsed.tone.tone {
                                    SynthTone::Partial(n) | SynthTone::ProgramPart(n) | SynthTone::DrumPad(n) => n,
                                    other => panic!("{}: resolved to {}", context, other),
                                };
                                assert_eq!(resolved, number, "{}", context);
                            }
                            checked += 1;
                        }
                    }
                }
            }
        }
        assert!(checked > 10_000);
    }

    #[test]
    fn four_byte_payload_of_narrow_parameters_is_a_dump() {
        // FILTER_CUTOFF, FILTER_CUTOFF_KEYFOLLOW, FILTER_ENV_VELOCITY_SENS, FILTER_RESONANCE
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x01, 0x20, 0x0C];
        bytes.extend([100, 64, 70, 90]);
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);
        assert_eq!(bytes.len(), 18);

        let parsed = parse(&bytes).unwrap();
        assert!(matches!(parsed.values, Values::Full(_)));
        assert_eq!(parsed.value("FILTER_CUTOFF"), Some(100));
        assert_eq!(parsed.value("FILTER_CUTOFF_KEYFOLLOW"), Some(64));
        assert_eq!(parsed.value("FILTER_ENV_VELOCITY_SENS"), Some(70));
        assert_eq!(parsed.value("FILTER_RESONANCE"), Some(90));
        assert_eq!(parsed.report.successes.len(), 4);
    }

    #[test]
    fn unknown_offset_is_a_failure_not_an_error() {
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x01, 0x20, 0x02, 0x05];
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.values, Values::None);
        assert_eq!(parsed.report.failures, vec!["DIGITAL_PARTIAL@0002".to_string()]);
        assert_eq!(parsed.report.success_rate(), 0.0);
    }

    #[test]
    fn out_of_range_value_is_recorded() {
        // Octave shift only accepts 61..=67.
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x01, 0x00, 0x15, 0x10];
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.values, Values::None);
        assert_eq!(parsed.report.failures, vec!["OCTAVE_SHIFT".to_string()]);
    }

    #[test]
    fn unknown_area() {
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x01, 0x00, 0x00, 0x00, 0x05];
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.temporary_area, "Unknown");
        assert_eq!(parsed.synth_tone(), "COMMON");
        assert_eq!(parsed.section, None);
        assert_eq!(parsed.values, Values::None);
        let exported = parsed.to_json();
        assert_eq!(exported["TEMPORARY_AREA"], "Unknown");
        assert!(exported.get("PARAM").is_none());
    }

    #[test]
    fn digital_partial_dump() {
        let mut block = vec![0u8; linear_offset(Section::DigitalPartial.block_size())];
        for parameter in table(Section::DigitalPartial).parameters() {
            let raw = parameter.to_midi(0).unwrap_or(parameter.min);
            let data = parameter.encode(raw).unwrap();
            let index = parameter.payload_index();
            block[index..index + data.len()].copy_from_slice(&data);
        }
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x21, 0x22, 0x00];
        bytes.extend(&block);
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.temporary_area, "TEMPORARY_DIGITAL_SYNTH_2");
        assert_eq!(parsed.synth_tone(), "PARTIAL_3");
        assert_eq!(parsed.tone_name, None);
        assert!(parsed.report.failures.is_empty());
        assert_eq!(parsed.report.successes.len(), table(Section::DigitalPartial).len());
        assert_eq!(parsed.display_value("AMP_PAN"), Some(0));
        assert_eq!(parsed.display_value("OSC_DETUNE"), Some(0));
    }

    #[test]
    fn truncated_dump_decodes_what_is_present() {
        let mut bytes = vec![0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x42, 0x00, 0x00];
        bytes.extend(b"SOFT BASS   ");
        bytes.extend([0x00, 0x02, 0x40, 0x00]);
        bytes.push(checksum(&bytes[8..]));
        bytes.push(0xF7);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.temporary_area, "TEMPORARY_ANALOG_SYNTH");
        assert_eq!(parsed.tone_name.as_deref(), Some("SOFT BASS"));
        assert_eq!(parsed.value("LFO_SHAPE"), Some(2));
        assert_eq!(parsed.value("LFO_RATE"), Some(64));
        assert_eq!(parsed.value("LFO_FADE_TIME"), Some(0));
        assert_eq!(parsed.value("LFO_TEMPO_SYNC_SWITCH"), None);
        assert!(parsed.report.failures.is_empty());
    }

    #[test]
    fn request_has_no_values() {
        let family = SynthFamily::DrumKit;
        let request = SysExComposer::default()
            .request_section(family.base_address(), family, Section::DrumCommon, None)
            .unwrap();
        let parsed = parse(&request.to_bytes()).unwrap();
        assert_eq!(parsed.command, Command::DataRequest1);
        assert_eq!(parsed.temporary_area, "TEMPORARY_DRUM_KIT");
        assert_eq!(parsed.values, Values::None);
        assert!(parsed.report.successes.is_empty());
    }

    #[test]
    fn parse_all_messages() {
        let mut buffer = from_hex(CEREMONY);
        let family = SynthFamily::DigitalSynth1;
        let cutoff = lookup_by_name(Section::DigitalPartial, "FILTER_CUTOFF").unwrap();
        buffer.extend(
            SysExComposer::default()
                .compose(family.base_address(), family, cutoff, 5, Some(1))
                .unwrap()
                .to_bytes(),
        );
        let results = SysExParser::default().parse_all(&buffer);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
