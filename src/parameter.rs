//! Parameter descriptions: where a parameter lives, which raw values it
//! accepts, how it is shown to the user and how it is put on the wire.

use std::fmt;

use crate::address::{linear_offset, SynthFamily, SynthTone, DIGITAL_MODIFY};
use crate::error::{Error, Result};
use crate::nibble::{pack_to_nibbles, unpack_slice, NIBBLE_COUNT};

/// How many data bytes a parameter occupies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Width {
    /// One data byte, 0..=127.
    Byte,
    /// Four nibbles, 0..=65535.
    Nibbles,
}

impl Width {
    pub fn size(&self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Nibbles => NIBBLE_COUNT,
        }
    }
}

/// Conversion between the raw MIDI value and the value shown to the user.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Transform {
    /// Display value equals raw value.
    Identity,
    /// Display value is raw value minus `offset`, e.g. pan 0..127 shown
    /// as -64..+63 with offset 64.
    Linear { offset: i32 },
    /// Display value equals raw value; each raw value from the minimum up
    /// has a label.
    EnumLabels(&'static [&'static str]),
}

/// The block of the address map a parameter belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Section {
    ProgramCommon,
    ProgramVocalEffect,
    ProgramEffect1,
    ProgramEffect2,
    ProgramDelay,
    ProgramReverb,
    ProgramPart,
    DigitalCommon,
    DigitalPartial,
    DigitalModify,
    AnalogTone,
    DrumCommon,
    DrumPartial,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::ProgramCommon,
        Section::ProgramVocalEffect,
        Section::ProgramEffect1,
        Section::ProgramEffect2,
        Section::ProgramDelay,
        Section::ProgramReverb,
        Section::ProgramPart,
        Section::DigitalCommon,
        Section::DigitalPartial,
        Section::DigitalModify,
        Section::AnalogTone,
        Section::DrumCommon,
        Section::DrumPartial,
    ];

    /// Table name, as used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Section::ProgramCommon => "PROGRAM_COMMON",
            Section::ProgramVocalEffect => "PROGRAM_VOCAL_EFFECT",
            Section::ProgramEffect1 => "PROGRAM_EFFECT_1",
            Section::ProgramEffect2 => "PROGRAM_EFFECT_2",
            Section::ProgramDelay => "PROGRAM_DELAY",
            Section::ProgramReverb => "PROGRAM_REVERB",
            Section::ProgramPart => "PROGRAM_PART",
            Section::DigitalCommon => "DIGITAL_COMMON",
            Section::DigitalPartial => "DIGITAL_PARTIAL",
            Section::DigitalModify => "DIGITAL_MODIFY",
            Section::AnalogTone => "ANALOG",
            Section::DrumCommon => "DRUM_COMMON",
            Section::DrumPartial => "DRUM_PARTIAL",
        }
    }

    /// Size of the whole block, written as a `0xHHLL` offset. Used for
    /// dump requests.
    pub fn block_size(&self) -> u16 {
        match self {
            Section::ProgramCommon => 0x001F,
            Section::ProgramVocalEffect => 0x0018,
            Section::ProgramEffect1 | Section::ProgramEffect2 => 0x0111,
            Section::ProgramDelay => 0x0064,
            Section::ProgramReverb => 0x0063,
            Section::ProgramPart => 0x004C,
            Section::DigitalCommon => 0x0040,
            Section::DigitalPartial => 0x003D,
            Section::DigitalModify => 0x0025,
            Section::AnalogTone => 0x0040,
            Section::DrumCommon => 0x0012,
            Section::DrumPartial => 0x0143,
        }
    }

    /// True if this section exists in the temporary area of `family`.
    pub fn belongs_to(&self, family: SynthFamily) -> bool {
        match self {
            Section::ProgramCommon
            | Section::ProgramVocalEffect
            | Section::ProgramEffect1
            | Section::ProgramEffect2
            | Section::ProgramDelay
            | Section::ProgramReverb
            | Section::ProgramPart => family == SynthFamily::Program,
            Section::DigitalCommon | Section::DigitalPartial | Section::DigitalModify => {
                family.is_digital()
            }
            Section::AnalogTone => family == SynthFamily::AnalogSynth,
            Section::DrumCommon | Section::DrumPartial => family == SynthFamily::DrumKit,
        }
    }

    /// True if the section is repeated per partial, part or pad and so
    /// needs a number to be addressed.
    pub fn is_per_partial(&self) -> bool {
        matches!(self, Section::ProgramPart | Section::DigitalPartial | Section::DrumPartial)
    }

    /// Resolves the LMB of this section's block in `family`.
    ///
    /// Shared blocks ignore `partial`. Per-partial blocks need a partial
    /// number the family knows; anything else returns `None`. This differs
    /// from [GroupMap::resolve](crate::address::GroupMap::resolve), which
    /// maps unknown numbers to the common block: a write meant for a
    /// partial must not land on the common block's parameters.
    pub fn resolve_lmb(&self, family: SynthFamily, partial: Option<u8>) -> Option<u8> {
        if !self.belongs_to(family) {
            return None;
        }
        let groups = family.group_map();
        match self {
            Section::ProgramVocalEffect => Some(0x01),
            Section::ProgramEffect1 => Some(0x02),
            Section::ProgramEffect2 => Some(0x04),
            Section::ProgramDelay => Some(0x06),
            Section::ProgramReverb => Some(0x08),
            Section::DigitalModify => Some(DIGITAL_MODIFY),
            Section::ProgramPart | Section::DigitalPartial | Section::DrumPartial => match partial {
                Some(number) if number != 0 && groups.contains(number) => Some(groups.resolve(number)),
                _ => None,
            },
            Section::ProgramCommon
            | Section::DigitalCommon
            | Section::AnalogTone
            | Section::DrumCommon => Some(groups.resolve(0)),
        }
    }

    /// Finds the section a parsed (area, tone) pair addresses.
    pub fn for_tone(family: SynthFamily, tone: SynthTone) -> Option<Section> {
        match (family, tone) {
            (SynthFamily::Program, SynthTone::Common) => Some(Section::ProgramCommon),
            (SynthFamily::Program, SynthTone::VocalEffect) => Some(Section::ProgramVocalEffect),
            (SynthFamily::Program, SynthTone::Effect1) => Some(Section::ProgramEffect1),
            (SynthFamily::Program, SynthTone::Effect2) => Some(Section::ProgramEffect2),
            (SynthFamily::Program, SynthTone::Delay) => Some(Section::ProgramDelay),
            (SynthFamily::Program, SynthTone::Reverb) => Some(Section::ProgramReverb),
            (SynthFamily::Program, SynthTone::ProgramPart(_)) => Some(Section::ProgramPart),
            (SynthFamily::DigitalSynth1 | SynthFamily::DigitalSynth2, SynthTone::Common) => {
                Some(Section::DigitalCommon)
            }
            (SynthFamily::DigitalSynth1 | SynthFamily::DigitalSynth2, SynthTone::Partial(_)) => {
                Some(Section::DigitalPartial)
            }
            (SynthFamily::DigitalSynth1 | SynthFamily::DigitalSynth2, SynthTone::Modify) => {
                Some(Section::DigitalModify)
            }
            (SynthFamily::AnalogSynth, SynthTone::Common) => Some(Section::AnalogTone),
            (SynthFamily::DrumKit, SynthTone::Common) => Some(Section::DrumCommon),
            (SynthFamily::DrumKit, SynthTone::DrumPad(_)) => Some(Section::DrumPartial),
            _ => None,
        }
    }

    /// True if the block starts with a 12 character name.
    pub fn has_name(&self) -> bool {
        matches!(
            self,
            Section::ProgramCommon
                | Section::DigitalCommon
                | Section::AnalogTone
                | Section::DrumCommon
                | Section::DrumPartial
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named parameter of one section.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Parameter {
    pub name: &'static str,
    pub section: Section,
    /// Offset from the start of the block, as `0xHHLL` with two 7-bit bytes.
    pub offset: u16,
    /// Smallest raw MIDI value.
    pub min: u32,
    /// Largest raw MIDI value.
    pub max: u32,
    pub width: Width,
    pub transform: Transform,
}

impl Parameter {
    /// A one byte parameter shown as its raw value.
    pub const fn new(section: Section, name: &'static str, offset: u16, min: u32, max: u32) -> Self {
        Parameter {
            name,
            section,
            offset,
            min,
            max,
            width: Width::Byte,
            transform: Transform::Identity,
        }
    }

    /// Shown as raw value minus `offset`.
    pub const fn bipolar(self, offset: i32) -> Self {
        Parameter { transform: Transform::Linear { offset }, ..self }
    }

    /// Shown with a label per raw value.
    pub const fn labels(self, labels: &'static [&'static str]) -> Self {
        Parameter { transform: Transform::EnumLabels(labels), ..self }
    }

    /// Sent as four nibbles.
    pub const fn wide(self) -> Self {
        Parameter { width: Width::Nibbles, ..self }
    }

    pub fn is_bipolar(&self) -> bool {
        matches!(self.transform, Transform::Linear { .. })
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.transform, Transform::EnumLabels(_))
    }

    /// Number of data bytes on the wire.
    pub fn size(&self) -> usize {
        self.width.size()
    }

    /// Index of the first data byte inside a block dump.
    pub fn payload_index(&self) -> usize {
        linear_offset(self.offset)
    }

    /// Range of values shown to the user.
    pub fn display_range(&self) -> (i32, i32) {
        let (min, max) = (self.min as i32, self.max as i32);
        match self.transform {
            Transform::Linear { offset } => (min - offset, max - offset),
            _ => (min, max),
        }
    }

    /// Checks a raw MIDI value against the raw range.
    pub fn validate(&self, raw: u32) -> Result<()> {
        if raw < self.min || raw > self.max {
            return Err(Error::ValueOutOfRange {
                name: self.name.to_string(),
                value: raw.min(i32::MAX as u32) as i32,
                min: self.min as i32,
                max: self.max as i32,
            });
        }
        Ok(())
    }

    /// Converts a display value to the raw MIDI value.
    pub fn to_midi(&self, display: i32) -> Result<u32> {
        let raw = match self.transform {
            Transform::Linear { offset } => display.checked_add(offset),
            Transform::Identity | Transform::EnumLabels(_) => Some(display),
        };
        match raw.and_then(|raw| u32::try_from(raw).ok()) {
            Some(raw) if self.validate(raw).is_ok() => Ok(raw),
            _ => {
                let (min, max) = self.display_range();
                Err(Error::ValueOutOfRange {
                    name: self.name.to_string(),
                    value: display,
                    min,
                    max,
                })
            }
        }
    }

    /// Converts a raw MIDI value to the display value.
    pub fn from_midi(&self, raw: u32) -> i32 {
        match self.transform {
            Transform::Linear { offset } => raw as i32 - offset,
            Transform::Identity | Transform::EnumLabels(_) => raw as i32,
        }
    }

    /// Label of a raw value of a switch parameter.
    pub fn label(&self, raw: u32) -> Option<&'static str> {
        match self.transform {
            Transform::EnumLabels(labels) => raw
                .checked_sub(self.min)
                .and_then(|index| labels.get(index as usize))
                .copied(),
            _ => None,
        }
    }

    /// Raw value of a switch parameter's label, ignoring case.
    pub fn raw_for_label(&self, label: &str) -> Option<u32> {
        match self.transform {
            Transform::EnumLabels(labels) => labels
                .iter()
                .position(|l| l.eq_ignore_ascii_case(label))
                .map(|index| self.min + index as u32),
            _ => None,
        }
    }

    /// Encodes a raw value into its data bytes.
    pub fn encode(&self, raw: u32) -> Result<Vec<u8>> {
        self.validate(raw)?;
        match self.width {
            Width::Byte => Ok(vec![raw as u8]),
            Width::Nibbles => Ok(pack_to_nibbles(raw)?.to_vec()),
        }
    }

    /// Decodes the value starting at `index` in `data`. Returns `None` if
    /// `data` ends before the parameter does.
    pub fn decode_at(&self, data: &[u8], index: usize) -> Option<Result<u32>> {
        let raw = match self.width {
            Width::Byte => Ok(*data.get(index)? as u32),
            Width::Nibbles => unpack_slice(data, index)?,
        };
        Some(raw.and_then(|raw| self.validate(raw).map(|_| raw)))
    }

    /// Formats a raw value for people: the label for switches, a signed
    /// number for bipolar values.
    pub fn describe(&self, raw: u32) -> String {
        if let Some(label) = self.label(raw) {
            return label.to_string();
        }
        match self.transform {
            Transform::Linear { .. } => format!("{:+}", self.from_midi(raw)),
            _ => format!("{}", self.from_midi(raw)),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.section.name(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAN: Parameter = Parameter::new(Section::DigitalPartial, "AMP_PAN", 0x1B, 0, 127).bipolar(64);
    const OCTAVE: Parameter = Parameter::new(Section::DigitalCommon, "OCTAVE_SHIFT", 0x15, 61, 67).bipolar(64);
    const FINE: Parameter = Parameter::new(Section::AnalogTone, "OSC_PITCH_FINE", 0x18, 14, 114).bipolar(64);
    const WAVE: Parameter = Parameter::new(Section::AnalogTone, "OSC_WAVEFORM", 0x16, 0, 2)
        .labels(&["SAW", "TRI", "PW-SQR"]);
    const WAVE_NUMBER: Parameter = Parameter::new(Section::DigitalPartial, "WAVE_NUMBER", 0x35, 0, 16384).wide();

    #[test]
    fn display_ranges() {
        assert_eq!(PAN.display_range(), (-64, 63));
        assert_eq!(OCTAVE.display_range(), (-3, 3));
        assert_eq!(FINE.display_range(), (-50, 50));
        assert_eq!(WAVE.display_range(), (0, 2));
    }

    #[test]
    fn center_is_zero() {
        assert_eq!(PAN.from_midi(64), 0);
        assert_eq!(OCTAVE.from_midi(64), 0);
        assert_eq!(FINE.from_midi(64), 0);
    }

    #[test]
    fn to_midi_limits() {
        assert_eq!(OCTAVE.to_midi(-3).unwrap(), 61);
        assert_eq!(OCTAVE.to_midi(3).unwrap(), 67);
        assert!(matches!(OCTAVE.to_midi(4), Err(Error::ValueOutOfRange { .. })));
        assert!(matches!(PAN.to_midi(-65), Err(Error::ValueOutOfRange { .. })));
    }

    #[test]
    fn to_midi_extremes() {
        for parameter in [PAN, OCTAVE, FINE, WAVE, WAVE_NUMBER] {
            for display in [i32::MAX, i32::MIN, i32::MAX - 63, i32::MIN + 64] {
                match parameter.to_midi(display) {
                    Err(Error::ValueOutOfRange { value, .. }) => assert_eq!(value, display),
                    other => panic!("{} accepted {}: {:?}", parameter, display, other),
                }
            }
        }
    }

    #[test]
    fn validate_uses_raw_range() {
        assert!(OCTAVE.validate(61).is_ok());
        assert!(OCTAVE.validate(0).is_err());
        assert!(FINE.validate(114).is_ok());
        assert!(FINE.validate(115).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(WAVE.label(1), Some("TRI"));
        assert_eq!(WAVE.label(3), None);
        assert_eq!(WAVE.raw_for_label("pw-sqr"), Some(2));
        assert_eq!(WAVE.describe(0), "SAW");
        assert_eq!(PAN.describe(70), "+6");
        assert_eq!(PAN.label(70), None);
    }

    #[test]
    fn encode_widths() {
        assert_eq!(PAN.encode(64).unwrap(), vec![0x40]);
        assert_eq!(WAVE_NUMBER.encode(300).unwrap(), vec![0x00, 0x01, 0x02, 0x0C]);
        assert!(WAVE_NUMBER.encode(16385).is_err());
    }

    #[test]
    fn decode_widths() {
        let data = [0x40, 0x00, 0x01, 0x02, 0x0C];
        assert_eq!(PAN.decode_at(&data, 0).unwrap().unwrap(), 64);
        assert_eq!(WAVE_NUMBER.decode_at(&data, 1).unwrap().unwrap(), 300);
        assert!(WAVE_NUMBER.decode_at(&data, 2).is_none());
        assert!(OCTAVE.decode_at(&data, 1).unwrap().is_err());
    }

    #[test]
    fn section_lmb() {
        assert_eq!(Section::DigitalPartial.resolve_lmb(SynthFamily::DigitalSynth1, Some(1)), Some(0x20));
        assert_eq!(Section::DigitalPartial.resolve_lmb(SynthFamily::DigitalSynth2, Some(3)), Some(0x22));
        assert_eq!(Section::DigitalPartial.resolve_lmb(SynthFamily::DigitalSynth1, None), None);
        assert_eq!(Section::DigitalPartial.resolve_lmb(SynthFamily::DigitalSynth1, Some(4)), None);
        assert_eq!(Section::DigitalModify.resolve_lmb(SynthFamily::DigitalSynth1, None), Some(0x50));
        assert_eq!(Section::DigitalCommon.resolve_lmb(SynthFamily::AnalogSynth, None), None);
        assert_eq!(Section::DrumPartial.resolve_lmb(SynthFamily::DrumKit, Some(37)), Some(0x76));
        assert_eq!(Section::ProgramEffect2.resolve_lmb(SynthFamily::Program, None), Some(0x04));
    }
}
