//! The JD-Xi 4-byte address space.
//!
//! Every byte of an address is a 7-bit MIDI data byte. The first two bytes
//! (MSB, UMB) select a temporary area, the third (LMB) a section inside it
//! such as a partial or a drum pad, and the last (LSB) a parameter.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::parameter::Section;

/// Highest value of a MIDI data byte.
pub const DATA_BYTE_MAX: u8 = 0x7F;

/// A four byte JD-Xi address.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Address {
    msb: u8,
    umb: u8,
    lmb: u8,
    lsb: u8,
}

impl Address {
    /// Creates an address, checking that every field is a data byte.
    pub fn new(msb: u8, umb: u8, lmb: u8, lsb: u8) -> Result<Self> {
        for (field, value) in [("MSB", msb), ("UMB", umb), ("LMB", lmb), ("LSB", lsb)] {
            if value > DATA_BYTE_MAX {
                return Err(Error::AddressFieldOutOfRange { field, value: value as u32 });
            }
        }
        Ok(Address { msb, umb, lmb, lsb })
    }

    /// Creates an address from the first four bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        match data {
            &[msb, umb, lmb, lsb, ..] => Address::new(msb, umb, lmb, lsb),
            _ => Err(Error::TooShort { length: data.len() }),
        }
    }

    pub fn msb(&self) -> u8 {
        self.msb
    }

    pub fn umb(&self) -> u8 {
        self.umb
    }

    pub fn lmb(&self) -> u8 {
        self.lmb
    }

    pub fn lsb(&self) -> u8 {
        self.lsb
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.msb, self.umb, self.lmb, self.lsb]
    }

    /// Gets the address as an upper case hex string, like "19012000".
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    /// Returns a copy with the LMB replaced.
    pub fn with_lmb(&self, lmb: u8) -> Result<Self> {
        Address::new(self.msb, self.umb, lmb, self.lsb)
    }

    /// Adds a parameter offset written as `0xHHLL` (two 7-bit bytes),
    /// carrying in 7-bit arithmetic.
    pub fn offset_by(&self, offset: u16) -> Result<Self> {
        let base = self.to_linear();
        let total = base + linear_offset(offset) as u32;
        Address::from_linear(total)
    }

    fn to_linear(&self) -> u32 {
        self.to_bytes()
            .iter()
            .fold(0u32, |acc, &b| (acc << 7) | b as u32)
    }

    fn from_linear(value: u32) -> Result<Self> {
        if value >= 1 << 28 {
            return Err(Error::AddressFieldOutOfRange { field: "MSB", value: value >> 21 });
        }
        Address::new(
            ((value >> 21) & 0x7F) as u8,
            ((value >> 14) & 0x7F) as u8,
            ((value >> 7) & 0x7F) as u8,
            (value & 0x7F) as u8,
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02X} {:02X} {:02X} {:02X}", self.msb, self.umb, self.lmb, self.lsb)
    }
}

/// Converts a `0xHHLL` parameter offset into a payload byte index.
pub fn linear_offset(offset: u16) -> usize {
    ((offset >> 8) as usize) * 128 + (offset & 0x7F) as usize
}

/// Converts a payload byte index back into a `0xHHLL` parameter offset.
pub fn offset_from_linear(index: usize) -> u16 {
    (((index / 128) as u16) << 8) | (index % 128) as u16
}

/// LMB of a section's common block, shared by every family.
pub const COMMON: u8 = 0x00;

/// LMB of the digital synth modify block.
pub const DIGITAL_MODIFY: u8 = 0x50;

/// LMB of the first drum pad (key 36); each pad takes two LMB values.
pub const DRUM_FIRST_PAD: u8 = 0x2E;

/// Number of drum pads, keys 36 to 72.
pub const DRUM_PAD_COUNT: u8 = 37;

/// Maps a partial (or part, or pad) number to the LMB of its block.
/// Number 0 is always the common block.
#[derive(Debug)]
pub struct GroupMap {
    entries: HashMap<u8, u8>,
}

impl GroupMap {
    fn new(entries: &[(u8, u8)]) -> Self {
        let mut map: HashMap<u8, u8> = entries.iter().copied().collect();
        map.insert(0, COMMON);
        GroupMap { entries: map }
    }

    /// Resolves a partial number to its LMB. Unknown numbers resolve to
    /// the common block.
    pub fn resolve(&self, partial: u8) -> u8 {
        self.entries.get(&partial).copied().unwrap_or(COMMON)
    }

    pub fn contains(&self, partial: u8) -> bool {
        self.entries.contains_key(&partial)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    static ref PROGRAM_GROUPS: GroupMap = GroupMap::new(&[
        (1, 0x20),
        (2, 0x21),
        (3, 0x22),
        (4, 0x23),
    ]);

    static ref DIGITAL_GROUPS: GroupMap = GroupMap::new(&[
        (1, 0x20),
        (2, 0x21),
        (3, 0x22),
    ]);

    static ref ANALOG_GROUPS: GroupMap = GroupMap::new(&[]);

    static ref DRUM_GROUPS: GroupMap = {
        let pads: Vec<(u8, u8)> = (1..=DRUM_PAD_COUNT)
            .map(|pad| (pad, DRUM_FIRST_PAD + (pad - 1) * 2))
            .collect();
        GroupMap::new(&pads)
    };
}

/// The synthesizer sections that have their own temporary area.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SynthFamily {
    Program,
    DigitalSynth1,
    DigitalSynth2,
    AnalogSynth,
    DrumKit,
}

impl SynthFamily {
    pub const ALL: [SynthFamily; 5] = [
        SynthFamily::Program,
        SynthFamily::DigitalSynth1,
        SynthFamily::DigitalSynth2,
        SynthFamily::AnalogSynth,
        SynthFamily::DrumKit,
    ];

    /// (MSB, UMB) of the family's temporary area.
    pub fn area_bytes(&self) -> (u8, u8) {
        match self {
            SynthFamily::Program => (0x18, 0x00),
            SynthFamily::DigitalSynth1 => (0x19, 0x01),
            SynthFamily::DigitalSynth2 => (0x19, 0x21),
            SynthFamily::AnalogSynth => (0x19, 0x42),
            SynthFamily::DrumKit => (0x19, 0x70),
        }
    }

    /// Address of the start of the family's temporary area.
    pub fn base_address(&self) -> Address {
        let (msb, umb) = self.area_bytes();
        Address { msb, umb, lmb: 0, lsb: 0 }
    }

    /// Finds the family owning the temporary area at (MSB, UMB).
    pub fn from_area_bytes(msb: u8, umb: u8) -> Option<Self> {
        SynthFamily::ALL
            .iter()
            .copied()
            .find(|family| family.area_bytes() == (msb, umb))
    }

    /// Label of the temporary area, as used in exports.
    pub fn temporary_area(&self) -> &'static str {
        match self {
            SynthFamily::Program => "TEMPORARY_PROGRAM",
            SynthFamily::DigitalSynth1 => "TEMPORARY_DIGITAL_SYNTH_1",
            SynthFamily::DigitalSynth2 => "TEMPORARY_DIGITAL_SYNTH_2",
            SynthFamily::AnalogSynth => "TEMPORARY_ANALOG_SYNTH",
            SynthFamily::DrumKit => "TEMPORARY_DRUM_KIT",
        }
    }

    pub fn group_map(&self) -> &'static GroupMap {
        match self {
            SynthFamily::Program => &PROGRAM_GROUPS,
            SynthFamily::DigitalSynth1 | SynthFamily::DigitalSynth2 => &DIGITAL_GROUPS,
            SynthFamily::AnalogSynth => &ANALOG_GROUPS,
            SynthFamily::DrumKit => &DRUM_GROUPS,
        }
    }

    pub fn is_digital(&self) -> bool {
        matches!(self, SynthFamily::DigitalSynth1 | SynthFamily::DigitalSynth2)
    }
}

impl fmt::Display for SynthFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            SynthFamily::Program => "Program",
            SynthFamily::DigitalSynth1 => "Digital Synth 1",
            SynthFamily::DigitalSynth2 => "Digital Synth 2",
            SynthFamily::AnalogSynth => "Analog Synth",
            SynthFamily::DrumKit => "Drum Kit",
        })
    }
}

impl std::str::FromStr for SynthFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "program" => Ok(SynthFamily::Program),
            "digital1" | "digital-1" | "digital" => Ok(SynthFamily::DigitalSynth1),
            "digital2" | "digital-2" => Ok(SynthFamily::DigitalSynth2),
            "analog" => Ok(SynthFamily::AnalogSynth),
            "drum" | "drums" | "drum-kit" => Ok(SynthFamily::DrumKit),
            _ => Err(Error::UnresolvedSection {
                parameter: String::new(),
                family: s.to_string(),
            }),
        }
    }
}

/// Sub-section of a temporary area selected by the LMB.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SynthTone {
    Common,
    Partial(u8),
    Modify,
    VocalEffect,
    Effect1,
    Effect2,
    Delay,
    Reverb,
    /// Program part 1 to 4: digital 1, digital 2, analog, drums.
    ProgramPart(u8),
    /// Drum pad 1 to 37, keys 36 to 72.
    DrumPad(u8),
}

impl fmt::Display for SynthTone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SynthTone::Common => write!(f, "COMMON"),
            SynthTone::Partial(n) => write!(f, "PARTIAL_{}", n),
            SynthTone::Modify => write!(f, "MODIFY"),
            SynthTone::VocalEffect => write!(f, "VOCAL_EFFECT"),
            SynthTone::Effect1 => write!(f, "EFFECT_1"),
            SynthTone::Effect2 => write!(f, "EFFECT_2"),
            SynthTone::Delay => write!(f, "DELAY"),
            SynthTone::Reverb => write!(f, "REVERB"),
            SynthTone::ProgramPart(1) => write!(f, "PART_DIGITAL_SYNTH_1"),
            SynthTone::ProgramPart(2) => write!(f, "PART_DIGITAL_SYNTH_2"),
            SynthTone::ProgramPart(3) => write!(f, "PART_ANALOG_SYNTH"),
            SynthTone::ProgramPart(_) => write!(f, "PART_DRUM_KIT"),
            SynthTone::DrumPad(n) => write!(f, "DRUM_KIT_PART_{}", n),
        }
    }
}

/// A resolved synth tone plus the number of LMB steps the address lies
/// past the start of the tone's block.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ToneLocation {
    pub tone: SynthTone,
    pub lmb_offset: u8,
}

lazy_static! {
    static ref PROGRAM_TONES: HashMap<u8, SynthTone> = HashMap::from([
        (0x00, SynthTone::Common),
        (0x01, SynthTone::VocalEffect),
        (0x02, SynthTone::Effect1),
        (0x04, SynthTone::Effect2),
        (0x06, SynthTone::Delay),
        (0x08, SynthTone::Reverb),
        (0x20, SynthTone::ProgramPart(1)),
        (0x21, SynthTone::ProgramPart(2)),
        (0x22, SynthTone::ProgramPart(3)),
        (0x23, SynthTone::ProgramPart(4)),
    ]);

    static ref SYNTH_TONES: HashMap<u8, SynthTone> = HashMap::from([
        (0x00, SynthTone::Common),
        (0x20, SynthTone::Partial(1)),
        (0x21, SynthTone::Partial(2)),
        (0x22, SynthTone::Partial(3)),
        (DIGITAL_MODIFY, SynthTone::Modify),
    ]);

    static ref DRUM_TONES: HashMap<u8, SynthTone> = {
        let mut tones = HashMap::from([(COMMON, SynthTone::Common)]);
        for pad in 1..=DRUM_PAD_COUNT {
            tones.insert(DRUM_FIRST_PAD + (pad - 1) * 2, SynthTone::DrumPad(pad));
        }
        tones
    };
}

/// Resolves the synth tone an LMB selects inside a temporary area.
///
/// Blocks of 0x100 bytes or more (drum pads, program effects 1 and 2)
/// continue into the next LMB. When the LMB itself starts no block, the
/// previous LMB is tried and, if its block is that long, the location is
/// reported with an LMB offset of 1.
pub fn resolve_tone(family: Option<SynthFamily>, lmb: u8) -> ToneLocation {
    let tones: &HashMap<u8, SynthTone> = match family {
        Some(SynthFamily::DrumKit) => &DRUM_TONES,
        Some(SynthFamily::Program) => &PROGRAM_TONES,
        _ => &SYNTH_TONES,
    };
    if let Some(&tone) = tones.get(&lmb) {
        return ToneLocation { tone, lmb_offset: 0 };
    }
    family
        .zip(lmb.checked_sub(1))
        .and_then(|(family, previous)| {
            let &tone = tones.get(&previous)?;
            let section = Section::for_tone(family, tone)?;
            (section.block_size() >= 0x100).then_some(ToneLocation { tone, lmb_offset: 1 })
        })
        .unwrap_or(ToneLocation { tone: SynthTone::Common, lmb_offset: 0 })
}
