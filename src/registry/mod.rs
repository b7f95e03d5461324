//! Static parameter tables, one per section, with name and offset indexes.
//!
//! The tables are plain `static` data. The indexes are built on first use
//! and never change afterwards, so lookups can run from any thread.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::address::SynthFamily;
use crate::error::{Error, Result};
use crate::parameter::{Parameter, Section};

mod analog;
mod digital;
mod drum;
mod program;

pub use analog::ANALOG;
pub use digital::{DIGITAL_COMMON, DIGITAL_MODIFY, DIGITAL_PARTIAL};
pub use drum::{DRUM_COMMON, DRUM_PARTIAL};
pub use program::{
    PROGRAM_COMMON, PROGRAM_DELAY, PROGRAM_EFFECT_1, PROGRAM_EFFECT_2, PROGRAM_PART,
    PROGRAM_REVERB, PROGRAM_VOCAL_EFFECT,
};

const OFF_ON: &[&str] = &["OFF", "ON"];
const LFO_SHAPES: &[&str] = &["TRI", "SIN", "SAW", "SQR", "S&H", "RND"];
const SYNC_NOTES: &[&str] = &[
    "16", "12", "8", "4", "2", "1", "3/4", "2/3", "1/2", "3/8",
    "1/3", "1/4", "3/16", "1/6", "1/8", "3/32", "1/12", "1/16", "1/24", "1/32",
];
const WAVE_GAINS: &[&str] = &["-6", "0", "+6", "+12"];

/// The parameters of one section plus lookup indexes.
#[derive(Debug)]
pub struct ParameterTable {
    section: Section,
    parameters: &'static [Parameter],
    by_name: HashMap<&'static str, usize>,
    by_offset: HashMap<u16, usize>,
}

impl ParameterTable {
    fn new(section: Section, parameters: &'static [Parameter]) -> Self {
        let mut by_name = HashMap::new();
        let mut by_offset = HashMap::new();
        for (index, parameter) in parameters.iter().enumerate() {
            by_name.insert(parameter.name, index);
            by_offset.insert(parameter.offset, index);
        }
        ParameterTable { section, parameters, by_name, by_offset }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn parameters(&self) -> &'static [Parameter] {
        self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Parameter> {
        self.by_name.get(name).map(|&index| &self.parameters[index])
    }

    /// Finds the parameter starting at `offset` (a `0xHHLL` offset).
    pub fn by_offset(&self, offset: u16) -> Option<&'static Parameter> {
        self.by_offset.get(&offset).map(|&index| &self.parameters[index])
    }
}

fn parameters_of(section: Section) -> &'static [Parameter] {
    match section {
        Section::ProgramCommon => PROGRAM_COMMON,
        Section::ProgramVocalEffect => PROGRAM_VOCAL_EFFECT,
        Section::ProgramEffect1 => PROGRAM_EFFECT_1,
        Section::ProgramEffect2 => PROGRAM_EFFECT_2,
        Section::ProgramDelay => PROGRAM_DELAY,
        Section::ProgramReverb => PROGRAM_REVERB,
        Section::ProgramPart => PROGRAM_PART,
        Section::DigitalCommon => DIGITAL_COMMON,
        Section::DigitalPartial => DIGITAL_PARTIAL,
        Section::DigitalModify => DIGITAL_MODIFY,
        Section::AnalogTone => ANALOG,
        Section::DrumCommon => DRUM_COMMON,
        Section::DrumPartial => DRUM_PARTIAL,
    }
}

lazy_static! {
    // In the order of Section::ALL, which is declaration order.
    static ref TABLES: Vec<ParameterTable> = Section::ALL
        .iter()
        .map(|&section| ParameterTable::new(section, parameters_of(section)))
        .collect();
}

/// Gets the table of a section.
pub fn table(section: Section) -> &'static ParameterTable {
    &TABLES[section as usize]
}

pub fn lookup_by_name(section: Section, name: &str) -> Option<&'static Parameter> {
    table(section).by_name(name)
}

pub fn lookup_by_address(section: Section, offset: u16) -> Option<&'static Parameter> {
    table(section).by_offset(offset)
}

/// Resolves a parameter name for a family. The name is either qualified
/// with a table name (`DIGITAL_PARTIAL.FILTER_CUTOFF`) or plain, in which
/// case the family's sections are searched in order.
pub fn resolve_name(family: SynthFamily, name: &str) -> Result<&'static Parameter> {
    let found = match name.split_once('.') {
        Some((section_name, parameter_name)) => Section::ALL
            .iter()
            .find(|section| section.name().eq_ignore_ascii_case(section_name))
            .filter(|section| section.belongs_to(family))
            .and_then(|&section| lookup_by_name(section, &parameter_name.to_ascii_uppercase())),
        None => {
            let upper = name.to_ascii_uppercase();
            Section::ALL
                .iter()
                .filter(|section| section.belongs_to(family))
                .find_map(|&section| lookup_by_name(section, &upper))
        }
    };
    found.ok_or_else(|| Error::UnknownParameter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::linear_offset;
    use crate::parameter::{Transform, Width};
    use std::collections::HashSet;

    #[test]
    fn tables_are_in_section_order() {
        for section in Section::ALL {
            assert_eq!(table(section).section(), section);
            assert!(!table(section).is_empty());
        }
    }

    #[test]
    fn names_are_unique() {
        for section in Section::ALL {
            let names: HashSet<&str> = table(section).parameters().iter().map(|p| p.name).collect();
            assert_eq!(names.len(), table(section).len(), "{}", section);
        }
    }

    #[test]
    fn parameters_do_not_overlap_and_fit_block() {
        for section in Section::ALL {
            let block = linear_offset(section.block_size());
            let mut used = HashSet::new();
            for parameter in table(section).parameters() {
                assert_eq!(parameter.section, section);
                assert!(parameter.offset & 0x80 == 0, "{}", parameter);
                let start = parameter.payload_index();
                assert!(start + parameter.size() <= block, "{}", parameter);
                for index in start..start + parameter.size() {
                    assert!(used.insert(index), "{} overlaps", parameter);
                }
            }
        }
    }

    #[test]
    fn ranges_fit_width_and_labels() {
        for section in Section::ALL {
            for parameter in table(section).parameters() {
                assert!(parameter.min <= parameter.max, "{}", parameter);
                if parameter.width == Width::Byte {
                    assert!(parameter.max <= 127, "{}", parameter);
                }
                if let Transform::EnumLabels(labels) = parameter.transform {
                    assert_eq!(labels.len() as u32, parameter.max - parameter.min + 1, "{}", parameter);
                }
            }
        }
    }

    #[test]
    fn display_round_trip() {
        for section in Section::ALL {
            for parameter in table(section).parameters() {
                let (min, max) = parameter.display_range();
                for display in min..=max {
                    let raw = parameter.to_midi(display).unwrap();
                    assert_eq!(parameter.from_midi(raw), display, "{}", parameter);
                }
                assert!(parameter.to_midi(min - 1).is_err(), "{}", parameter);
                assert!(parameter.to_midi(max + 1).is_err(), "{}", parameter);
            }
        }
    }

    #[test]
    fn label_lookup_is_idempotent() {
        for section in Section::ALL {
            for parameter in table(section).parameters().iter().filter(|p| p.is_switch()) {
                for raw in parameter.min..=parameter.max {
                    let label = parameter.label(raw).unwrap();
                    let back = parameter.raw_for_label(label).unwrap();
                    assert_eq!(parameter.label(back), Some(label), "{}", parameter);
                }
            }
        }
    }

    #[test]
    fn offset_64_center_is_zero() {
        let mut checked = 0;
        for section in Section::ALL {
            for parameter in table(section).parameters() {
                if parameter.transform == (Transform::Linear { offset: 64 }) {
                    assert_eq!(parameter.from_midi(64), 0, "{}", parameter);
                    checked += 1;
                }
            }
        }
        assert!(checked > 50);
    }

    #[test]
    fn lookups() {
        let cutoff = lookup_by_name(Section::DigitalPartial, "FILTER_CUTOFF").unwrap();
        assert_eq!(cutoff.offset, 0x0C);
        assert_eq!(lookup_by_address(Section::DigitalPartial, 0x0C), Some(cutoff));
        assert!(lookup_by_name(Section::DigitalPartial, "NOPE").is_none());

        let one_shot = lookup_by_address(Section::DrumPartial, 0x0141).unwrap();
        assert_eq!(one_shot.name, "ONE_SHOT_MODE");

        let wave = lookup_by_name(Section::DrumPartial, "WMT4_WAVE_NUMBER_L").unwrap();
        assert_eq!(wave.offset, 0x007E);
        assert_eq!(wave.width, Width::Nibbles);
    }

    #[test]
    fn resolve_names() {
        let tempo = resolve_name(SynthFamily::Program, "program_tempo").unwrap();
        assert_eq!(tempo.section, Section::ProgramCommon);

        let level = resolve_name(SynthFamily::Program, "PROGRAM_DELAY.LEVEL").unwrap();
        assert_eq!(level.section, Section::ProgramDelay);

        let cutoff = resolve_name(SynthFamily::DigitalSynth2, "FILTER_CUTOFF").unwrap();
        assert_eq!(cutoff.section, Section::DigitalPartial);

        let analog = resolve_name(SynthFamily::AnalogSynth, "FILTER_CUTOFF").unwrap();
        assert_eq!(analog.section, Section::AnalogTone);

        assert!(matches!(
            resolve_name(SynthFamily::AnalogSynth, "DIGITAL_PARTIAL.FILTER_CUTOFF"),
            Err(Error::UnknownParameter(_))
        ));
    }
}
