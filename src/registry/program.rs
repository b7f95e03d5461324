//! Program area: common settings, vocal effect, effects and the four parts.
//!
//! Effect, delay and reverb types share one set of numbered parameters
//! whose meaning depends on the selected type. Those are sent as nibbles in
//! 12768..=52768 and shown as -20000..=+20000.

use crate::parameter::{Parameter, Section};

use super::OFF_ON;

const VOCAL_EFFECTS: &[&str] = &["OFF", "VOCODER", "AUTO-PITCH"];
const VOCAL_EFFECT_PARTS: &[&str] = &["PART 1", "PART 2"];
const OUTPUT_ASSIGNS: &[&str] = &["EFX1", "EFX2", "DLY", "REV", "DIR"];
const AUTO_PITCH_TYPES: &[&str] = &["SOFT", "HARD", "ELECTRIC1", "ELECTRIC2"];
const AUTO_PITCH_SCALES: &[&str] = &["CHROMATIC", "Maj(Min)"];
const VOCODER_ENVELOPES: &[&str] = &["SHARP", "SOFT", "LONG"];
const EFFECT_1_TYPES: &[&str] = &["THRU", "DISTORTION", "FUZZ", "COMPRESSOR", "BIT CRUSHER"];
const EFFECT_1_OUTPUTS: &[&str] = &["DIR", "EFX2"];
const MONO_POLY: &[&str] = &["MONO", "POLY", "TONE"];
const OFF_ON_TONE: &[&str] = &["OFF", "ON", "TONE"];

const fn common(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramCommon, name, offset, min, max)
}

const fn vocal_effect(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramVocalEffect, name, offset, min, max)
}

const fn effect_1(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramEffect1, name, offset, min, max)
}

const fn effect_2(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramEffect2, name, offset, min, max)
}

const fn delay(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramDelay, name, offset, min, max)
}

const fn reverb(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramReverb, name, offset, min, max)
}

const fn part(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::ProgramPart, name, offset, min, max)
}

/// Program common, after the 12 character program name.
pub static PROGRAM_COMMON: &[Parameter] = &[
    common("PROGRAM_LEVEL", 0x10, 0, 127),
    common("PROGRAM_TEMPO", 0x11, 500, 30000).wide(),
    common("VOCAL_EFFECT", 0x16, 0, 2).labels(VOCAL_EFFECTS),
    common("VOCAL_EFFECT_NUMBER", 0x1C, 0, 20),
    common("VOCAL_EFFECT_PART", 0x1D, 0, 1).labels(VOCAL_EFFECT_PARTS),
    common("AUTO_NOTE_SWITCH", 0x1E, 0, 1).labels(OFF_ON),
];

pub static PROGRAM_VOCAL_EFFECT: &[Parameter] = &[
    vocal_effect("LEVEL", 0x00, 0, 127),
    vocal_effect("PAN", 0x01, 0, 127).bipolar(64),
    vocal_effect("DELAY_SEND_LEVEL", 0x02, 0, 127),
    vocal_effect("REVERB_SEND_LEVEL", 0x03, 0, 127),
    vocal_effect("OUTPUT_ASSIGN", 0x04, 0, 4).labels(OUTPUT_ASSIGNS),
    vocal_effect("AUTO_PITCH_SWITCH", 0x05, 0, 1).labels(OFF_ON),
    vocal_effect("AUTO_PITCH_TYPE", 0x06, 0, 3).labels(AUTO_PITCH_TYPES),
    vocal_effect("AUTO_PITCH_SCALE", 0x07, 0, 1).labels(AUTO_PITCH_SCALES),
    vocal_effect("AUTO_PITCH_KEY", 0x08, 0, 23),
    vocal_effect("AUTO_PITCH_NOTE", 0x09, 0, 11),
    vocal_effect("AUTO_PITCH_GENDER", 0x0A, 0, 20).bipolar(10),
    vocal_effect("AUTO_PITCH_OCTAVE", 0x0B, 0, 2).bipolar(1),
    vocal_effect("AUTO_PITCH_BALANCE", 0x0C, 0, 100),
    vocal_effect("VOCODER_SWITCH", 0x0D, 0, 1).labels(OFF_ON),
    vocal_effect("VOCODER_ENVELOPE", 0x0E, 0, 2).labels(VOCODER_ENVELOPES),
    vocal_effect("VOCODER_LEVEL", 0x0F, 0, 127),
    vocal_effect("VOCODER_MIC_SENS", 0x10, 0, 127),
    vocal_effect("VOCODER_SYNTH_LEVEL", 0x11, 0, 127),
    vocal_effect("VOCODER_MIC_MIX", 0x12, 0, 127),
    vocal_effect("VOCODER_MIC_HPF", 0x13, 0, 13),
];

pub static PROGRAM_EFFECT_1: &[Parameter] = &[
    effect_1("TYPE", 0x00, 0, 4).labels(EFFECT_1_TYPES),
    effect_1("LEVEL", 0x01, 0, 127),
    effect_1("DELAY_SEND_LEVEL", 0x02, 0, 127),
    effect_1("REVERB_SEND_LEVEL", 0x03, 0, 127),
    effect_1("OUTPUT_ASSIGN", 0x04, 0, 1).labels(EFFECT_1_OUTPUTS),
    effect_1("PARAMETER_1", 0x11, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_2", 0x15, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_3", 0x19, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_4", 0x1D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_5", 0x21, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_6", 0x25, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_7", 0x29, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_8", 0x2D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_9", 0x31, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_10", 0x35, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_11", 0x39, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_12", 0x3D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_13", 0x41, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_14", 0x45, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_15", 0x49, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_16", 0x4D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_17", 0x51, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_18", 0x55, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_19", 0x59, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_20", 0x5D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_21", 0x61, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_22", 0x65, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_23", 0x69, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_24", 0x6D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_25", 0x71, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_26", 0x75, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_27", 0x79, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_28", 0x7D, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_29", 0x0101, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_30", 0x0105, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_31", 0x0109, 12768, 52768).wide().bipolar(32768),
    effect_1("PARAMETER_32", 0x010D, 12768, 52768).wide().bipolar(32768),
];

/// Effect 2 types are 0 (thru) and 5 to 8 (flanger, phaser, ring mod, slicer).
pub static PROGRAM_EFFECT_2: &[Parameter] = &[
    effect_2("TYPE", 0x00, 0, 8),
    effect_2("LEVEL", 0x01, 0, 127),
    effect_2("DELAY_SEND_LEVEL", 0x02, 0, 127),
    effect_2("REVERB_SEND_LEVEL", 0x03, 0, 127),
    effect_2("PARAMETER_1", 0x11, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_2", 0x15, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_3", 0x19, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_4", 0x1D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_5", 0x21, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_6", 0x25, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_7", 0x29, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_8", 0x2D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_9", 0x31, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_10", 0x35, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_11", 0x39, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_12", 0x3D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_13", 0x41, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_14", 0x45, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_15", 0x49, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_16", 0x4D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_17", 0x51, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_18", 0x55, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_19", 0x59, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_20", 0x5D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_21", 0x61, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_22", 0x65, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_23", 0x69, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_24", 0x6D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_25", 0x71, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_26", 0x75, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_27", 0x79, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_28", 0x7D, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_29", 0x0101, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_30", 0x0105, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_31", 0x0109, 12768, 52768).wide().bipolar(32768),
    effect_2("PARAMETER_32", 0x010D, 12768, 52768).wide().bipolar(32768),
];

pub static PROGRAM_DELAY: &[Parameter] = &[
    delay("LEVEL", 0x01, 0, 127),
    delay("REVERB_SEND_LEVEL", 0x03, 0, 127),
    delay("PARAMETER_1", 0x04, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_2", 0x08, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_3", 0x0C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_4", 0x10, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_5", 0x14, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_6", 0x18, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_7", 0x1C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_8", 0x20, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_9", 0x24, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_10", 0x28, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_11", 0x2C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_12", 0x30, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_13", 0x34, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_14", 0x38, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_15", 0x3C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_16", 0x40, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_17", 0x44, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_18", 0x48, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_19", 0x4C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_20", 0x50, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_21", 0x54, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_22", 0x58, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_23", 0x5C, 12768, 52768).wide().bipolar(32768),
    delay("PARAMETER_24", 0x60, 12768, 52768).wide().bipolar(32768),
];

pub static PROGRAM_REVERB: &[Parameter] = &[
    reverb("LEVEL", 0x01, 0, 127),
    reverb("PARAMETER_1", 0x03, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_2", 0x07, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_3", 0x0B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_4", 0x0F, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_5", 0x13, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_6", 0x17, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_7", 0x1B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_8", 0x1F, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_9", 0x23, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_10", 0x27, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_11", 0x2B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_12", 0x2F, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_13", 0x33, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_14", 0x37, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_15", 0x3B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_16", 0x3F, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_17", 0x43, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_18", 0x47, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_19", 0x4B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_20", 0x4F, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_21", 0x53, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_22", 0x57, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_23", 0x5B, 12768, 52768).wide().bipolar(32768),
    reverb("PARAMETER_24", 0x5F, 12768, 52768).wide().bipolar(32768),
];

/// Program part, one block per part (digital 1, digital 2, analog, drums).
pub static PROGRAM_PART: &[Parameter] = &[
    part("RECEIVE_CHANNEL", 0x00, 0, 15).bipolar(-1),
    part("PART_SWITCH", 0x01, 0, 1).labels(OFF_ON),
    part("TONE_BANK_SELECT_MSB", 0x06, 0, 127),
    part("TONE_BANK_SELECT_LSB", 0x07, 0, 127),
    part("TONE_PROGRAM_NUMBER", 0x08, 0, 127),
    part("PART_LEVEL", 0x09, 0, 127),
    part("PART_PAN", 0x0A, 0, 127).bipolar(64),
    part("PART_COARSE_TUNE", 0x0B, 16, 112).bipolar(64),
    part("PART_FINE_TUNE", 0x0C, 14, 114).bipolar(64),
    part("PART_MONO_POLY", 0x0D, 0, 2).labels(MONO_POLY),
    part("PART_LEGATO_SWITCH", 0x0E, 0, 2).labels(OFF_ON_TONE),
    part("PART_PITCH_BEND_RANGE", 0x0F, 0, 25),
    part("PART_PORTAMENTO_SWITCH", 0x10, 0, 2).labels(OFF_ON_TONE),
    part("PART_CUTOFF_OFFSET", 0x13, 0, 127).bipolar(64),
    part("PART_RESONANCE_OFFSET", 0x14, 0, 127).bipolar(64),
    part("PART_ATTACK_TIME_OFFSET", 0x15, 0, 127).bipolar(64),
    part("PART_DECAY_TIME_OFFSET", 0x16, 0, 127).bipolar(64),
    part("PART_RELEASE_TIME_OFFSET", 0x17, 0, 127).bipolar(64),
    part("PART_VIBRATO_RATE", 0x18, 0, 127).bipolar(64),
    part("PART_VIBRATO_DEPTH", 0x19, 0, 127).bipolar(64),
    part("PART_VIBRATO_DELAY", 0x1A, 0, 127).bipolar(64),
    part("PART_OCTAVE_SHIFT", 0x1B, 61, 67).bipolar(64),
    part("PART_VELOCITY_SENS_OFFSET", 0x1C, 1, 127).bipolar(64),
];
