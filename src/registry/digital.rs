//! Digital (SuperNATURAL) synth tone: common block, three partials and the
//! modify block. Both digital parts share these tables.

use crate::parameter::{Parameter, Section};

use super::{LFO_SHAPES, OFF_ON, SYNC_NOTES, WAVE_GAINS};

const RING_SWITCH: &[&str] = &["OFF", "---", "ON"];
const UNISON_SIZES: &[&str] = &["2", "4", "6", "8"];
const PORTAMENTO_MODES: &[&str] = &["NORMAL", "LEGATO"];
const OSC_WAVES: &[&str] = &["SAW", "SQR", "PW-SQR", "TRI", "SINE", "NOISE", "SUPER-SAW", "PCM"];
const WAVE_VARIATIONS: &[&str] = &["A", "B", "C"];
const FILTER_MODES: &[&str] = &["BYPASS", "LPF", "HPF", "BPF", "PKG", "LPF2", "LPF3", "LPF4"];
const FILTER_SLOPES: &[&str] = &["-12", "-24"];
const ENV_LOOP_MODES: &[&str] = &["OFF", "FREE-RUN", "TEMPO-SYNC"];

const fn common(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::DigitalCommon, name, offset, min, max)
}

const fn partial(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::DigitalPartial, name, offset, min, max)
}

const fn modify(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::DigitalModify, name, offset, min, max)
}

/// Digital common, after the 12 character tone name.
pub static DIGITAL_COMMON: &[Parameter] = &[
    common("TONE_LEVEL", 0x0C, 0, 127),
    common("PORTAMENTO_SWITCH", 0x12, 0, 1).labels(OFF_ON),
    common("PORTAMENTO_TIME", 0x13, 0, 127),
    common("MONO_SWITCH", 0x14, 0, 1).labels(OFF_ON),
    common("OCTAVE_SHIFT", 0x15, 61, 67).bipolar(64),
    common("PITCH_BEND_RANGE_UP", 0x16, 0, 24),
    common("PITCH_BEND_RANGE_DOWN", 0x17, 0, 24),
    common("PARTIAL1_SWITCH", 0x19, 0, 1).labels(OFF_ON),
    common("PARTIAL1_SELECT", 0x1A, 0, 1).labels(OFF_ON),
    common("PARTIAL2_SWITCH", 0x1B, 0, 1).labels(OFF_ON),
    common("PARTIAL2_SELECT", 0x1C, 0, 1).labels(OFF_ON),
    common("PARTIAL3_SWITCH", 0x1D, 0, 1).labels(OFF_ON),
    common("PARTIAL3_SELECT", 0x1E, 0, 1).labels(OFF_ON),
    common("RING_SWITCH", 0x1F, 0, 2).labels(RING_SWITCH),
    common("UNISON_SWITCH", 0x2E, 0, 1).labels(OFF_ON),
    common("PORTAMENTO_MODE", 0x31, 0, 1).labels(PORTAMENTO_MODES),
    common("LEGATO_SWITCH", 0x32, 0, 1).labels(OFF_ON),
    common("ANALOG_FEEL", 0x34, 0, 127),
    common("WAVE_SHAPE", 0x35, 0, 127),
    common("TONE_CATEGORY", 0x36, 0, 127),
    common("UNISON_SIZE", 0x3C, 0, 3).labels(UNISON_SIZES),
];

/// Digital partial. `WAVE_NUMBER` selects the PCM wave and is sent as nibbles.
pub static DIGITAL_PARTIAL: &[Parameter] = &[
    partial("OSC_WAVE", 0x00, 0, 7).labels(OSC_WAVES),
    partial("OSC_WAVE_VARIATION", 0x01, 0, 2).labels(WAVE_VARIATIONS),
    partial("OSC_PITCH", 0x03, 40, 88).bipolar(64),
    partial("OSC_DETUNE", 0x04, 14, 114).bipolar(64),
    partial("OSC_PULSE_WIDTH_MOD_DEPTH", 0x05, 0, 127),
    partial("OSC_PULSE_WIDTH", 0x06, 0, 127),
    partial("OSC_PITCH_ENV_ATTACK_TIME", 0x07, 0, 127),
    partial("OSC_PITCH_ENV_DECAY", 0x08, 0, 127),
    partial("OSC_PITCH_ENV_DEPTH", 0x09, 1, 127).bipolar(64),
    partial("FILTER_MODE", 0x0A, 0, 7).labels(FILTER_MODES),
    partial("FILTER_SLOPE", 0x0B, 0, 1).labels(FILTER_SLOPES),
    partial("FILTER_CUTOFF", 0x0C, 0, 127),
    partial("FILTER_CUTOFF_KEYFOLLOW", 0x0D, 54, 74).bipolar(64),
    partial("FILTER_ENV_VELOCITY_SENS", 0x0E, 1, 127).bipolar(64),
    partial("FILTER_RESONANCE", 0x0F, 0, 127),
    partial("FILTER_ENV_ATTACK_TIME", 0x10, 0, 127),
    partial("FILTER_ENV_DECAY_TIME", 0x11, 0, 127),
    partial("FILTER_ENV_SUSTAIN_LEVEL", 0x12, 0, 127),
    partial("FILTER_ENV_RELEASE_TIME", 0x13, 0, 127),
    partial("FILTER_ENV_DEPTH", 0x14, 1, 127).bipolar(64),
    partial("AMP_LEVEL", 0x15, 0, 127),
    partial("AMP_LEVEL_VELOCITY_SENS", 0x16, 1, 127).bipolar(64),
    partial("AMP_ENV_ATTACK_TIME", 0x17, 0, 127),
    partial("AMP_ENV_DECAY_TIME", 0x18, 0, 127),
    partial("AMP_ENV_SUSTAIN_LEVEL", 0x19, 0, 127),
    partial("AMP_ENV_RELEASE_TIME", 0x1A, 0, 127),
    partial("AMP_PAN", 0x1B, 0, 127).bipolar(64),
    partial("LFO_SHAPE", 0x1C, 0, 5).labels(LFO_SHAPES),
    partial("LFO_RATE", 0x1D, 0, 127),
    partial("LFO_TEMPO_SYNC_SWITCH", 0x1E, 0, 1).labels(OFF_ON),
    partial("LFO_TEMPO_SYNC_NOTE", 0x1F, 0, 19).labels(SYNC_NOTES),
    partial("LFO_FADE_TIME", 0x20, 0, 127),
    partial("LFO_KEY_TRIGGER", 0x21, 0, 1).labels(OFF_ON),
    partial("LFO_PITCH_DEPTH", 0x22, 1, 127).bipolar(64),
    partial("LFO_FILTER_DEPTH", 0x23, 1, 127).bipolar(64),
    partial("LFO_AMP_DEPTH", 0x24, 1, 127).bipolar(64),
    partial("LFO_PAN_DEPTH", 0x25, 1, 127).bipolar(64),
    partial("MOD_LFO_SHAPE", 0x26, 0, 5).labels(LFO_SHAPES),
    partial("MOD_LFO_RATE", 0x27, 0, 127),
    partial("MOD_LFO_TEMPO_SYNC_SWITCH", 0x28, 0, 1).labels(OFF_ON),
    partial("MOD_LFO_TEMPO_SYNC_NOTE", 0x29, 0, 19).labels(SYNC_NOTES),
    partial("OSC_PULSE_WIDTH_SHIFT", 0x2A, 0, 127),
    partial("MOD_LFO_PITCH_DEPTH", 0x2C, 1, 127).bipolar(64),
    partial("MOD_LFO_FILTER_DEPTH", 0x2D, 1, 127).bipolar(64),
    partial("MOD_LFO_AMP_DEPTH", 0x2E, 1, 127).bipolar(64),
    partial("MOD_LFO_PAN_DEPTH", 0x2F, 1, 127).bipolar(64),
    partial("CUTOFF_AFTERTOUCH_SENS", 0x30, 1, 127).bipolar(64),
    partial("LEVEL_AFTERTOUCH_SENS", 0x31, 1, 127).bipolar(64),
    partial("WAVE_GAIN", 0x34, 0, 3).labels(WAVE_GAINS),
    partial("WAVE_NUMBER", 0x35, 0, 16384).wide(),
    partial("HPF_CUTOFF", 0x39, 0, 127),
    partial("SUPER_SAW_DETUNE", 0x3A, 0, 127),
    partial("MOD_LFO_RATE_CONTROL", 0x3B, 1, 127).bipolar(64),
    partial("AMP_LEVEL_KEYFOLLOW", 0x3C, 54, 74).bipolar(64),
];

pub static DIGITAL_MODIFY: &[Parameter] = &[
    modify("ATTACK_TIME_INTERVAL_SENS", 0x01, 0, 127),
    modify("RELEASE_TIME_INTERVAL_SENS", 0x02, 0, 127),
    modify("PORTAMENTO_TIME_INTERVAL_SENS", 0x03, 0, 127),
    modify("ENVELOPE_LOOP_MODE", 0x04, 0, 2).labels(ENV_LOOP_MODES),
    modify("ENVELOPE_LOOP_SYNC_NOTE", 0x05, 0, 19).labels(SYNC_NOTES),
    modify("CHROMATIC_PORTAMENTO", 0x06, 0, 1).labels(OFF_ON),
];
