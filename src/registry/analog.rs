//! Analog synth tone. The analog part has a single block.

use crate::parameter::{Parameter, Section};

use super::{LFO_SHAPES, OFF_ON, SYNC_NOTES};

const OSC_WAVEFORMS: &[&str] = &["SAW", "TRI", "PW-SQR"];
const SUB_OSC_TYPES: &[&str] = &["OFF", "OCT-1", "OCT-2"];
const FILTER_SWITCH: &[&str] = &["BYPASS", "LPF"];

const fn tone(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::AnalogTone, name, offset, min, max)
}

/// Analog tone, after the 12 character tone name.
pub static ANALOG: &[Parameter] = &[
    tone("LFO_SHAPE", 0x0D, 0, 5).labels(LFO_SHAPES),
    tone("LFO_RATE", 0x0E, 0, 127),
    tone("LFO_FADE_TIME", 0x0F, 0, 127),
    tone("LFO_TEMPO_SYNC_SWITCH", 0x10, 0, 1).labels(OFF_ON),
    tone("LFO_TEMPO_SYNC_NOTE", 0x11, 0, 19).labels(SYNC_NOTES),
    tone("LFO_PITCH_DEPTH", 0x12, 1, 127).bipolar(64),
    tone("LFO_FILTER_DEPTH", 0x13, 1, 127).bipolar(64),
    tone("LFO_AMP_DEPTH", 0x14, 1, 127).bipolar(64),
    tone("LFO_KEY_TRIGGER", 0x15, 0, 1).labels(OFF_ON),
    tone("OSC_WAVEFORM", 0x16, 0, 2).labels(OSC_WAVEFORMS),
    tone("OSC_PITCH_COARSE", 0x17, 40, 88).bipolar(64),
    tone("OSC_PITCH_FINE", 0x18, 14, 114).bipolar(64),
    tone("OSC_PULSE_WIDTH", 0x19, 0, 127),
    tone("OSC_PULSE_WIDTH_MOD_DEPTH", 0x1A, 0, 127),
    tone("OSC_PITCH_ENV_VELOCITY_SENS", 0x1B, 1, 127).bipolar(64),
    tone("OSC_PITCH_ENV_ATTACK_TIME", 0x1C, 0, 127),
    tone("OSC_PITCH_ENV_DECAY", 0x1D, 0, 127),
    tone("OSC_PITCH_ENV_DEPTH", 0x1E, 1, 127).bipolar(64),
    tone("SUB_OSCILLATOR_TYPE", 0x1F, 0, 2).labels(SUB_OSC_TYPES),
    tone("FILTER_SWITCH", 0x20, 0, 1).labels(FILTER_SWITCH),
    tone("FILTER_CUTOFF", 0x21, 0, 127),
    tone("FILTER_CUTOFF_KEYFOLLOW", 0x22, 54, 74).bipolar(64),
    tone("FILTER_RESONANCE", 0x23, 0, 127),
    tone("FILTER_ENV_VELOCITY_SENS", 0x24, 1, 127).bipolar(64),
    tone("FILTER_ENV_ATTACK_TIME", 0x25, 0, 127),
    tone("FILTER_ENV_DECAY_TIME", 0x26, 0, 127),
    tone("FILTER_ENV_SUSTAIN_LEVEL", 0x27, 0, 127),
    tone("FILTER_ENV_RELEASE_TIME", 0x28, 0, 127),
    tone("FILTER_ENV_DEPTH", 0x29, 1, 127).bipolar(64),
    tone("AMP_LEVEL", 0x2A, 0, 127),
    tone("AMP_LEVEL_KEYFOLLOW", 0x2B, 54, 74).bipolar(64),
    tone("AMP_LEVEL_VELOCITY_SENS", 0x2C, 1, 127).bipolar(64),
    tone("AMP_ENV_ATTACK_TIME", 0x2D, 0, 127),
    tone("AMP_ENV_DECAY_TIME", 0x2E, 0, 127),
    tone("AMP_ENV_SUSTAIN_LEVEL", 0x2F, 0, 127),
    tone("AMP_ENV_RELEASE_TIME", 0x30, 0, 127),
    tone("PORTAMENTO_SWITCH", 0x31, 0, 1).labels(OFF_ON),
    tone("PORTAMENTO_TIME", 0x32, 0, 127),
    tone("LEGATO_SWITCH", 0x33, 0, 1).labels(OFF_ON),
    tone("OCTAVE_SHIFT", 0x34, 61, 67).bipolar(64),
    tone("PITCH_BEND_RANGE_UP", 0x35, 0, 24),
    tone("PITCH_BEND_RANGE_DOWN", 0x36, 0, 24),
    tone("LFO_PITCH_MODULATION_CONTROL", 0x38, 1, 127).bipolar(64),
    tone("LFO_FILTER_MODULATION_CONTROL", 0x39, 1, 127).bipolar(64),
    tone("LFO_AMP_MODULATION_CONTROL", 0x3A, 1, 127).bipolar(64),
    tone("LFO_RATE_MODULATION_CONTROL", 0x3B, 1, 127).bipolar(64),
];
