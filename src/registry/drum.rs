//! Drum kit: the common block and one partial block per pad.
//!
//! A pad block is longer than 128 bytes, so its second half lives at the
//! next LMB: offset `0x0115` is LMB + 1, LSB 15h. Each pad plays up to four
//! wave layers (WMT1..WMT4) that share one layout.

use crate::parameter::{Parameter, Section};

use super::{OFF_ON, WAVE_GAINS};

const ASSIGN_TYPES: &[&str] = &["MULTI", "SINGLE"];
const ENV_MODES: &[&str] = &["NO-SUS", "SUSTAIN"];
const OUTPUT_ASSIGNS: &[&str] = &["EFX1", "EFX2", "DLY", "REV", "DIR"];
const VELOCITY_CONTROLS: &[&str] = &["OFF", "ON", "RANDOM"];
const ALTERNATE_PAN: &[&str] = &["OFF", "ON", "REVERSE"];
const TVF_FILTER_TYPES: &[&str] = &["OFF", "LPF", "BPF", "HPF", "PKG", "LPF2", "LPF3"];
const VELOCITY_CURVES: &[&str] = &["FIXED", "1", "2", "3", "4", "5", "6", "7"];

const fn common(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::DrumCommon, name, offset, min, max)
}

const fn partial(name: &'static str, offset: u16, min: u32, max: u32) -> Parameter {
    Parameter::new(Section::DrumPartial, name, offset, min, max)
}

/// Drum kit common, after the 12 character kit name.
pub static DRUM_COMMON: &[Parameter] = &[
    common("KIT_LEVEL", 0x0C, 0, 127),
];

/// Drum pad partial, after the 12 character partial name.
pub static DRUM_PARTIAL: &[Parameter] = &[
    partial("ASSIGN_TYPE", 0x0C, 0, 1).labels(ASSIGN_TYPES),
    partial("MUTE_GROUP", 0x0D, 0, 31),
    partial("PARTIAL_LEVEL", 0x0E, 0, 127),
    partial("PARTIAL_COARSE_TUNE", 0x0F, 0, 127),
    partial("PARTIAL_FINE_TUNE", 0x10, 14, 114).bipolar(64),
    partial("PARTIAL_RANDOM_PITCH_DEPTH", 0x11, 0, 30),
    partial("PARTIAL_PAN", 0x12, 0, 127).bipolar(64),
    partial("PARTIAL_RANDOM_PAN_DEPTH", 0x13, 0, 63),
    partial("PARTIAL_ALTERNATE_PAN_DEPTH", 0x14, 1, 127).bipolar(64),
    partial("PARTIAL_ENV_MODE", 0x15, 0, 1).labels(ENV_MODES),
    partial("PARTIAL_OUTPUT_LEVEL", 0x16, 0, 127),
    partial("PARTIAL_CHORUS_SEND_LEVEL", 0x19, 0, 127),
    partial("PARTIAL_REVERB_SEND_LEVEL", 0x1A, 0, 127),
    partial("PARTIAL_OUTPUT_ASSIGN", 0x1B, 0, 4).labels(OUTPUT_ASSIGNS),
    partial("PARTIAL_PITCH_BEND_RANGE", 0x1C, 0, 48),
    partial("PARTIAL_RECEIVE_EXPRESSION", 0x1D, 0, 1).labels(OFF_ON),
    partial("PARTIAL_RECEIVE_HOLD_1", 0x1E, 0, 1).labels(OFF_ON),
    partial("WMT_VELOCITY_CONTROL", 0x20, 0, 2).labels(VELOCITY_CONTROLS),
    partial("WMT1_WAVE_SWITCH", 0x21, 0, 1).labels(OFF_ON),
    partial("WMT1_WAVE_GROUP_TYPE", 0x22, 0, 0),
    partial("WMT1_WAVE_GROUP_ID", 0x23, 0, 16384).wide(),
    partial("WMT1_WAVE_NUMBER_L", 0x27, 0, 16384).wide(),
    partial("WMT1_WAVE_NUMBER_R", 0x2B, 0, 16384).wide(),
    partial("WMT1_WAVE_GAIN", 0x2F, 0, 3).labels(WAVE_GAINS),
    partial("WMT1_WAVE_FXM_SWITCH", 0x30, 0, 1).labels(OFF_ON),
    partial("WMT1_WAVE_FXM_COLOR", 0x31, 0, 3),
    partial("WMT1_WAVE_FXM_DEPTH", 0x32, 0, 16),
    partial("WMT1_WAVE_TEMPO_SYNC", 0x33, 0, 1).labels(OFF_ON),
    partial("WMT1_WAVE_COARSE_TUNE", 0x34, 16, 112).bipolar(64),
    partial("WMT1_WAVE_FINE_TUNE", 0x35, 14, 114).bipolar(64),
    partial("WMT1_WAVE_PAN", 0x36, 0, 127).bipolar(64),
    partial("WMT1_WAVE_RANDOM_PAN_SWITCH", 0x37, 0, 1).labels(OFF_ON),
    partial("WMT1_WAVE_ALTERNATE_PAN_SWITCH", 0x38, 0, 2).labels(ALTERNATE_PAN),
    partial("WMT1_WAVE_LEVEL", 0x39, 0, 127),
    partial("WMT1_VELOCITY_RANGE_LOWER", 0x3A, 1, 127),
    partial("WMT1_VELOCITY_RANGE_UPPER", 0x3B, 1, 127),
    partial("WMT1_VELOCITY_FADE_WIDTH_LOWER", 0x3C, 0, 127),
    partial("WMT1_VELOCITY_FADE_WIDTH_UPPER", 0x3D, 0, 127),
    partial("WMT2_WAVE_SWITCH", 0x3E, 0, 1).labels(OFF_ON),
    partial("WMT2_WAVE_GROUP_TYPE", 0x3F, 0, 0),
    partial("WMT2_WAVE_GROUP_ID", 0x40, 0, 16384).wide(),
    partial("WMT2_WAVE_NUMBER_L", 0x44, 0, 16384).wide(),
    partial("WMT2_WAVE_NUMBER_R", 0x48, 0, 16384).wide(),
    partial("WMT2_WAVE_GAIN", 0x4C, 0, 3).labels(WAVE_GAINS),
    partial("WMT2_WAVE_FXM_SWITCH", 0x4D, 0, 1).labels(OFF_ON),
    partial("WMT2_WAVE_FXM_COLOR", 0x4E, 0, 3),
    partial("WMT2_WAVE_FXM_DEPTH", 0x4F, 0, 16),
    partial("WMT2_WAVE_TEMPO_SYNC", 0x50, 0, 1).labels(OFF_ON),
    partial("WMT2_WAVE_COARSE_TUNE", 0x51, 16, 112).bipolar(64),
    partial("WMT2_WAVE_FINE_TUNE", 0x52, 14, 114).bipolar(64),
    partial("WMT2_WAVE_PAN", 0x53, 0, 127).bipolar(64),
    partial("WMT2_WAVE_RANDOM_PAN_SWITCH", 0x54, 0, 1).labels(OFF_ON),
    partial("WMT2_WAVE_ALTERNATE_PAN_SWITCH", 0x55, 0, 2).labels(ALTERNATE_PAN),
    partial("WMT2_WAVE_LEVEL", 0x56, 0, 127),
    partial("WMT2_VELOCITY_RANGE_LOWER", 0x57, 1, 127),
    partial("WMT2_VELOCITY_RANGE_UPPER", 0x58, 1, 127),
    partial("WMT2_VELOCITY_FADE_WIDTH_LOWER", 0x59, 0, 127),
    partial("WMT2_VELOCITY_FADE_WIDTH_UPPER", 0x5A, 0, 127),
    partial("WMT3_WAVE_SWITCH", 0x5B, 0, 1).labels(OFF_ON),
    partial("WMT3_WAVE_GROUP_TYPE", 0x5C, 0, 0),
    partial("WMT3_WAVE_GROUP_ID", 0x5D, 0, 16384).wide(),
    partial("WMT3_WAVE_NUMBER_L", 0x61, 0, 16384).wide(),
    partial("WMT3_WAVE_NUMBER_R", 0x65, 0, 16384).wide(),
    partial("WMT3_WAVE_GAIN", 0x69, 0, 3).labels(WAVE_GAINS),
    partial("WMT3_WAVE_FXM_SWITCH", 0x6A, 0, 1).labels(OFF_ON),
    partial("WMT3_WAVE_FXM_COLOR", 0x6B, 0, 3),
    partial("WMT3_WAVE_FXM_DEPTH", 0x6C, 0, 16),
    partial("WMT3_WAVE_TEMPO_SYNC", 0x6D, 0, 1).labels(OFF_ON),
    partial("WMT3_WAVE_COARSE_TUNE", 0x6E, 16, 112).bipolar(64),
    partial("WMT3_WAVE_FINE_TUNE", 0x6F, 14, 114).bipolar(64),
    partial("WMT3_WAVE_PAN", 0x70, 0, 127).bipolar(64),
    partial("WMT3_WAVE_RANDOM_PAN_SWITCH", 0x71, 0, 1).labels(OFF_ON),
    partial("WMT3_WAVE_ALTERNATE_PAN_SWITCH", 0x72, 0, 2).labels(ALTERNATE_PAN),
    partial("WMT3_WAVE_LEVEL", 0x73, 0, 127),
    partial("WMT3_VELOCITY_RANGE_LOWER", 0x74, 1, 127),
    partial("WMT3_VELOCITY_RANGE_UPPER", 0x75, 1, 127),
    partial("WMT3_VELOCITY_FADE_WIDTH_LOWER", 0x76, 0, 127),
    partial("WMT3_VELOCITY_FADE_WIDTH_UPPER", 0x77, 0, 127),
    partial("WMT4_WAVE_SWITCH", 0x78, 0, 1).labels(OFF_ON),
    partial("WMT4_WAVE_GROUP_TYPE", 0x79, 0, 0),
    partial("WMT4_WAVE_GROUP_ID", 0x7A, 0, 16384).wide(),
    partial("WMT4_WAVE_NUMBER_L", 0x7E, 0, 16384).wide(),
    partial("WMT4_WAVE_NUMBER_R", 0x0102, 0, 16384).wide(),
    partial("WMT4_WAVE_GAIN", 0x0106, 0, 3).labels(WAVE_GAINS),
    partial("WMT4_WAVE_FXM_SWITCH", 0x0107, 0, 1).labels(OFF_ON),
    partial("WMT4_WAVE_FXM_COLOR", 0x0108, 0, 3),
    partial("WMT4_WAVE_FXM_DEPTH", 0x0109, 0, 16),
    partial("WMT4_WAVE_TEMPO_SYNC", 0x010A, 0, 1).labels(OFF_ON),
    partial("WMT4_WAVE_COARSE_TUNE", 0x010B, 16, 112).bipolar(64),
    partial("WMT4_WAVE_FINE_TUNE", 0x010C, 14, 114).bipolar(64),
    partial("WMT4_WAVE_PAN", 0x010D, 0, 127).bipolar(64),
    partial("WMT4_WAVE_RANDOM_PAN_SWITCH", 0x010E, 0, 1).labels(OFF_ON),
    partial("WMT4_WAVE_ALTERNATE_PAN_SWITCH", 0x010F, 0, 2).labels(ALTERNATE_PAN),
    partial("WMT4_WAVE_LEVEL", 0x0110, 0, 127),
    partial("WMT4_VELOCITY_RANGE_LOWER", 0x0111, 1, 127),
    partial("WMT4_VELOCITY_RANGE_UPPER", 0x0112, 1, 127),
    partial("WMT4_VELOCITY_FADE_WIDTH_LOWER", 0x0113, 0, 127),
    partial("WMT4_VELOCITY_FADE_WIDTH_UPPER", 0x0114, 0, 127),
    partial("PITCH_ENV_DEPTH", 0x0115, 52, 76).bipolar(64),
    partial("PITCH_ENV_VELOCITY_SENS", 0x0116, 1, 127).bipolar(64),
    partial("PITCH_ENV_TIME_1_VELOCITY_SENS", 0x0117, 1, 127).bipolar(64),
    partial("PITCH_ENV_TIME_4_VELOCITY_SENS", 0x0118, 1, 127).bipolar(64),
    partial("PITCH_ENV_TIME_1", 0x0119, 0, 127),
    partial("PITCH_ENV_TIME_2", 0x011A, 0, 127),
    partial("PITCH_ENV_TIME_3", 0x011B, 0, 127),
    partial("PITCH_ENV_TIME_4", 0x011C, 0, 127),
    partial("PITCH_ENV_LEVEL_0", 0x011D, 1, 127).bipolar(64),
    partial("PITCH_ENV_LEVEL_1", 0x011E, 1, 127).bipolar(64),
    partial("PITCH_ENV_LEVEL_2", 0x011F, 1, 127).bipolar(64),
    partial("PITCH_ENV_LEVEL_3", 0x0120, 1, 127).bipolar(64),
    partial("PITCH_ENV_LEVEL_4", 0x0121, 1, 127).bipolar(64),
    partial("TVF_FILTER_TYPE", 0x0122, 0, 6).labels(TVF_FILTER_TYPES),
    partial("TVF_CUTOFF_FREQUENCY", 0x0123, 0, 127),
    partial("TVF_CUTOFF_VELOCITY_CURVE", 0x0124, 0, 7).labels(VELOCITY_CURVES),
    partial("TVF_CUTOFF_VELOCITY_SENS", 0x0125, 1, 127).bipolar(64),
    partial("TVF_RESONANCE", 0x0126, 0, 127),
    partial("TVF_RESONANCE_VELOCITY_SENS", 0x0127, 1, 127).bipolar(64),
    partial("TVF_ENV_DEPTH", 0x0128, 1, 127).bipolar(64),
    partial("TVF_ENV_VELOCITY_CURVE_TYPE", 0x0129, 0, 7).labels(VELOCITY_CURVES),
    partial("TVF_ENV_VELOCITY_SENS", 0x012A, 1, 127).bipolar(64),
    partial("TVF_ENV_TIME_1_VELOCITY_SENS", 0x012B, 1, 127).bipolar(64),
    partial("TVF_ENV_TIME_4_VELOCITY_SENS", 0x012C, 1, 127).bipolar(64),
    partial("TVF_ENV_TIME_1", 0x012D, 0, 127),
    partial("TVF_ENV_TIME_2", 0x012E, 0, 127),
    partial("TVF_ENV_TIME_3", 0x012F, 0, 127),
    partial("TVF_ENV_TIME_4", 0x0130, 0, 127),
    partial("TVF_ENV_LEVEL_0", 0x0131, 0, 127),
    partial("TVF_ENV_LEVEL_1", 0x0132, 0, 127),
    partial("TVF_ENV_LEVEL_2", 0x0133, 0, 127),
    partial("TVF_ENV_LEVEL_3", 0x0134, 0, 127),
    partial("TVF_ENV_LEVEL_4", 0x0135, 0, 127),
    partial("TVA_LEVEL_VELOCITY_CURVE", 0x0136, 0, 7).labels(VELOCITY_CURVES),
    partial("TVA_LEVEL_VELOCITY_SENS", 0x0137, 1, 127).bipolar(64),
    partial("TVA_ENV_TIME_1_VELOCITY_SENS", 0x0138, 1, 127).bipolar(64),
    partial("TVA_ENV_TIME_4_VELOCITY_SENS", 0x0139, 1, 127).bipolar(64),
    partial("TVA_ENV_TIME_1", 0x013A, 0, 127),
    partial("TVA_ENV_TIME_2", 0x013B, 0, 127),
    partial("TVA_ENV_TIME_3", 0x013C, 0, 127),
    partial("TVA_ENV_TIME_4", 0x013D, 0, 127),
    partial("TVA_ENV_LEVEL_1", 0x013E, 0, 127),
    partial("TVA_ENV_LEVEL_2", 0x013F, 0, 127),
    partial("TVA_ENV_LEVEL_3", 0x0140, 0, 127),
    partial("ONE_SHOT_MODE", 0x0141, 0, 1).labels(OFF_ON),
    partial("RELATIVE_LEVEL", 0x0142, 0, 127).bipolar(64),
];
