//! Packing of wide parameter values into four 4-bit data bytes.
//!
//! Values above 127 do not fit a MIDI data byte, so the JD-Xi sends them as
//! four nibbles, most significant first: 300 (012Ch) becomes `00 01 02 0C`.

use bit::BitIndex;

use crate::error::{Error, Result};

/// Number of data bytes a nibble-encoded value occupies.
pub const NIBBLE_COUNT: usize = 4;

/// Largest value four nibbles can carry.
pub const MAX_NIBBLE_VALUE: u32 = 0xFFFF;

/// Splits `value` into four nibbles, most significant first.
pub fn pack_to_nibbles(value: u32) -> Result<[u8; NIBBLE_COUNT]> {
    if value > MAX_NIBBLE_VALUE {
        return Err(Error::ValueOutOfRange {
            name: "nibble value".to_string(),
            value: value.min(i32::MAX as u32) as i32,
            min: 0,
            max: MAX_NIBBLE_VALUE as i32,
        });
    }

    let mut result = [0u8; NIBBLE_COUNT];
    for (index, nibble) in result.iter_mut().enumerate() {
        let shift = (NIBBLE_COUNT - 1 - index) * 4;
        *nibble = value.bit_range(shift..shift + 4) as u8;
    }
    Ok(result)
}

/// Combines four nibbles, most significant first, into a value.
/// Every byte must be in 00h..=0Fh.
pub fn unpack_from_nibbles(nibbles: [u8; NIBBLE_COUNT]) -> Result<u32> {
    let mut value = 0u32;
    for (index, &nibble) in nibbles.iter().enumerate() {
        if nibble > 0x0F {
            return Err(Error::ValueOutOfRange {
                name: format!("nibble {}", index),
                value: nibble as i32,
                min: 0,
                max: 0x0F,
            });
        }
        let shift = (NIBBLE_COUNT - 1 - index) * 4;
        value.set_bit_range(shift..shift + 4, nibble as u32);
    }
    Ok(value)
}

/// Reads four nibbles starting at `start`, if the slice is long enough.
pub fn unpack_slice(data: &[u8], start: usize) -> Option<Result<u32>> {
    let bytes = data.get(start..start + NIBBLE_COUNT)?;
    let mut nibbles = [0u8; NIBBLE_COUNT];
    nibbles.copy_from_slice(bytes);
    Some(unpack_from_nibbles(nibbles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_wave_number() {
        assert_eq!(pack_to_nibbles(300).unwrap(), [0x00, 0x01, 0x02, 0x0C]);
        assert_eq!(pack_to_nibbles(16384).unwrap(), [0x04, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn pack_tempo() {
        // 76.00 BPM
        assert_eq!(pack_to_nibbles(7600).unwrap(), [0x01, 0x0D, 0x0B, 0x00]);
    }

    #[test]
    fn unpack_tempo() {
        assert_eq!(unpack_from_nibbles([0x01, 0x0D, 0x0B, 0x00]).unwrap(), 7600);
    }

    #[test]
    fn full_range_round_trip() {
        for value in 0..=MAX_NIBBLE_VALUE {
            let nibbles = pack_to_nibbles(value).unwrap();
            assert!(nibbles.iter().all(|&n| n <= 0x0F));
            assert_eq!(unpack_from_nibbles(nibbles).unwrap(), value);
        }
    }

    #[test]
    fn pack_too_wide() {
        assert!(matches!(
            pack_to_nibbles(0x1_0000),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn unpack_invalid_nibble() {
        assert!(matches!(
            unpack_from_nibbles([0x00, 0x10, 0x00, 0x00]),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn unpack_short_slice() {
        assert!(unpack_slice(&[0x00, 0x01, 0x02], 0).is_none());
        assert_eq!(unpack_slice(&[0x7F, 0x00, 0x01, 0x02, 0x0C], 1).unwrap().unwrap(), 300);
    }
}
