//! Roland checksum over the address and data bytes of a DT1/RQ1 message.
//!
//! The checksum makes the 7-bit sum of address, data and checksum equal to
//! zero. It only catches errors that change that sum modulo 128, so two
//! compensating byte changes go unnoticed.

/// Computes the checksum of `bytes` (address followed by data).
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u32, |acc, &b| acc + b as u32);
    ((128 - (sum % 128)) % 128) as u8
}

/// Returns true if `claimed` is the checksum of `bytes`.
pub fn validate(bytes: &[u8], claimed: u8) -> bool {
    checksum(bytes) == claimed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn gs_reset() {
        // Roland GS reset: 40 00 7F 00 -> 41h
        assert_eq!(checksum(&[0x40, 0x00, 0x7F, 0x00]), 0x41);
    }

    #[test]
    fn program_common_dump() {
        let span = [
            0x18, 0x00, 0x00, 0x00,
            0x43, 0x45, 0x52, 0x45, 0x4D, 0x4F, 0x4E, 0x59,
            0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
            0x78, 0x01, 0x0D, 0x0B, 0x00, 0x00, 0x00, 0x01,
            0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(checksum(&span), 0x71);
        assert!(validate(&span, 0x71));
    }

    #[test]
    fn multiple_of_128_sums_to_zero() {
        assert_eq!(checksum(&[0x40, 0x40]), 0);
        assert_eq!(checksum(&[0x7F, 0x01]), 0);
    }

    #[test]
    fn validate_own_checksum() {
        for a in 0..=0x7Fu8 {
            for b in (0..=0x7Fu8).step_by(7) {
                let span = [0x19, 0x01, a, b, 0x40];
                assert!(validate(&span, checksum(&span)));
            }
        }
    }

    #[test]
    fn single_byte_mutation_detected() {
        let span = [0x19, 0x01, 0x20, 0x0C, 0x64];
        let cs = checksum(&span);
        for index in 0..span.len() {
            let mut mutated = span;
            mutated[index] = (mutated[index] + 1) & 0x7F;
            assert!(!validate(&mutated, cs));
        }
    }
}
