/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitStream;

/// Digit-only payloads
pub struct NumericEncoder;

impl NumericEncoder {
    /// True for a non-empty run of ASCII digits
    pub fn accepts(units: &[u8]) -> bool {
        !units.is_empty() && units.iter().all(u8::is_ascii_digit)
    }

    /// Pack ASCII digits into the data bits (no header)
    pub fn encode(digits: &[u8]) -> BitStream {
        let mut bits = BitStream::new();
        for group in digits.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            bits.push_bits(value, width);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Inverse of the packer, used to check it loses nothing
    fn unpack(bits: &[bool], digit_count: usize) -> String {
        let mut out = String::new();
        let mut idx = 0;
        let mut remaining = digit_count;
        while remaining > 0 {
            let group = remaining.min(3);
            let width = match group {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            let value = bits[idx..idx + width]
                .iter()
                .fold(0u32, |acc, &b| (acc << 1) | b as u32);
            assert!(value < 1000);
            out.push_str(&format!("{:0width$}", value, width = group));
            idx += width;
            remaining -= group;
        }
        assert_eq!(idx, bits.len());
        out
    }

    #[test]
    fn test_numeric_groups() {
        // "01234567" -> 012 | 345 | 67
        let bits = NumericEncoder::encode(b"01234567");
        assert_eq!(bits.len(), 10 + 10 + 7);
        let expected: Vec<bool> = "000000110001010110011000011"
            .chars()
            .map(|c| c == '1')
            .collect();
        assert_eq!(bits.as_bits(), expected.as_slice());
    }

    #[test]
    fn test_accepts() {
        assert!(NumericEncoder::accepts(b"0123"));
        assert!(!NumericEncoder::accepts(b""));
        assert!(!NumericEncoder::accepts(b"12a"));
    }

    proptest! {
        #[test]
        fn prop_numeric_round_trip(digits in "[0-9]{1,300}") {
            let bits = NumericEncoder::encode(digits.as_bytes());
            prop_assert_eq!(unpack(bits.as_bits(), digits.len()), digits);
        }
    }
}
