/// Format information (EC level + mask) encoding and placement
use std::sync::OnceLock;

use crate::encoder::bch::{self, FORMAT_GENERATOR};
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// XOR mask applied to every format codeword
const FORMAT_MASK: u16 = 0x5412;

static FORMAT_TABLE: OnceLock<[u16; 32]> = OnceLock::new();

/// Format info is 15 bits (5 data + 10 ECC)
pub struct FormatInfo;

impl FormatInfo {
    /// Masked 15-bit format word for a level/mask pair
    pub fn bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let table = FORMAT_TABLE.get_or_init(|| {
            std::array::from_fn(|data| bch::encode(data as u32, FORMAT_GENERATOR) as u16 ^ FORMAT_MASK)
        });
        let index = (ec_level.format_bits() << 3) | mask.index();
        table[index as usize]
    }

    /// Write both copies of the format word; bit 0 is the least significant
    pub fn write(modules: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
        let size = modules.width();
        let format = Self::bits(ec_level, mask);
        let bit = |k: usize| (format >> k) & 1 == 1;

        // Around the top-left finder
        for i in 0..6 {
            modules.set(8, i, bit(i));
        }
        modules.set(8, 7, bit(6));
        modules.set(8, 8, bit(7));
        modules.set(7, 8, bit(8));
        for i in 9..15 {
            modules.set(14 - i, 8, bit(i));
        }

        // Below the top-right finder and beside the bottom-left one
        for i in 0..8 {
            modules.set(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            modules.set(8, size - 15 + i, bit(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        assert_eq!(FormatInfo::bits(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
        assert_eq!(FormatInfo::bits(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        assert_eq!(FormatInfo::bits(ECLevel::Q, MaskPattern::Pattern0), 0x355F);
        assert_eq!(FormatInfo::bits(ECLevel::H, MaskPattern::Pattern0), 0x1689);
        // M, mask 5: 00101 -> 001010011011100 ^ 101010000010010
        assert_eq!(
            FormatInfo::bits(ECLevel::M, MaskPattern::Pattern5),
            0b001010011011100 ^ 0x5412
        );
    }

    #[test]
    fn test_both_copies_agree() {
        let mut modules = BitMatrix::square(21);
        FormatInfo::write(&mut modules, ECLevel::Q, MaskPattern::Pattern3);
        let format = FormatInfo::bits(ECLevel::Q, MaskPattern::Pattern3);

        // First copy read MSB first: row 8 left to right, then column 8 upwards
        let mut first = 0u16;
        for x in [0, 1, 2, 3, 4, 5, 7, 8] {
            first = (first << 1) | modules.get(x, 8) as u16;
        }
        for y in [7, 5, 4, 3, 2, 1, 0] {
            first = (first << 1) | modules.get(8, y) as u16;
        }
        assert_eq!(first, format);

        // Second copy: column 8 bottom up, then row 8 left to right
        let mut second = 0u16;
        for y in (14..21).rev() {
            second = (second << 1) | modules.get(8, y) as u16;
        }
        for x in 13..21 {
            second = (second << 1) | modules.get(x, 8) as u16;
        }
        assert_eq!(second, format);
    }
}
