/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitStream;

/// Encode byte mode data (8 bits per character)
pub struct ByteEncoder;

impl ByteEncoder {
    /// One 8-bit group per code unit (no header)
    pub fn encode(units: &[u8]) -> BitStream {
        let mut bits = BitStream::new();
        for &unit in units {
            bits.push_bits(u32::from(unit), 8);
        }
        bits
    }
}
