/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitStream;
use crate::error::{QrError, Result};

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Index of a code unit in the 45-symbol table
    pub fn index_of(unit: u8) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&c| c == unit)
            .map(|i| i as u32)
    }

    /// True for a non-empty run drawn from the 45-symbol table
    pub fn accepts(units: &[u8]) -> bool {
        !units.is_empty() && units.iter().all(|&u| Self::index_of(u).is_some())
    }

    /// Pack characters into the data bits (no header)
    pub fn encode(units: &[u8]) -> Result<BitStream> {
        let mut bits = BitStream::new();
        for pair in units.chunks(2) {
            let first = Self::lookup(pair[0])?;
            match pair.get(1) {
                Some(&second) => bits.push_bits(45 * first + Self::lookup(second)?, 11),
                None => bits.push_bits(first, 6),
            }
        }
        Ok(bits)
    }

    fn lookup(unit: u8) -> Result<u32> {
        Self::index_of(unit).ok_or_else(|| {
            QrError::UnsupportedInput(format!(
                "byte 0x{unit:02X} is not in the alphanumeric set"
            ))
        })
    }
}
