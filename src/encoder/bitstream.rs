/// Bit streams produced by the mode encoders
use crate::models::VersionBand;

/// Growable sequence of single bits, most significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, MSB first
    pub fn push_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32);
        debug_assert!(
            count == 32 || value >> count == 0,
            "{value} does not fit in {count} bits"
        );
        for shift in (0..count).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Append another stream
    pub fn extend(&mut self, other: &BitStream) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bit has been pushed
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits as a slice
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Codewords needed to hold the stream
    pub fn codeword_len(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    /// Pack the stream into bytes, a trailing partial byte padded with zeros
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// The same payload encoded once per version band
///
/// Bands differ only in the width of the character-count field. The high
/// band is always present; the others exist only when the count fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    /// Versions 1-9
    pub low: Option<BitStream>,
    /// Versions 10-26
    pub mid: Option<BitStream>,
    /// Versions 27-40
    pub high: BitStream,
}

impl EncodedData {
    /// Stream for a band, `None` when the payload does not fit that band
    pub fn band(&self, band: VersionBand) -> Option<&BitStream> {
        match band {
            VersionBand::Low => self.low.as_ref(),
            VersionBand::Mid => self.mid.as_ref(),
            VersionBand::High => Some(&self.high),
        }
    }

    /// Append `other` band by band; a band survives only if both sides carry it
    pub fn concat(mut self, other: &EncodedData) -> EncodedData {
        self.high.extend(&other.high);
        self.mid = match (self.mid, other.mid.as_ref()) {
            (Some(mut mid), Some(rest)) => {
                mid.extend(rest);
                Some(mid)
            }
            _ => None,
        };
        self.low = match (self.low, other.low.as_ref()) {
            (Some(mut low), Some(rest)) => {
                low.extend(rest);
                Some(low)
            }
            _ => None,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(value: u32, count: u8) -> BitStream {
        let mut s = BitStream::new();
        s.push_bits(value, count);
        s
    }

    #[test]
    fn test_push_bits_msb_first() {
        let s = stream(0b1011, 4);
        assert_eq!(s.as_bits(), &[true, false, true, true]);
    }

    #[test]
    fn test_to_bytes_pads_last_byte() {
        let mut s = stream(0b0010_0000, 8);
        s.push_bits(0b01, 2);
        assert_eq!(s.to_bytes(), vec![0x20, 0x40]);
        assert_eq!(s.codeword_len(), 2);
    }

    #[test]
    fn test_concat_drops_one_sided_bands() {
        let a = EncodedData {
            low: Some(stream(1, 1)),
            mid: Some(stream(1, 1)),
            high: stream(1, 1),
        };
        let b = EncodedData {
            low: None,
            mid: Some(stream(0, 1)),
            high: stream(0, 1),
        };
        let joined = a.concat(&b);
        assert!(joined.low.is_none());
        assert_eq!(joined.mid.map(|m| m.len()), Some(2));
        assert_eq!(joined.high.as_bits(), &[true, false]);
    }
}
