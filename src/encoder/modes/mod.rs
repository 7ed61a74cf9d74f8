//! QR code data mode encoders
//!
//! This module turns input into mode-tagged, length-prefixed bit streams:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and nine symbols
//! - Byte: 8-bit data, one code unit per character
//! - URL: scheme and host as alphanumeric, path in its own mode

pub mod alphanumeric;
pub mod byte;
pub mod numeric;
pub mod url;

use crate::encoder::bitstream::{BitStream, EncodedData};
use crate::error::{QrError, Result};
use crate::models::VersionBand;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;
use url::UrlEncoder;

/// Data mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits only, 3.3 bits per character
    Numeric,
    /// 45-symbol set, 5.5 bits per character
    Alphanumeric,
    /// Raw 8-bit code units
    Byte,
}

impl Mode {
    /// Four-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character-count field for a version band
    pub fn count_bits(&self, band: VersionBand) -> u8 {
        match (self, band) {
            (Mode::Numeric, VersionBand::Low) => 10,
            (Mode::Numeric, VersionBand::Mid) => 12,
            (Mode::Numeric, VersionBand::High) => 14,
            (Mode::Alphanumeric, VersionBand::Low) => 9,
            (Mode::Alphanumeric, VersionBand::Mid) => 11,
            (Mode::Alphanumeric, VersionBand::High) => 13,
            (Mode::Byte, VersionBand::Low) => 8,
            (Mode::Byte, _) => 16,
        }
    }

    /// Largest character count any version can hold in this mode
    pub fn max_chars(&self) -> usize {
        match self {
            Mode::Numeric => 7089,
            Mode::Alphanumeric => 4296,
            Mode::Byte => 2953,
        }
    }

    /// Most compact mode able to carry every code unit
    pub fn classify(units: &[u8]) -> Mode {
        if NumericEncoder::accepts(units) {
            Mode::Numeric
        } else if AlphanumericEncoder::accepts(units) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }
}

/// Anything the encoder accepts: text, an unsigned number, or raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Text, one 8-bit code unit per character (U+0000 to U+00FF)
    Text(&'a str),
    /// Unsigned number, encoded as its decimal digits
    Number(u64),
    /// Raw bytes
    Bytes(&'a [u8]),
}

impl Input<'_> {
    /// 8-bit code units of the input
    pub fn code_units(&self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        QrError::UnsupportedInput(format!(
                            "character {c:?} at position {i} has no 8-bit code"
                        ))
                    })
                })
                .collect(),
            Input::Number(n) => Ok(n.to_string().into_bytes()),
            Input::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl From<u64> for Input<'_> {
    fn from(n: u64) -> Self {
        Input::Number(n)
    }
}

impl From<u32> for Input<'_> {
    fn from(n: u32) -> Self {
        Input::Number(n.into())
    }
}

impl From<usize> for Input<'_> {
    fn from(n: usize) -> Self {
        Input::Number(n as u64)
    }
}

/// Encode input into one bit stream per version band
pub fn encode<'a>(input: impl Into<Input<'a>>, optimize_for_url: bool) -> Result<EncodedData> {
    let units = input.into().code_units()?;
    encode_units(&units, optimize_for_url)
}

/// Encode 8-bit code units, picking the mode from their content
pub fn encode_units(units: &[u8], optimize_for_url: bool) -> Result<EncodedData> {
    let mode = Mode::classify(units);
    if mode == Mode::Byte && optimize_for_url && UrlEncoder::accepts(units) {
        log::debug!("encoding {} code units as split URL", units.len());
        return UrlEncoder::encode(units);
    }

    if units.len() > mode.max_chars() {
        return Err(QrError::DataTooLarge(format!(
            "{} characters exceed the {:?} mode limit of {}",
            units.len(),
            mode,
            mode.max_chars()
        )));
    }

    log::debug!("encoding {} code units in {:?} mode", units.len(), mode);
    let data = match mode {
        Mode::Numeric => NumericEncoder::encode(units),
        Mode::Alphanumeric => AlphanumericEncoder::encode(units)?,
        Mode::Byte => ByteEncoder::encode(units),
    };
    Ok(with_headers(mode, units.len(), &data))
}

/// Prefix the data bits with mode indicator and count for every band that fits
fn with_headers(mode: Mode, count: usize, data: &BitStream) -> EncodedData {
    let for_band = |band: VersionBand| {
        let width = mode.count_bits(band);
        let mut stream = BitStream::new();
        stream.push_bits(mode.indicator(), 4);
        stream.push_bits(count as u32, width);
        stream.extend(data);
        stream
    };
    let fits = |band: VersionBand| count < 1usize << mode.count_bits(band);

    EncodedData {
        low: fits(VersionBand::Low).then(|| for_band(VersionBand::Low)),
        mid: fits(VersionBand::Mid).then(|| for_band(VersionBand::Mid)),
        high: for_band(VersionBand::High),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(stream: &BitStream, width: usize) -> (u32, u32) {
        let bits = stream.as_bits();
        let read = |range: std::ops::Range<usize>| {
            bits[range].iter().fold(0u32, |acc, &b| (acc << 1) | b as u32)
        };
        (read(0..4), read(4..4 + width))
    }

    #[test]
    fn test_classify() {
        assert_eq!(Mode::classify(b"12345"), Mode::Numeric);
        assert_eq!(Mode::classify(b"HELLO WORLD"), Mode::Alphanumeric);
        assert_eq!(Mode::classify(b"Hello"), Mode::Byte);
        assert_eq!(Mode::classify(b""), Mode::Byte);
    }

    #[test]
    fn test_numeric_headers_per_band() {
        let encoded = encode("12345", false).unwrap();
        assert_eq!(header(encoded.low.as_ref().unwrap(), 10), (0b0001, 5));
        assert_eq!(header(encoded.mid.as_ref().unwrap(), 12), (0b0001, 5));
        assert_eq!(header(&encoded.high, 14), (0b0001, 5));
        assert_eq!(encoded.high.len(), 4 + 14 + 10 + 7);
    }

    #[test]
    fn test_alphanumeric_band_limits() {
        let text = "A".repeat(512);
        let encoded = encode(text.as_str(), false).unwrap();
        assert!(encoded.low.is_none());
        assert!(encoded.mid.is_some());

        let text = "A".repeat(2048);
        let encoded = encode(text.as_str(), false).unwrap();
        assert!(encoded.mid.is_none());
        assert_eq!(header(&encoded.high, 13), (0b0010, 2048));
    }

    #[test]
    fn test_byte_mid_equals_high() {
        let encoded = encode("hello", false).unwrap();
        assert_eq!(encoded.mid.as_ref(), Some(&encoded.high));
        assert_eq!(header(encoded.low.as_ref().unwrap(), 8), (0b0100, 5));

        let long = "x".repeat(256);
        let encoded = encode(long.as_str(), false).unwrap();
        assert!(encoded.low.is_none());
    }

    #[test]
    fn test_mode_capacity_limits() {
        assert!(encode("1".repeat(7089).as_str(), false).is_ok());
        assert!(matches!(
            encode("1".repeat(7090).as_str(), false),
            Err(QrError::DataTooLarge(_))
        ));
        assert!(encode("A".repeat(4296).as_str(), false).is_ok());
        assert!(matches!(
            encode("A".repeat(4297).as_str(), false),
            Err(QrError::DataTooLarge(_))
        ));
    }

    #[test]
    fn test_high_half_characters_limit() {
        let ok: String = std::iter::repeat('\u{E9}').take(2953).collect();
        let encoded = encode(ok.as_str(), false).unwrap();
        assert_eq!(encoded.high.len(), 4 + 16 + 2953 * 8);

        let too_long: String = std::iter::repeat('\u{E9}').take(2954).collect();
        assert!(matches!(
            encode(too_long.as_str(), false),
            Err(QrError::DataTooLarge(_))
        ));
    }

    #[test]
    fn test_unsupported_character() {
        let err = encode("snow \u{2603}", false).unwrap_err();
        assert!(matches!(err, QrError::UnsupportedInput(_)));
    }

    #[test]
    fn test_number_and_bytes_inputs() {
        assert_eq!(
            encode(12345u64, false).unwrap(),
            encode("12345", false).unwrap()
        );
        let raw: &[u8] = b"HELLO";
        assert_eq!(encode(raw, false).unwrap(), encode("HELLO", false).unwrap());
    }

    #[test]
    fn test_url_only_when_enabled() {
        let plain = encode("https://github.com/foo", false).unwrap();
        let split = encode("https://github.com/foo", true).unwrap();
        assert!(split.high.len() < plain.high.len());
    }
}
