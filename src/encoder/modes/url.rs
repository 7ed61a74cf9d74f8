/// URL-split encoding: scheme and host as alphanumeric, path as whatever fits
use super::encode_units;
use crate::encoder::bitstream::EncodedData;
use crate::error::Result;

/// Host part ends at the first '/' found from this index on ("https://" is 8 long)
const HOST_SEARCH_START: usize = 8;

/// `http(s)` URLs with an upper-cased host
pub struct UrlEncoder;

impl UrlEncoder {
    /// True when the input starts with an `http:` or `https:` scheme
    pub fn accepts(units: &[u8]) -> bool {
        let lower = |n: usize| units.get(..n).map(|p| p.to_ascii_lowercase());
        lower(5).as_deref() == Some(&b"http:"[..])
            || lower(6).as_deref() == Some(&b"https:"[..])
    }

    /// Index just past the slash that closes the host, or the full length
    pub fn split_point(units: &[u8]) -> usize {
        units
            .iter()
            .skip(HOST_SEARCH_START)
            .position(|&u| u == b'/')
            .map_or(units.len(), |p| HOST_SEARCH_START + p + 1)
    }

    /// Host part alphanumeric, remainder in its own mode, joined band by band
    pub fn encode(units: &[u8]) -> Result<EncodedData> {
        let split = Self::split_point(units);
        let host = units[..split].to_ascii_uppercase();
        let encoded = encode_units(&host, false)?;
        if split >= units.len() {
            return Ok(encoded);
        }

        let path = encode_units(&units[split..], false)?;
        log::trace!(
            "url split at {split}: host {} bits, path {} bits",
            encoded.high.len(),
            path.high.len()
        );
        Ok(encoded.concat(&path))
    }
}
