//! Version/template selection and template filling
//!
//! [`select_template`] picks the smallest version whose data capacity holds
//! the encoded payload; [`fill_template`] packs the payload into codewords,
//! pads, splits into blocks and computes every block's error correction.

use crate::encoder::bitstream::EncodedData;
use crate::encoder::reed_solomon::calculate_ec;
use crate::encoder::tables::{VersionDescriptor, descriptor};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version, VersionBand};

/// Pad codewords alternated after the terminator
const PAD_CODEWORDS: [u8; 2] = [236, 17];

/// Terminator bits following the payload
const TERMINATOR_BITS: usize = 4;

/// A version descriptor plus the codewords placed into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrData {
    /// Chosen version
    pub version: Version,
    /// Error correction level
    pub ec_level: ECLevel,
    /// Data codewords over all blocks
    pub data_codewords: usize,
    /// Data codewords of each block
    pub block_lengths: Vec<usize>,
    /// EC codewords of every block
    pub ec_length: usize,
    /// Data codewords per block, empty until filled
    pub blocks: Vec<Vec<u8>>,
    /// EC codewords per block, empty until filled
    pub ec: Vec<Vec<u8>>,
}

impl QrData {
    fn from_descriptor(d: &VersionDescriptor) -> Self {
        Self {
            version: d.version,
            ec_level: d.ec_level,
            data_codewords: d.data_codewords,
            block_lengths: d.block_lengths.clone(),
            ec_length: d.ec_length,
            blocks: Vec::new(),
            ec: Vec::new(),
        }
    }

    /// True once codewords have been filled in
    pub fn is_filled(&self) -> bool {
        !self.blocks.is_empty() && self.blocks.len() == self.ec.len()
    }
}

/// Smallest version at `ec_level` whose data capacity fits the payload
pub fn select_template(encoded: &EncodedData, ec_level: ECLevel) -> Result<QrData> {
    for band in VersionBand::ALL {
        let Some(stream) = encoded.band(band) else {
            continue;
        };
        let needed = stream.codeword_len();
        if let Some(d) = band
            .versions()
            .map(|v| descriptor(v, ec_level))
            .find(|d| d.data_codewords >= needed)
        {
            log::debug!(
                "selected version {}-{} for {} codewords (capacity {})",
                d.version,
                ec_level,
                needed,
                d.data_codewords
            );
            return Ok(QrData::from_descriptor(d));
        }
    }

    Err(QrError::DataTooLarge(format!(
        "{} bits do not fit any version at level {}",
        encoded.high.len(),
        ec_level
    )))
}

/// Pack the payload into the template and compute error correction
pub fn fill_template(encoded: &EncodedData, mut template: QrData) -> Result<QrData> {
    let band = template.version.band();
    let stream = encoded.band(band).ok_or_else(|| {
        QrError::DataTooLarge(format!(
            "payload has no {band:?} band stream for version {}",
            template.version
        ))
    })?;

    let mut codewords = stream.to_bytes();
    if codewords.len() > template.data_codewords {
        return Err(QrError::DataTooLarge(format!(
            "{} codewords exceed version {}-{} capacity of {}",
            codewords.len(),
            template.version,
            template.ec_level,
            template.data_codewords
        )));
    }

    let pad_start = (stream.len() + TERMINATOR_BITS).div_ceil(8);
    codewords.resize(pad_start.clamp(codewords.len(), template.data_codewords), 0);
    let pad_len = template.data_codewords - codewords.len();
    codewords.extend(PAD_CODEWORDS.iter().cycle().take(pad_len));

    let mut offset = 0;
    let mut blocks = Vec::with_capacity(template.block_lengths.len());
    let mut ec = Vec::with_capacity(template.block_lengths.len());
    for &len in &template.block_lengths {
        let block = codewords[offset..offset + len].to_vec();
        offset += len;
        ec.push(calculate_ec(&block, template.ec_length)?);
        blocks.push(block);
    }

    log::trace!(
        "filled version {}: {} payload bits, {} pad codewords, {} blocks",
        template.version,
        stream.len(),
        pad_len,
        blocks.len()
    );
    template.blocks = blocks;
    template.ec = ec;
    Ok(template)
}
