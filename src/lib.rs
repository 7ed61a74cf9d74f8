//! qr_matrix - QR Code module matrix generator
//!
//! Turns text, numbers or raw bytes into the module grid of a QR Code
//! (Model 2, versions 1-40): data-mode encoding, Reed-Solomon error
//! correction, version selection, function patterns, data placement and
//! mask-penalty search. Rendering the grid is left to the caller.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline (modes, error correction, templates, matrix builder)
pub mod encoder;
/// Crate error type
pub mod error;
/// Core data structures (QrMatrix, BitMatrix, Version, ECLevel, etc.)
pub mod models;

pub use encoder::modes::Input;
pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrMatrix, Version};

use encoder::matrix_builder::MatrixBuilder;
use encoder::modes;
use encoder::template::{fill_template, select_template};

/// Generate the module grid for a text payload
///
/// # Arguments
/// * `text` - Payload; characters must lie in U+0000 to U+00FF
/// * `ec_level` - Error correction level
/// * `optimize_for_url` - Encode the scheme and host of `http(s)` URLs as
///   alphanumeric
///
/// # Returns
/// Square grid of 0/1 rows, side `4 * version + 17`
///
/// # Example
/// ```
/// use qr_matrix::ECLevel;
///
/// let grid = qr_matrix::generate("HELLO WORLD", ECLevel::Q, false).unwrap();
/// assert_eq!(grid.len(), 21);
/// ```
pub fn generate(text: &str, ec_level: ECLevel, optimize_for_url: bool) -> Result<Vec<Vec<u8>>> {
    QrEncoder::new()
        .ec_level(ec_level)
        .optimize_for_url(optimize_for_url)
        .encode(text)
        .map(|symbol| symbol.to_rows())
}

/// Encoder with per-call options
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder {
    ec_level: ECLevel,
    optimize_for_url: bool,
    mask: Option<MaskPattern>,
}

impl QrEncoder {
    /// Create an encoder at level M with mask search enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error correction level
    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Split `http(s)` URLs into an alphanumeric host and a byte path
    pub fn optimize_for_url(mut self, enabled: bool) -> Self {
        self.optimize_for_url = enabled;
        self
    }

    /// Force a mask pattern instead of searching for the lowest penalty
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Encode a payload into a finished symbol
    pub fn encode<'a>(&self, input: impl Into<Input<'a>>) -> Result<QrMatrix> {
        let encoded = modes::encode(input, self.optimize_for_url)?;
        let template = select_template(&encoded, self.ec_level)?;
        let data = fill_template(&encoded, template)?;
        Ok(MatrixBuilder::new(&data).build(self.mask))
    }
}
