//! QR code encoding pipeline
//!
//! Data flows strictly forward through these stages:
//! - [`modes`]: text to mode-tagged bit streams, one per version band
//! - [`template`]: version selection, padding, block split, error correction
//! - [`matrix_builder`]: function patterns, data placement, mask search

/// BCH codes protecting the format and version words
pub mod bch;
/// Bit streams and per-band encoded payloads
pub mod bitstream;
mod config;
/// Format information table and placement
pub mod format;
/// Function pattern painting and the reserved-module map
pub mod function_mask;
/// Matrix construction and mask selection
pub mod matrix_builder;
/// Data mode encoders
pub mod modes;
/// Mask penalty rules
pub mod penalty;
/// Zigzag data placement
pub mod placement;
/// Reed-Solomon error correction over GF(256)
pub mod reed_solomon;
/// Per-version capacity tables and block layouts
pub mod tables;
/// Version selection and template filling
pub mod template;
/// Version information table and placement
pub mod version;
