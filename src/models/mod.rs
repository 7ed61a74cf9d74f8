/// Packed module storage
pub mod matrix;
/// Symbol parameters and the finished symbol
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrMatrix, Version, VersionBand};
