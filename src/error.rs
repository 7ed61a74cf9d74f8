use thiserror::Error;

/// Errors raised while turning a payload into a QR matrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Payload exceeds the capacity of its mode, or of every version at the
    /// requested error correction level
    #[error("data too large: {0}")]
    DataTooLarge(String),

    /// Logarithm requested outside GF(256)\{0}
    #[error("invalid logarithm: log({0}) is undefined in GF(256)")]
    InvalidLogarithm(i32),

    /// Input cannot be expressed as 8-bit code units
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// Reed-Solomon generator requested for a degree the field cannot carry
    #[error("error correction length {0} is out of range (max 255)")]
    EcLengthOutOfRange(usize),

    /// Error correction level name not one of L, M, Q, H
    #[error("unknown error correction level {0:?} (expected L, M, Q or H)")]
    UnknownEcLevel(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QrError>;
