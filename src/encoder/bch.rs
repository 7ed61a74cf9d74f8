//! BCH codes protecting QR format and version info

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0x537;

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1F25;

fn degree(poly: u32) -> u32 {
    31 - poly.leading_zeros()
}

/// Remainder of `data * x^deg(generator)` modulo `generator` over GF(2)
pub fn remainder(data: u32, generator: u32) -> u32 {
    let deg = degree(generator);
    let mut rem = data << deg;
    while rem != 0 && degree(rem) >= deg {
        rem ^= generator << (degree(rem) - deg);
    }
    rem
}

/// Systematic codeword: data bits followed by the check bits
pub fn encode(data: u32, generator: u32) -> u32 {
    (data << degree(generator)) | remainder(data, generator)
}
