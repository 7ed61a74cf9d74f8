/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use std::sync::OnceLock;

use crate::error::{QrError, Result};

const PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

/// Highest generator degree a block over GF(256) can use
const MAX_DEGREE: usize = 255;

struct GaloisTables {
    exp: [u8; 256],
    log: [u8; 256],
}

static TABLES: OnceLock<GaloisTables> = OnceLock::new();

fn tables() -> &'static GaloisTables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for slot in exp.iter_mut() {
            *slot = x as u8;
            x <<= 1;
            if x > 255 {
                x ^= PRIMITIVE_POLYNOMIAL;
            }
        }
        for (i, &e) in exp.iter().enumerate().take(255) {
            log[e as usize] = i as u8;
        }
        GaloisTables { exp, log }
    })
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^k, any integer exponent
    pub fn exp(k: i32) -> u8 {
        let mut r = k;
        while r < 0 {
            r += 255;
        }
        while r > 255 {
            r -= 255;
        }
        tables().exp[r as usize]
    }

    /// Discrete logarithm base alpha; undefined for 0
    pub fn log(k: i32) -> Result<u8> {
        if !(1..=255).contains(&k) {
            return Err(QrError::InvalidLogarithm(k));
        }
        Ok(tables().log[k as usize])
    }

    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        let log_a = t.log[a as usize] as usize;
        let log_b = t.log[b as usize] as usize;
        t.exp[(log_a + log_b) % 255]
    }
}

static GENERATORS: [OnceLock<Vec<u8>>; MAX_DEGREE + 1] = [const { OnceLock::new() }; MAX_DEGREE + 1];

/// Generator polynomial of the given degree, coefficients in log form,
/// highest power first
///
/// Degree `n` is degree `n - 1` multiplied by `(x - alpha^(n-1))`; every
/// degree is built once and kept for the life of the process.
pub fn generator_polynomial(degree: usize) -> Result<&'static [u8]> {
    let slot = GENERATORS
        .get(degree)
        .ok_or(QrError::EcLengthOutOfRange(degree))?;
    if let Some(poly) = slot.get() {
        return Ok(poly);
    }

    let poly = if degree == 0 {
        vec![0]
    } else {
        let prev = generator_polynomial(degree - 1)?;
        let root = (degree - 1) as i32;
        let mut next = Vec::with_capacity(degree + 1);
        next.push(prev[0]);
        for i in 1..=degree {
            // prev has no x^-1 term, so its coefficient there is zero
            let carried = prev.get(i).map_or(0, |&c| Gf256::exp(c as i32));
            let shifted = Gf256::exp(prev[i - 1] as i32 + root);
            next.push(Gf256::log((carried ^ shifted) as i32)?);
        }
        next
    };
    Ok(slot.get_or_init(|| poly))
}

/// Error correction codewords for one block
///
/// Remainder of `message * x^ec_length` divided by the generator of degree
/// `ec_length`.
pub fn calculate_ec(message: &[u8], ec_length: usize) -> Result<Vec<u8>> {
    let poly = generator_polynomial(ec_length)?;
    let mut work = Vec::with_capacity(message.len() + ec_length);
    work.extend_from_slice(message);
    work.resize(message.len() + ec_length, 0);

    let mut lead = 0;
    while work.len() - lead > ec_length {
        if work[lead] != 0 {
            let factor = Gf256::log(work[lead] as i32)? as i32;
            for (i, &coeff) in poly.iter().enumerate() {
                work[lead + i] ^= Gf256::exp(coeff as i32 + factor);
            }
        }
        lead += 1;
    }
    Ok(work.split_off(lead))
}
