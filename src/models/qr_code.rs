use std::fmt;
use std::str::FromStr;

use super::BitMatrix;
use crate::error::QrError;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Create a version, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Character-count band this version belongs to
    pub fn band(&self) -> VersionBand {
        match self.0 {
            1..=9 => VersionBand::Low,
            10..=26 => VersionBand::Mid,
            _ => VersionBand::High,
        }
    }

    /// Iterate every version from 1 to 40
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version range sharing one width for the character-count field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionBand {
    /// Versions 1-9
    Low,
    /// Versions 10-26
    Mid,
    /// Versions 27-40
    High,
}

impl VersionBand {
    /// All bands, smallest versions first
    pub const ALL: [VersionBand; 3] = [VersionBand::Low, VersionBand::Mid, VersionBand::High];

    /// First version of the band
    pub fn first_version(&self) -> Version {
        match self {
            VersionBand::Low => Version(1),
            VersionBand::Mid => Version(10),
            VersionBand::High => Version(27),
        }
    }

    /// Last version of the band
    pub fn last_version(&self) -> Version {
        match self {
            VersionBand::Low => Version(9),
            VersionBand::Mid => Version(26),
            VersionBand::High => Version(40),
        }
    }

    /// Versions covered by the band, ascending
    pub fn versions(&self) -> impl Iterator<Item = Version> {
        (self.first_version().0..=self.last_version().0).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    #[default]
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, weakest first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the per-level capacity tables
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Two-bit value stored in the format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(QrError::UnknownEcLevel(s.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every mask, in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask index (0-7)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Generated QR code symbol
#[derive(Debug, Clone)]
pub struct QrMatrix {
    /// Version picked for the payload
    pub version: Version,
    /// Error correction level used
    pub error_correction: ECLevel,
    /// Mask pattern applied to the data modules
    pub mask_pattern: MaskPattern,
    /// Penalty score of the committed symbol
    pub penalty: u32,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
}

impl QrMatrix {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Rows of 0/1 integers, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.modules.to_rows()
    }
}
