use std::sync::OnceLock;

use crate::encoder::function_mask::FunctionMask;
use crate::models::{ECLevel, Version};

// Capacity tables from ISO/IEC 18004 (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block count and EC codewords per block for one version/level
pub struct EcBlockInfo {
    /// Number of Reed-Solomon blocks
    pub num_blocks: usize,
    /// EC codewords in each block
    pub ecc_per_block: usize,
}

/// Look up the block structure of a version/level pair
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.ordinal();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Codewords (data + EC) a version can hold; leftover remainder bits excluded
pub fn total_codewords(version: Version) -> usize {
    FunctionMask::new(version).data_modules_count() / 8
}

/// Block layout of one version at one error correction level
///
/// Read-only prototype: the template selector hands out clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    /// Version described
    pub version: Version,
    /// Level described
    pub ec_level: ECLevel,
    /// Data codewords over all blocks
    pub data_codewords: usize,
    /// Data codewords of each block, in placement order
    pub block_lengths: Vec<usize>,
    /// EC codewords of every block
    pub ec_length: usize,
}

impl VersionDescriptor {
    fn build(version: Version, ec_level: ECLevel, total: usize) -> Self {
        let info = ec_block_info(version, ec_level);
        let data_codewords = total - info.num_blocks * info.ecc_per_block;

        // Earlier blocks take the floor, so later ones may be one longer
        let mut block_lengths = Vec::with_capacity(info.num_blocks);
        let mut remaining = data_codewords;
        for blocks_left in (1..=info.num_blocks).rev() {
            let len = remaining / blocks_left;
            block_lengths.push(len);
            remaining -= len;
        }

        Self {
            version,
            ec_level,
            data_codewords,
            block_lengths,
            ec_length: info.ecc_per_block,
        }
    }
}

static DESCRIPTORS: OnceLock<Vec<[VersionDescriptor; 4]>> = OnceLock::new();

fn descriptors() -> &'static [[VersionDescriptor; 4]] {
    DESCRIPTORS.get_or_init(|| {
        Version::all()
            .map(|version| {
                let total = total_codewords(version);
                ECLevel::ALL.map(|level| VersionDescriptor::build(version, level, total))
            })
            .collect()
    })
}

/// Descriptor for a version/level pair
pub fn descriptor(version: Version, ec_level: ECLevel) -> &'static VersionDescriptor {
    &descriptors()[version.number() as usize - 1][ec_level.ordinal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_total_codewords() {
        assert_eq!(total_codewords(version(1)), 26);
        assert_eq!(total_codewords(version(7)), 196);
        assert_eq!(total_codewords(version(14)), 581);
        assert_eq!(total_codewords(version(27)), 1828);
        assert_eq!(total_codewords(version(40)), 3706);
    }

    #[test]
    fn test_descriptor_capacities() {
        assert_eq!(descriptor(version(1), ECLevel::L).data_codewords, 19);
        assert_eq!(descriptor(version(1), ECLevel::M).data_codewords, 16);
        assert_eq!(descriptor(version(1), ECLevel::Q).data_codewords, 13);
        assert_eq!(descriptor(version(1), ECLevel::H).data_codewords, 9);
        assert_eq!(descriptor(version(40), ECLevel::L).data_codewords, 2956);
        assert_eq!(descriptor(version(40), ECLevel::H).data_codewords, 1276);
    }

    #[test]
    fn test_mixed_block_lengths() {
        // 5-Q: 62 data codewords over 4 blocks -> 15, 15, 16, 16
        let d = descriptor(version(5), ECLevel::Q);
        assert_eq!(d.block_lengths, vec![15, 15, 16, 16]);
        assert_eq!(d.ec_length, 18);
    }

    #[test]
    fn test_blocks_sum_to_capacity() {
        for v in Version::all() {
            for level in ECLevel::ALL {
                let d = descriptor(v, level);
                let info = ec_block_info(v, level);
                assert_eq!(d.block_lengths.len(), info.num_blocks);
                assert_eq!(d.block_lengths.iter().sum::<usize>(), d.data_codewords);
                let min = d.block_lengths.iter().min().unwrap();
                let max = d.block_lengths.iter().max().unwrap();
                assert!(max - min <= 1, "v{v} {level}: {:?}", d.block_lengths);
                assert!(d.block_lengths.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
