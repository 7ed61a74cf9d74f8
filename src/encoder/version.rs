/// Version information encoding and placement for QR codes v7+
use std::sync::OnceLock;

use crate::encoder::bch::{self, VERSION_GENERATOR};
use crate::models::{BitMatrix, Version};

static VERSION_TABLE: OnceLock<[u32; 41]> = OnceLock::new();

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// 18-bit version word, `None` below version 7
    pub fn bits(version: Version) -> Option<u32> {
        let table = VERSION_TABLE.get_or_init(|| {
            std::array::from_fn(|v| {
                if v >= 7 {
                    bch::encode(v as u32, VERSION_GENERATOR)
                } else {
                    0
                }
            })
        });
        let v = version.number();
        (v >= 7).then(|| table[v as usize])
    }

    /// Write the 6x3 block above the bottom-left finder and its transpose
    /// left of the top-right finder
    pub fn write(modules: &mut BitMatrix, version: Version) {
        let Some(bits) = Self::bits(version) else {
            return;
        };
        let size = modules.width();
        for i in 0..6 {
            for j in 0..3 {
                let dark = (bits >> (i * 3 + j)) & 1 == 1;
                modules.set(size - 11 + j, i, dark);
                modules.set(i, size - 11 + j, dark);
            }
        }
    }
}
