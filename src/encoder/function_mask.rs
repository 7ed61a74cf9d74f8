use crate::models::{BitMatrix, Version};

/// Function patterns of a QR version: the painted module values plus a
/// reserved map (true = function module, false = free for data).
#[derive(Debug, Clone)]
pub struct FunctionMask {
    modules: BitMatrix,
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Paint every function pattern of `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut this = Self {
            modules: BitMatrix::square(size),
            mask: BitMatrix::square(size),
            version,
        };

        this.paint_finders();
        this.paint_alignment();
        this.paint_timing();
        this.reserve_format_and_version();
        this
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Version the patterns were painted for
    pub fn version(&self) -> Version {
        self.version
    }

    /// True when (x, y) is reserved for a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Module values of the function patterns; data modules are light
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Modules left for data and error correction bits
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }

    /// Paint a reserved module
    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.mask.set(x, y, true);
    }

    /// Finder patterns (7x7 rings) plus their light separators
    fn paint_finders(&mut self) {
        let size = self.size();
        for (left, top) in [(0, 0), (size - 7, 0), (0, size - 7)] {
            for dy in 0..7 {
                for dx in 0..7 {
                    let ring = (dx as isize - 3).abs().max((dy as isize - 3).abs());
                    self.set_function(left + dx, top + dy, ring != 2);
                }
            }
        }

        for i in 0..8 {
            // top-left
            self.set_function(i, 7, false);
            self.set_function(7, i, false);
            // top-right
            self.set_function(size - 1 - i, 7, false);
            self.set_function(size - 8, i, false);
            // bottom-left
            self.set_function(i, size - 8, false);
            self.set_function(7, size - 1 - i, false);
        }
    }

    /// 5x5 alignment patterns at every center pair not covered by a finder
    fn paint_alignment(&mut self) {
        let centers = alignment_pattern_positions(self.version);
        for &cy in &centers {
            for &cx in &centers {
                if self.is_function(cx, cy) {
                    continue;
                }
                for dy in 0..5 {
                    for dx in 0..5 {
                        let ring = (dx as isize - 2).abs().max((dy as isize - 2).abs());
                        self.set_function(cx + dx - 2, cy + dy - 2, ring != 1);
                    }
                }
            }
        }
    }

    /// Timing patterns (row 6 and column 6) between the finders
    fn paint_timing(&mut self) {
        let size = self.size();
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            self.set_function(i, 6, dark);
            self.set_function(6, i, dark);
        }
    }

    /// Format strips, the dark module, and version blocks (v7+)
    fn reserve_format_and_version(&mut self) {
        let size = self.size();
        for i in 0..8 {
            if i != 6 {
                self.set_function(i, 8, false);
                self.set_function(8, i, false);
            }
            self.set_function(size - 1 - i, 8, false);
            self.set_function(8, size - 1 - i, false);
        }
        self.set_function(8, 8, false);

        // Dark module
        self.set_function(8, size - 8, true);

        if self.version.number() >= 7 {
            for a in size - 11..size - 8 {
                for b in 0..6 {
                    self.set_function(b, a, false);
                    self.set_function(a, b, false);
                }
            }
        }
    }
}

/// Alignment pattern centers for a given version, ascending.
///
/// Centers are spaced `delta` apart back from `size - 7`, where `delta` is
/// the even rounding of the span split into steps of at most 28; 6 is always
/// the first center.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let size = version.size();
    if size <= 21 {
        return Vec::new();
    }
    let span = size - 13;
    let steps = span.div_ceil(28);
    let mut delta = (2 * span + steps) / (2 * steps);
    if delta % 2 == 1 {
        delta += 1;
    }

    let mut positions = vec![6];
    let mut pos = size - 7;
    while pos > 10 {
        positions.push(pos);
        pos = pos.saturating_sub(delta);
    }
    positions.sort_unstable();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(version(1)).is_empty());
        assert_eq!(alignment_pattern_positions(version(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(version(7)), vec![6, 22, 38]);
        assert_eq!(
            alignment_pattern_positions(version(32)),
            vec![6, 34, 60, 86, 112, 138]
        );
        assert_eq!(
            alignment_pattern_positions(version(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_data_module_counts() {
        // Raw data modules = total codewords * 8 + remainder bits
        assert_eq!(FunctionMask::new(version(1)).data_modules_count(), 208);
        assert_eq!(FunctionMask::new(version(2)).data_modules_count(), 359);
        assert_eq!(FunctionMask::new(version(7)).data_modules_count(), 1568);
        assert_eq!(FunctionMask::new(version(40)).data_modules_count(), 29648);
    }

    #[test]
    fn test_finder_pattern() {
        let func = FunctionMask::new(version(1));
        let m = func.modules();
        // outer ring, light ring, dark core
        assert!(m.get(0, 0));
        assert!(!m.get(1, 1));
        assert!(m.get(2, 2));
        assert!(m.get(3, 3));
        assert!(!m.get(5, 3));
        // separator
        assert!(!m.get(7, 0));
        assert!(func.is_function(7, 7));
        // top-right and bottom-left corners
        assert!(m.get(20, 0));
        assert!(m.get(0, 20));
        assert!(!func.is_function(20, 20));
    }

    #[test]
    fn test_timing_and_dark_module() {
        let func = FunctionMask::new(version(2));
        let m = func.modules();
        for i in 8..17 {
            assert_eq!(m.get(i, 6), i % 2 == 0);
            assert_eq!(m.get(6, i), i % 2 == 0);
        }
        assert!(m.get(8, 25 - 8));
        assert!(func.is_function(8, 25 - 8));
    }

    #[test]
    fn test_alignment_pattern_v2() {
        let func = FunctionMask::new(version(2));
        let m = func.modules();
        assert!(m.get(18, 18));
        assert!(!m.get(17, 18));
        assert!(m.get(16, 16));
        assert!(func.is_function(20, 20));
        assert!(!func.is_function(21, 21));
    }

    #[test]
    fn test_version_blocks_reserved() {
        let small = FunctionMask::new(version(6));
        assert!(!small.is_function(small.size() - 11, 0));
        let large = FunctionMask::new(version(7));
        let size = large.size();
        assert!(large.is_function(size - 11, 0));
        assert!(large.is_function(0, size - 11));
        assert!(large.is_function(size - 9, 5));
        assert!(!large.is_function(size - 12, 0));
    }
}
