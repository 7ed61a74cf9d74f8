/// Zigzag placement of codewords into the data modules
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::template::QrData;
use crate::models::{BitMatrix, MaskPattern};

/// Position in the zigzag walk over the non-function modules
///
/// The walk starts bottom-right and moves through two-column strips,
/// alternating upward and downward, stepping over the vertical timing
/// line at column 6.
struct Cursor<'a> {
    func: &'a FunctionMask,
    row: isize,
    col: isize,
    upward: bool,
}

impl<'a> Cursor<'a> {
    fn new(func: &'a FunctionMask) -> Self {
        let last = func.size() as isize - 1;
        Self {
            func,
            row: last,
            col: last,
            upward: true,
        }
    }

    /// Current (x, y) position
    fn position(&self) -> (usize, usize) {
        (self.col as usize, self.row as usize)
    }

    /// Advance to the next free module; false once the walk has left the grid
    fn step(&mut self) -> bool {
        let last = self.func.size() as isize - 1;
        loop {
            // Strips pair even/odd columns right of the timing line, odd/even left of it
            let left_of_pair = (self.col % 2 == 1) != (self.col < 6);
            if left_of_pair {
                let at_edge = if self.upward {
                    self.row == 0
                } else {
                    self.row == last
                };
                if at_edge {
                    self.col -= 1;
                    self.upward = !self.upward;
                } else {
                    self.col += 1;
                    self.row += if self.upward { -1 } else { 1 };
                }
            } else {
                self.col -= 1;
            }
            if self.col == 6 {
                self.col -= 1;
            }
            if self.col < 0 {
                return false;
            }
            let (x, y) = self.position();
            if !self.func.is_function(x, y) {
                return true;
            }
        }
    }
}

/// Codewords in placement order: data interleaved across blocks, then EC
///
/// Blocks are read column-major; a shorter block drops out once exhausted.
pub fn interleaved_codewords(data: &QrData) -> Vec<u8> {
    let total: usize = data.blocks.iter().chain(&data.ec).map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for group in [&data.blocks, &data.ec] {
        let longest = group.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..longest {
            out.extend(group.iter().filter_map(|block| block.get(i)));
        }
    }
    out
}

/// Write every codeword bit (MSB first) under `mask`, then fill the
/// remaining free modules with the bare mask value
pub fn place_data(modules: &mut BitMatrix, func: &FunctionMask, data: &QrData, mask: MaskPattern) {
    let mut cursor = Cursor::new(func);
    let mut active = true;

    'codewords: for codeword in interleaved_codewords(data) {
        for shift in (0..8).rev() {
            let (x, y) = cursor.position();
            let bit = (codeword >> shift) & 1 == 1;
            modules.set(x, y, bit ^ mask.is_masked(y, x));
            if !cursor.step() {
                active = false;
                break 'codewords;
            }
        }
    }

    while active {
        let (x, y) = cursor.position();
        modules.set(x, y, mask.is_masked(y, x));
        active = cursor.step();
    }
}
