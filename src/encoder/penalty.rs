/// Mask penalty scoring (four rules over the finished symbol)
use crate::models::BitMatrix;

const RUN_MIN: usize = 5;
const BLOCK_PENALTY: u32 = 3;
const FINDER_LIKE_PENALTY: u32 = 40;
/// 1:1:3:1:1 dark/light ratio of a finder core
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];
const QUIET_RUN: usize = 4;

/// Total penalty of a symbol; lower is better
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let mut penalty = 0;

    for i in 0..size {
        let row = |k: usize| modules.get(k, i);
        let col = |k: usize| modules.get(i, k);
        penalty += run_penalty(size, row) + run_penalty(size, col);
        penalty += finder_like_penalty(size, row) + finder_like_penalty(size, col);
    }
    penalty + block_penalty(modules) + balance_penalty(modules)
}

/// Rule 1: every run of five or more same-coloured modules scores `len - 2`
fn run_penalty(len: usize, cell: impl Fn(usize) -> bool) -> u32 {
    let mut penalty = 0;
    let mut color = cell(0);
    let mut run = 1;
    for k in 1..len {
        let c = cell(k);
        if c == color {
            run += 1;
            continue;
        }
        if run >= RUN_MIN {
            penalty += run as u32 - 2;
        }
        color = c;
        run = 1;
    }
    if run >= RUN_MIN {
        penalty += run as u32 - 2;
    }
    penalty
}

/// Rule 2: each 2x2 square of one colour scores 3 (overlaps count)
fn block_penalty(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let mut penalty = 0;
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = modules.get(x, y);
            if modules.get(x + 1, y) == c
                && modules.get(x, y + 1) == c
                && modules.get(x + 1, y + 1) == c
            {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

/// Rule 3: a 1:1:3:1:1 pattern scores 40 for each side bordered by four light modules
fn finder_like_penalty(len: usize, cell: impl Fn(usize) -> bool) -> u32 {
    let cells: Vec<bool> = (0..len).map(cell).collect();
    let light = |range: std::ops::Range<usize>| cells[range].iter().all(|&c| !c);
    let mut penalty = 0;
    for (p, window) in cells.windows(FINDER_LIKE.len()).enumerate() {
        if window != &FINDER_LIKE[..] {
            continue;
        }
        if p >= QUIET_RUN && light(p - QUIET_RUN..p) {
            penalty += FINDER_LIKE_PENALTY;
        }
        let end = p + FINDER_LIKE.len();
        if end + QUIET_RUN <= len && light(end..end + QUIET_RUN) {
            penalty += FINDER_LIKE_PENALTY;
        }
    }
    penalty
}

/// Rule 4: 10 points per 5% step away from an even dark/light balance
fn balance_penalty(modules: &BitMatrix) -> u32 {
    let total = modules.width() * modules.height();
    let dark = modules.count_ones();
    let steps = (10 * total).abs_diff(20 * dark) / total;
    10 * steps as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bits: &str) -> Vec<bool> {
        bits.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_run_penalty() {
        let l = line("11111011111100000");
        assert_eq!(run_penalty(l.len(), |k| l[k]), 3 + 4 + 3);
        let l = line("1010101010");
        assert_eq!(run_penalty(l.len(), |k| l[k]), 0);
    }

    #[test]
    fn test_finder_like_both_sides() {
        let l = line("000010111010000");
        assert_eq!(finder_like_penalty(l.len(), |k| l[k]), 80);
        // right side cut short by the edge
        let l = line("00001011101000");
        assert_eq!(finder_like_penalty(l.len(), |k| l[k]), 40);
        // dark module inside the left quiet zone
        let l = line("100010111010000");
        assert_eq!(finder_like_penalty(l.len(), |k| l[k]), 40);
    }

    #[test]
    fn test_block_penalty() {
        let m = BitMatrix::square(3);
        assert_eq!(block_penalty(&m), 4 * BLOCK_PENALTY);
        let rows: Vec<Vec<u8>> = vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]];
        assert_eq!(block_penalty(&BitMatrix::from_rows(&rows)), 0);
    }

    #[test]
    fn test_balance_penalty() {
        let mut m = BitMatrix::square(10);
        assert_eq!(balance_penalty(&m), 100);
        for y in 0..5 {
            for x in 0..10 {
                m.set(x, y, true);
            }
        }
        assert_eq!(balance_penalty(&m), 0);
        // 56% dark -> |10 - 11.2| floors to 1
        for x in 0..6 {
            m.set(x, 5, true);
        }
        assert_eq!(balance_penalty(&m), 10);
    }

    #[test]
    fn test_all_light_symbol() {
        let m = BitMatrix::square(21);
        // 21 runs of 21 per direction, 400 blocks, fully unbalanced
        assert_eq!(penalty_score(&m), 2 * 21 * 19 + 400 * 3 + 100);
    }
}
