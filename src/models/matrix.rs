/// Compact bit matrix for storing module values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions, all bits cleared
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a square matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        // Padding bits past width * height are never set
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Rows of 0/1 integers, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get(x, y) as u8).collect())
            .collect()
    }

    /// Build a matrix from rows of 0/1 integers (any non-zero is set)
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut matrix = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                matrix.set(x, y, cell != 0);
            }
        }
        matrix
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));
        assert_eq!(matrix.count_ones(), 1);

        matrix.set(3, 4, false);
        assert!(!matrix.get(3, 4));
        assert_eq!(matrix.count_ones(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
    }

    #[test]
    fn test_rows_round_trip() {
        let mut matrix = BitMatrix::square(21);
        matrix.set(0, 0, true);
        matrix.set(20, 3, true);
        let rows = matrix.to_rows();
        assert_eq!(rows.len(), 21);
        assert_eq!(rows[0][0], 1);
        assert_eq!(rows[3][20], 1);
        assert_eq!(rows[3][19], 0);
        assert_eq!(BitMatrix::from_rows(&rows), matrix);
    }
}
