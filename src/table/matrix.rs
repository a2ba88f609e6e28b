//! Dense interval matrix
//!
//! Cell (i, j) holds the value for the closed key interval [i, j].
//! Storage is a flat row-major `(n+2)×(n+2)` buffer so both sentinels
//! `[i, i-1]` (i ≤ n+1) and `[n+1, n]` are addressable.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Flat two-dimensional matrix indexed by interval endpoints
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct IntervalMatrix<T> {
    /// Side length (n + 2)
    dim: usize,

    /// Row-major cells
    cells: Vec<T>,
}

impl<T: Clone> IntervalMatrix<T> {
    /// Matrix for `n` keys with every cell set to `fill`
    pub fn new(n: usize, fill: T) -> Self {
        let dim = n + 2;
        Self {
            dim,
            cells: vec![fill; dim * dim],
        }
    }
}

impl<T> IntervalMatrix<T> {
    /// Number of keys this matrix was sized for
    pub fn keys(&self) -> usize {
        self.dim - 2
    }

    /// Side length of the backing square
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Checked access, `None` outside the square
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.offset(i, j).map(|idx| &self.cells[idx])
    }

    /// Checked mutable access
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        self.offset(i, j).map(move |idx| &mut self.cells[idx])
    }

    /// Row `i` restricted to the key columns `1..=n`
    pub fn key_row(&self, i: usize) -> &[T] {
        let start = i * self.dim;
        &self.cells[start + 1..start + self.dim - 1]
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.dim && j < self.dim).then(|| i * self.dim + j)
    }
}

impl<T> Index<(usize, usize)> for IntervalMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.offset(i, j) {
            Some(idx) => &self.cells[idx],
            None => panic!("cell ({}, {}) outside {}x{} matrix", i, j, self.dim, self.dim),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for IntervalMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let dim = self.dim;
        match self.offset(i, j) {
            Some(idx) => &mut self.cells[idx],
            None => panic!("cell ({}, {}) outside {}x{} matrix", i, j, dim, dim),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntervalMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for i in 1..self.dim - 1 {
            list.entry(&self.key_row(i));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_cells_are_addressable() {
        let matrix = IntervalMatrix::new(3, 0.0_f64);
        assert_eq!(matrix.dim(), 5);
        assert_eq!(matrix.keys(), 3);
        // [i, i-1] for the first and one-past-last key
        assert_eq!(matrix.get(1, 0), Some(&0.0));
        assert_eq!(matrix.get(4, 3), Some(&0.0));
        assert_eq!(matrix.get(5, 0), None);
        assert_eq!(matrix.get(0, 5), None);
    }

    #[test]
    fn key_row_skips_sentinel_columns() {
        let mut matrix = IntervalMatrix::new(2, 0usize);
        matrix[(1, 1)] = 7;
        matrix[(1, 2)] = 9;
        matrix[(1, 3)] = 42;
        assert_eq!(matrix.key_row(1), &[7, 9]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_index_panics() {
        let matrix = IntervalMatrix::new(1, 0u8);
        let _ = matrix[(3, 0)];
    }
}
