//! Fixed-size arrays
//!
//! The length is part of the type: `[i64; 10]` and `[i64; 3]` are different
//! types, and a multi-dimensional array is an array of arrays.

use crate::format;
use std::fmt;

/// Length of the one-dimensional array
pub const NUMBERS_LEN: usize = 10;

/// Side of the square matrix
pub const MATRIX_SIDE: usize = 3;

/// Result of the array demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDemo {
    /// `numbers[i] == i * 2`
    pub numbers: [i64; NUMBERS_LEN],
    /// `matrix[i][j] == i + j`
    pub matrix: [[i64; MATRIX_SIDE]; MATRIX_SIDE],
}

/// Fill a zeroed array so each element is twice its index.
pub fn doubled_indices() -> [i64; NUMBERS_LEN] {
    let mut numbers = [0i64; NUMBERS_LEN];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = i as i64 * 2;
    }
    numbers
}

/// Build a matrix whose cells hold the sum of their row and column.
pub fn index_sum_matrix() -> [[i64; MATRIX_SIDE]; MATRIX_SIDE] {
    let mut matrix = [[0i64; MATRIX_SIDE]; MATRIX_SIDE];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (i + j) as i64;
        }
    }
    matrix
}

pub fn demonstrate() -> ArrayDemo {
    ArrayDemo {
        numbers: doubled_indices(),
        matrix: index_sum_matrix(),
    }
}

impl fmt::Display for ArrayDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Numbers array: {}", format::seq(self.numbers.iter()))?;
        write!(f, "Matrix: {}", format::grid(&self.matrix))
    }
}
