//! Matrix multiplication.
//!
//! Matrices are row-major `Vec<Vec<i64>>`; every row must have the same
//! length.

use thiserror::Error;

/// Operands that cannot be multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Columns in the first row.
        expected: usize,
        /// Columns in the offending row.
        found: usize,
    },

    /// The left operand's column count is not the right operand's row count.
    #[error("cannot multiply a matrix with {left_columns} columns by one with {right_rows} rows")]
    DimensionMismatch {
        /// Columns of the left operand.
        left_columns: usize,
        /// Rows of the right operand.
        right_rows: usize,
    },

    /// A product entry does not fit in an `i64`.
    #[error("entry ({row}, {column}) overflows")]
    Overflow {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
    },
}

/// Column count of a rectangular matrix.
fn columns(matrix: &[Vec<i64>]) -> Result<usize, MatrixError> {
    let expected = matrix.first().map_or(0, Vec::len);
    match matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        Some((row, values)) => Err(MatrixError::Ragged {
            row,
            expected,
            found: values.len(),
        }),
        None => Ok(expected),
    }
}

/// The product `left × right`.
///
/// ```text
/// [[1, 0, 0],     [[1, 2, 3],     [[1, 2, 3],
///  [0, 1, 0],  ×   [4, 5, 6],  =   [4, 5, 6],
///  [0, 0, 1]]      [7, 8, 9]]      [7, 8, 9]]
///
/// [[1, 2, 3]]  ×  [[4], [5], [6]]  =  [[32]]
/// ```
///
/// # Errors
///
/// Returns [`MatrixError::Ragged`] if either operand has rows of unequal
/// length, [`MatrixError::DimensionMismatch`] if the inner dimensions
/// differ, and [`MatrixError::Overflow`] if an entry overflows.
pub fn matrix_product(left: &[Vec<i64>], right: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, MatrixError> {
    let left_columns = columns(left)?;
    let right_columns = columns(right)?;
    if left_columns != right.len() {
        return Err(MatrixError::DimensionMismatch {
            left_columns,
            right_rows: right.len(),
        });
    }

    left.iter()
        .enumerate()
        .map(|(row, values)| {
            (0..right_columns)
                .map(|column| {
                    values
                        .iter()
                        .zip(right)
                        .try_fold(0i64, |acc, (&a, right_row)| {
                            a.checked_mul(right_row[column])?.checked_add(acc)
                        })
                        .ok_or(MatrixError::Overflow { row, column })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
