//! String and array exercises for the kata collection.

/// Matrix multiplication over row-major `i64` grids.
pub mod matrix;
/// String utilities: reversal, bracket balance, common directory path.
pub mod strings;
/// Tic-tac-toe position evaluation.
pub mod tic_tac_toe;

pub use matrix::{MatrixError, matrix_product};
pub use strings::{common_directory_path, is_brackets_balanced, reverse_string};
pub use tic_tac_toe::{Board, BoardError, Mark, evaluate_tic_tac_toe, parse_board};
