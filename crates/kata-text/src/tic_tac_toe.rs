//! Tic-tac-toe position evaluation.

use strum_macros::Display;
use thiserror::Error;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// Cross, written `X`.
    #[strum(serialize = "X")]
    X,
    /// Nought, written `0`.
    #[strum(serialize = "0")]
    O,
}

/// A 3×3 position; `None` is an empty cell.
pub type Board = [[Option<Mark>; 3]; 3];

/// Every winning line as `(row, column)` cells.
const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The player holding a full row, column or diagonal, or `None` if nobody
/// has won (including unfinished positions).
///
/// ```text
/// X 0 .      X . 0      X 0 X
/// X 0 0      0 X 0      X 0 0
/// X . 0      0 . X      0 X 0
///
///   X          X        None
/// ```
///
/// Lines are checked rows first, then columns, then diagonals; an
/// impossible board with two winners reports the first line found.
#[must_use]
pub fn evaluate_tic_tac_toe(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, column)| board[row][column]);
        a.filter(|&mark| b == Some(mark) && c == Some(mark))
    })
}

/// A row that cannot be read as three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The row does not have exactly three cells.
    #[error("row {row} has {found} cells, expected 3")]
    WrongLength {
        /// Index of the row.
        row: usize,
        /// Cells found.
        found: usize,
    },

    /// A cell is not `X`, `0`/`O`, or empty (` `, `.`, `_`).
    #[error("unrecognized cell {found:?} at row {row}, column {column}")]
    UnknownCell {
        /// Index of the row.
        row: usize,
        /// Index of the column.
        column: usize,
        /// The character read.
        found: char,
    },
}

fn parse_cell(row: usize, column: usize, c: char) -> Result<Option<Mark>, BoardError> {
    match c {
        'X' | 'x' => Ok(Some(Mark::X)),
        '0' | 'O' | 'o' => Ok(Some(Mark::O)),
        ' ' | '.' | '_' => Ok(None),
        found => Err(BoardError::UnknownCell { row, column, found }),
    }
}

/// Read a board from three rows of three characters, e.g. `["X0 ", "X00",
/// "X 0"]`.
///
/// # Errors
///
/// Returns [`BoardError`] if a row is not three characters long or holds
/// an unrecognized character.
pub fn parse_board(rows: &[&str; 3]) -> Result<Board, BoardError> {
    let mut board: Board = [[None; 3]; 3];
    for (row, text) in rows.iter().enumerate() {
        let found = text.chars().count();
        if found != 3 {
            return Err(BoardError::WrongLength { row, found });
        }
        for (column, c) in text.chars().enumerate() {
            board[row][column] = parse_cell(row, column, c)?;
        }
    }
    Ok(board)
}
