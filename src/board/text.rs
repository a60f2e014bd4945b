//! Plain-text board format.
//!
//! A board is eight lines of eight symbols from `. r b R B`. Surrounding
//! whitespace on each line is ignored, as are blank lines.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use super::error::{BoardError, LoadError};
use super::{Board, Cell, Square, BOARD_SIZE};

impl Board {
    /// Parse a board from its text grid.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardError::WrongRowLength {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, &c) in symbols.iter().enumerate() {
                cells[row][col] =
                    Cell::from_char(c).ok_or(BoardError::InvalidCell { row, col, char: c })?;
            }
        }
        Ok(Board::from_cells(cells))
    }

    /// Render the grid as eight newline-terminated lines.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read a board from a text file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(Board::from_text(&text)?)
}

/// Write the grid line by line followed by a blank line.
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{board}")?;
    writeln!(out)
}

/// Parse a board from eight row literals. Test and bench helper.
///
/// # Panics
///
/// Panics if any row is not eight symbols from `. r b R B`. Use
/// [`Board::from_text`] for input that may be malformed.
#[must_use]
pub fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    match Board::from_text(&rows.join("\n")) {
        Ok(board) => board,
        Err(err) => panic!("invalid board literal: {err}"),
    }
}

impl Board {
    /// Symbol at `(row, col)`, for quick assertions.
    #[must_use]
    pub fn char_at(&self, row: usize, col: usize) -> char {
        self.get(Square(row, col)).to_char()
    }
}
