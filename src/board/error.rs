//! Error types for loading boards.

use std::fmt;
use std::io;

/// Error type for malformed board text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board text does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row does not have exactly 8 cells
    WrongRowLength { row: usize, found: usize },
    /// A cell holds a symbol outside `. r b R B`
    InvalidCell { row: usize, col: usize, char: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            BoardError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            BoardError::InvalidCell { row, col, char } => {
                write!(f, "Invalid cell '{char}' at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for reading a board from a file
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// The file was read but is not a valid board
    Board(BoardError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "Could not read board file: {err}"),
            LoadError::Board(err) => write!(f, "Malformed board file: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Board(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<BoardError> for LoadError {
    fn from(err: BoardError) -> Self {
        LoadError::Board(err)
    }
}
