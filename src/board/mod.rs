//! Checkers board representation and game logic.
//!
//! An 8x8 grid of cells with red moving up (towards row 0) and black moving
//! down. Captures are compulsory and may chain; men reaching the far row are
//! crowned.
//!
//! # Example
//! ```
//! use checkers_solver::board::{Board, Side};
//!
//! let board = Board::new();
//! let successors = board.successors(Side::Red);
//! println!("Opening position has {} moves for red", successors.len());
//! ```

mod builder;
mod error;
pub mod eval;
mod make_move;
mod movegen;
mod search;
mod state;
mod text;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, LoadError};
pub use state::Board;
pub use text::{board_from_rows, load_board, render};
pub use types::{Cell, Move, Side, Square, BOARD_SIZE};

// Public API - search functions and configuration
pub use search::{
    find_best_move, CacheScope, LogSearchLogger, SearchInfo, SearchLogger, SearchParams,
    SearchResult, SearchState, SearchStats, DEFAULT_DEPTH, INFINITY, TERMINAL_THRESHOLD,
};
