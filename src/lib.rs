pub mod board;
pub mod config;
pub mod driver;
pub mod logging;
pub mod tt;
mod zobrist;

pub use board::{Board, Cell, Move, Side, Square};
pub use driver::{Driver, GameEnd, GameSummary};
pub use tt::TranspositionTable;
