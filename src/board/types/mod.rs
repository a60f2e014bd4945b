//! Core board types.
//!
//! - `Side` and `Cell` - the two players and the five-symbol cell alphabet
//! - `Square` - (row, col) coordinates on the 8x8 grid
//! - `Move` - a simple step or a jump chain

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Cell, Side};
pub use square::{Square, BOARD_SIZE};
