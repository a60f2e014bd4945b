//! Zobrist hashing for checkers positions.
//!
//! Provides incrementally-updatable 64-bit board fingerprints for the value
//! cache. Only the grid contributes: the side to move is not part of the key.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Cell, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[cell_kind][square_index]: red man, red king, black man, black king
    pub(crate) piece_keys: [[u64; 64]; 4],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[0; 64]; 4];

        for kind in &mut piece_keys {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys { piece_keys }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key contributed by `cell` standing on `sq`; zero for an empty cell.
#[inline]
pub(crate) fn cell_key(cell: Cell, sq: Square) -> u64 {
    match cell.piece_index() {
        Some(kind) => ZOBRIST.piece_keys[kind][sq.index()],
        None => 0,
    }
}
