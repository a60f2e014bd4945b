//! Successor ordering for search.
//!
//! Both sorts are stable: successors the heuristic scores equally keep their
//! generation order.

use std::cmp::Reverse;

use super::super::{Board, Side};

/// Sort so the successor that looks best for `side` comes first.
pub(crate) fn best_first(successors: &mut [Board], side: Side) {
    successors.sort_by_cached_key(|board| Reverse(board.evaluate(side)));
}

/// Sort so the successor that looks worst for `side` comes first.
pub(crate) fn worst_first(successors: &mut [Board], side: Side) {
    successors.sort_by_cached_key(|board| board.evaluate(side));
}
