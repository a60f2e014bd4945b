//! Core alpha-beta recursion.

use super::constants::{INFINITY, TERMINAL_THRESHOLD};
use super::{move_order, SearchState};
use crate::board::{Board, Side};

impl SearchState {
    /// Depth-limited minimax value of `board` for `root`.
    ///
    /// `maximizing` selects who moves at this node: `root` when true, its
    /// opponent otherwise. Values always come from [`Board::utility`] for
    /// `root`. A non-positive `depth` is a leaf.
    ///
    /// Results are cached by fingerprint at `depth` and reused for any later
    /// query at that depth or shallower, whatever window produced them.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Side,
    ) -> i32 {
        self.stats.nodes += 1;
        let hash = board.hash();

        if let Some(value) = self.tt.probe(hash, depth) {
            self.stats.cache_hits += 1;
            log::trace!("cache hit {hash:016x} depth {depth} value {value}");
            return value;
        }

        let terminal = board.utility(root, depth);
        if depth <= 0 || terminal.abs() > TERMINAL_THRESHOLD {
            self.store(hash, depth, terminal);
            return terminal;
        }

        let mover = if maximizing { root } else { root.opponent() };
        let mut successors = board.successors(mover);
        if successors.is_empty() {
            self.store(hash, depth, terminal);
            return terminal;
        }
        move_order::best_first(&mut successors, mover);

        let value = if maximizing {
            let mut value = -INFINITY;
            for successor in &successors {
                value = value.max(self.alpha_beta(successor, depth - 1, alpha, beta, false, root));
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for successor in &successors {
                value = value.min(self.alpha_beta(successor, depth - 1, alpha, beta, true, root));
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        };

        self.store(hash, depth, value);
        value
    }

    fn store(&mut self, hash: u64, depth: i32, value: i32) {
        self.stats.cache_stores += 1;
        self.tt.store(hash, depth, value);
    }
}
