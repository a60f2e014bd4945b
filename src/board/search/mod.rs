//! Search module implementing depth-limited alpha-beta.
//!
//! Features:
//! - Minimax with alpha-beta pruning, values from the root side's viewpoint
//! - Successor ordering by a positional heuristic before recursing
//! - Value cache keyed by board fingerprint, reused across searches

mod alphabeta;
mod constants;
mod log;
mod move_order;
mod params;

use crate::tt::TranspositionTable;

use super::{Board, Side};
pub use constants::{DEFAULT_DEPTH, INFINITY, TERMINAL_THRESHOLD};
pub use log::{LogSearchLogger, SearchInfo, SearchLogger};
pub use params::{CacheScope, SearchParams};

/// Result of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen successor, `None` if the side to move has no move
    pub best: Option<Board>,
    /// Search value of `best`, from the mover's viewpoint for Red and as a
    /// value to minimise for Black
    pub value: Option<i32>,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Search state persisted across searches
pub struct SearchState {
    pub stats: SearchStats,
    pub tt: TranspositionTable,
    pub params: SearchParams,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tt: TranspositionTable::new(),
            params,
        }
    }

    /// Pick a successor for `side`, searching `depth` plies including the
    /// root move.
    ///
    /// Red maximises and Black minimises the value returned by
    /// [`SearchState::alpha_beta`] with `side` as the root player. Ties go to
    /// the successor examined last. The running `alpha`/`beta` are passed on
    /// to later root successors but never cut the root loop short.
    pub fn search_root(&mut self, board: &Board, side: Side, depth: i32) -> SearchResult {
        self.stats.reset();
        if self.params.cache_scope == CacheScope::Move {
            self.tt.clear();
        }

        let mut successors = board.successors(side);
        if successors.is_empty() {
            return SearchResult {
                best: None,
                value: None,
            };
        }

        let maximizing = side == Side::Red;
        if maximizing {
            move_order::best_first(&mut successors, side);
        } else {
            move_order::worst_first(&mut successors, side);
        }

        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best = None;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;

        for (i, successor) in successors.into_iter().enumerate() {
            let value = self.alpha_beta(&successor, depth - 1, alpha, beta, !maximizing, side);
            ::log::debug!("root move {i} for {side}: value {value} (best so far {best_value})");

            if maximizing {
                if value >= best_value {
                    best_value = value;
                    best = Some(successor);
                }
                alpha = alpha.max(value);
            } else {
                if value <= best_value {
                    best_value = value;
                    best = Some(successor);
                }
                beta = beta.min(value);
            }
        }

        SearchResult {
            value: best.as_ref().map(|_| best_value),
            best,
        }
    }
}

/// Find the successor `side` should move to, or `None` if it has no legal move.
pub fn find_best_move(
    board: &Board,
    state: &mut SearchState,
    side: Side,
    depth: i32,
) -> Option<Board> {
    state.search_root(board, side, depth).best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Square};

    #[test]
    fn test_no_successors_returns_none() {
        let board = BoardBuilder::new()
            .man(Square(1, 0), Side::Red)
            .man(Square(0, 1), Side::Black)
            .build();
        let mut state = SearchState::default();
        assert!(find_best_move(&board, &mut state, Side::Red, 4).is_none());
        assert_eq!(state.stats.nodes, 0);
    }

    #[test]
    fn test_single_successor_is_chosen() {
        let board = BoardBuilder::new()
            .man(Square(5, 0), Side::Red)
            .man(Square(0, 7), Side::Black)
            .build();
        let mut state = SearchState::default();
        let result = state.search_root(&board, Side::Red, 3);
        let best = result.best.expect("red has a move");
        assert_eq!(best.char_at(4, 1), 'r');
        assert!(result.value.is_some());
    }

    #[test]
    fn test_move_scope_clears_cache() {
        let board = Board::new();
        let params = SearchParams {
            depth: 3,
            cache_scope: CacheScope::Move,
        };
        let mut state = SearchState::new(params);
        state.tt.store(0xDEAD_BEEF, 99, 1);
        let _ = find_best_move(&board, &mut state, Side::Red, 3);
        assert_eq!(state.tt.entry(0xDEAD_BEEF), None);
    }

    #[test]
    fn test_run_scope_keeps_cache() {
        let board = Board::new();
        let mut state = SearchState::default();
        state.tt.store(0xDEAD_BEEF, 99, 1);
        let _ = find_best_move(&board, &mut state, Side::Red, 3);
        assert!(state.tt.entry(0xDEAD_BEEF).is_some());
        assert!(state.tt.len() > 1);
    }

    #[test]
    fn test_stats_reset_per_search() {
        let board = Board::new();
        let mut state = SearchState::default();
        let _ = find_best_move(&board, &mut state, Side::Red, 3);
        let first = state.stats;
        assert!(first.nodes > 0);
        let _ = find_best_move(&board, &mut state, Side::Red, 3);
        // Second search hits the cache at the root successors
        assert!(state.stats.nodes <= first.nodes);
        assert!(state.stats.cache_hits > 0);
    }
}
