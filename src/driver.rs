//! Game driver.
//!
//! Plays a position out from Red's turn, each side taking the move the search
//! picks, and renders every position along the way.

use std::io::{self, Write};

use crate::board::{
    render, Board, LogSearchLogger, SearchInfo, SearchLogger, SearchParams, SearchState, Side,
};

/// Why a game stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// `side_to_move` had no legal move
    NoMoves,
    /// The configured ply limit was reached first
    PlyLimit,
}

/// Outcome of [`Driver::play_out`]
#[derive(Clone, Debug)]
pub struct GameSummary {
    /// Moves played
    pub plies: u32,
    /// Last position rendered
    pub final_board: Board,
    /// Side whose turn it was at the end
    pub side_to_move: Side,
    pub end: GameEnd,
}

/// Owns the search state for a whole game.
pub struct Driver {
    state: SearchState,
    logger: Box<dyn SearchLogger>,
    max_plies: Option<u32>,
}

impl Driver {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Driver {
            state: SearchState::new(params),
            logger: Box::new(LogSearchLogger),
            max_plies: None,
        }
    }

    /// Replace the per-ply reporter.
    #[must_use]
    pub fn with_logger(mut self, logger: Box<dyn SearchLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Stop after `limit` moves even if the game is undecided.
    #[must_use]
    pub fn with_max_plies(mut self, limit: Option<u32>) -> Self {
        self.max_plies = limit;
        self
    }

    #[must_use]
    pub fn search_state(&self) -> &SearchState {
        &self.state
    }

    /// Play `board` out with Red moving first, rendering the starting
    /// position and every position after it to `out`.
    pub fn play_out(&mut self, board: Board, out: &mut impl Write) -> io::Result<GameSummary> {
        let depth = self.state.params.depth;
        if depth <= 0 {
            log::warn!("search depth {depth} is not positive; every move is a static evaluation");
        }

        let mut board = board;
        let mut side = Side::Red;
        let mut plies = 0;

        loop {
            render(&board, out)?;

            if self.max_plies.is_some_and(|limit| plies >= limit) {
                log::info!("stopping after {plies} plies");
                return Ok(GameSummary {
                    plies,
                    final_board: board,
                    side_to_move: side,
                    end: GameEnd::PlyLimit,
                });
            }

            let result = self.state.search_root(&board, side, depth);
            self.logger.info(&SearchInfo {
                ply: plies,
                side,
                depth,
                value: result.value,
                nodes: self.state.stats.nodes,
                cache_hits: self.state.stats.cache_hits,
                cutoffs: self.state.stats.cutoffs,
                cache_size: self.state.tt.len(),
            });

            let Some(next) = result.best else {
                log::info!("{side} has no move after {plies} plies");
                return Ok(GameSummary {
                    plies,
                    final_board: board,
                    side_to_move: side,
                    end: GameEnd::NoMoves,
                });
            };
            board = next;
            side = side.opponent();
            plies += 1;
        }
    }
}
