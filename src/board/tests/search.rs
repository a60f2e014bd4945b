//! Root search tests.

use crate::board::eval::WIN_SCORE;
use crate::board::{
    board_from_rows, find_best_move, BoardBuilder, Cell, SearchState, Side, Square, INFINITY,
};

#[test]
fn test_red_ties_go_to_last_examined() {
    // Both red steps are worth 0 at depth 1. The step onto (4,3) is examined
    // first because it takes the centre, so the later (4,1) step wins the tie.
    let board = BoardBuilder::new()
        .man(Square(5, 2), Side::Red)
        .man(Square(0, 7), Side::Black)
        .build();
    let mut state = SearchState::default();
    let best = find_best_move(&board, &mut state, Side::Red, 1).expect("red can move");
    assert_eq!(best.get(Square(4, 1)), Cell::Man(Side::Red));
}

#[test]
fn test_black_ties_go_to_last_examined() {
    // Black examines its worst-looking step first, so the centre step comes
    // last and takes the tie.
    let board = BoardBuilder::new()
        .man(Square(2, 5), Side::Black)
        .man(Square(7, 0), Side::Red)
        .build();
    let mut state = SearchState::default();
    let best = find_best_move(&board, &mut state, Side::Black, 1).expect("black can move");
    assert_eq!(best.get(Square(3, 4)), Cell::Man(Side::Black));
}

#[test]
fn test_red_avoids_losing_a_piece() {
    let board = board_from_rows([
        "........",
        "........",
        "........",
        "..b.....",
        "........",
        "r.....r.",
        "........",
        "........",
    ]);
    let mut state = SearchState::default();
    let result = state.search_root(&board, Side::Red, 2);
    let best = result.best.expect("red can move");
    assert_eq!(result.value, Some(1));
    // Moving (5,0) up would hand black a capture.
    assert_eq!(best.get(Square(5, 0)), Cell::Man(Side::Red));
    assert_eq!(best.get(Square(4, 7)), Cell::Man(Side::Red));
}

#[test]
fn test_red_takes_the_last_piece() {
    let board = BoardBuilder::new()
        .man(Square(5, 2), Side::Red)
        .man(Square(7, 6), Side::Red)
        .man(Square(4, 3), Side::Black)
        .build();
    let mut state = SearchState::default();
    let result = state.search_root(&board, Side::Red, 3);
    let best = result.best.expect("red can move");
    assert_eq!(best.piece_count(Side::Black), 0);
    assert_eq!(result.value, Some(WIN_SCORE - 2));
}

#[test]
fn test_cached_value_steers_root_choice() {
    // A deep cache entry is trusted as-is, whatever produced it.
    let board = BoardBuilder::new()
        .man(Square(5, 2), Side::Red)
        .man(Square(0, 7), Side::Black)
        .build();
    let centre_step = board.apply_hop(Square(5, 2), Square(4, 3));

    let mut state = SearchState::default();
    state.tt.store(centre_step.hash(), 5, 7);
    let result = state.search_root(&board, Side::Red, 1);
    assert_eq!(result.best, Some(centre_step));
    assert_eq!(result.value, Some(7));
}

#[test]
fn test_cache_populated_by_search() {
    let board = crate::board::Board::new();
    let mut state = SearchState::default();
    let _ = find_best_move(&board, &mut state, Side::Red, 3);
    assert!(!state.tt.is_empty());
    assert!(state.stats.cache_stores as usize >= state.tt.len());

    // Every root successor was stored at depth 2.
    for successor in board.successors(Side::Red) {
        let entry = state.tt.entry(successor.hash()).expect("root successor cached");
        assert_eq!(entry.depth, 2);
    }
}

#[test]
fn test_alpha_beta_matches_across_fresh_states() {
    let board = crate::board::Board::new().apply_hop(Square(5, 2), Square(4, 3));
    let mut a = SearchState::default();
    let mut b = SearchState::default();
    let va = a.alpha_beta(&board, 3, -INFINITY, INFINITY, false, Side::Red);
    let vb = b.alpha_beta(&board, 3, -INFINITY, INFINITY, false, Side::Red);
    assert_eq!(va, vb);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn test_black_root_searches_its_own_second_move() {
    // Black's replies are searched as Black moving again. Stepping to (3,2)
    // would let Black take the red man next, so that line scores a win and
    // the minimising root prefers (3,0). If Red replied instead, (3,2) would
    // lose the man to a capture and be the minimum.
    let board = BoardBuilder::new()
        .man(Square(2, 1), Side::Black)
        .man(Square(4, 3), Side::Red)
        .build();
    let mut state = SearchState::default();
    let result = state.search_root(&board, Side::Black, 2);
    let best = result.best.expect("black can move");
    assert_eq!(best.get(Square(3, 0)), Cell::Man(Side::Black));
    assert_eq!(best.get(Square(3, 2)), Cell::Empty);
    assert_eq!(result.value, Some(0));

    let stepped = board.apply_hop(Square(2, 1), Square(3, 2));
    assert_eq!(
        state.alpha_beta(&stepped, 1, -INFINITY, INFINITY, true, Side::Black),
        WIN_SCORE
    );
}
