//! Benchmarks for checkers solver performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use checkers_solver::board::{board_from_rows, find_best_move, Board, SearchState, Side};

fn middlegame() -> Board {
    board_from_rows([
        ".b.b...b",
        "b.b.b...",
        "...b.b.b",
        "..b.....",
        ".r...r..",
        "r...r...",
        ".r.r.r.r",
        "r.....r.",
    ])
}

/// Kings scattered around capturable men, so long jump chains exist.
fn jump_heavy() -> Board {
    board_from_rows([
        "........",
        "..b.b...",
        "........",
        "..b.b.b.",
        "...R....",
        "..b.b...",
        "........",
        "........",
    ])
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves(Side::Red)))
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.generate_moves(Side::Black)))
    });

    let jumps = jump_heavy();
    group.bench_function("jump_chains", |b| {
        b.iter(|| black_box(jumps.all_jumps(Side::Red)))
    });

    group.finish();
}

fn bench_successors(c: &mut Criterion) {
    let mut group = c.benchmark_group("successors");

    let positions = [
        ("startpos", Board::new()),
        ("middlegame", middlegame()),
        ("jump_heavy", jump_heavy()),
    ];

    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("red", name), &board, |b, board| {
            b.iter(|| black_box(board.successors(Side::Red)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [3, 5, 7] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let board = Board::new();
                let mut state = SearchState::default();
                find_best_move(&board, &mut state, Side::Red, depth)
            })
        });
    }

    for depth in [3, 5] {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| {
                let board = middlegame();
                let mut state = SearchState::default();
                find_best_move(&board, &mut state, Side::Black, depth)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [("startpos", Board::new()), ("middlegame", middlegame())];

    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("utility", name), &board, |b, board| {
            b.iter(|| black_box(board.utility(Side::Red, 3)))
        });
        group.bench_with_input(BenchmarkId::new("evaluate", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(Side::Red)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_successors,
    bench_search,
    bench_eval
);
criterion_main!(benches);
