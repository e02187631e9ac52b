use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::perft::{perft, perft_root};

/// Published leaf counts of the 8×8 opening.
const OPENING_COUNTS: &[(u32, u64)] = &[(7, 55_092), (8, 390_216)];

fn perft_8x8(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_8x8");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for &(depth, nodes) in OPENING_COUNTS {
        assert_eq!(perft_root(depth), nodes, "leaf count mismatch at depth {depth}");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft_root(black_box(depth))));
        });
    }

    group.finish();
}

fn perft_small_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_small");
    group.sample_size(10);

    for (size, depth) in [(4, 12), (6, 7)] {
        let board = Board::new(size).unwrap();
        group.bench_with_input(BenchmarkId::new("size", size), &board, |b, board| {
            b.iter(|| black_box(perft(board, Disc::Black, black_box(depth))));
        });
    }

    group.finish();
}

criterion_group!(benches, perft_8x8, perft_small_boards);
criterion_main!(benches);
