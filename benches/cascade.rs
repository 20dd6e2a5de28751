use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use gravity_ttt::{scan, Board, CascadeResolver, GravityDirection, Match, MatchConfig};

fn dense_board() -> Board {
    Board::from_rows(&["XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "XXOOXX", "OOXX.."])
        .expect("valid board")
}

fn chain_board() -> Board {
    Board::from_rows(&["OX.X.X", ".....O", ".....O", "X.....", "O.O.OX", "X....."])
        .expect("valid board")
}

fn bench_scan(c: &mut Criterion) {
    let board = dense_board();
    c.bench_function("scan_dense", |b| b.iter(|| scan(black_box(&board))));
}

fn bench_gravity(c: &mut Criterion) {
    let mut g = c.benchmark_group("gravity_cascade");
    for direction in GravityDirection::ALL {
        let board = chain_board();
        let resolver = CascadeResolver::for_board(&board);
        g.bench_function(direction.as_str(), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| resolver.gravity(&mut board, black_box(direction)),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

fn bench_legal_intents(c: &mut Criterion) {
    let mut game = Match::new(MatchConfig::cascade_variant()).expect("valid config");
    for (row, col) in [(0, 0), (5, 5), (2, 3), (3, 2)] {
        game.place_piece(row, col).expect("empty cell");
    }
    c.bench_function("legal_intents", |b| b.iter(|| black_box(&game).legal_intents()));
}

criterion_group!(benches, bench_scan, bench_gravity, bench_legal_intents);
criterion_main!(benches);
