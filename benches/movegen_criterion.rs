use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ds_chess::game_state::chess_types::{ChessMove, GameState};
use ds_chess::move_generation::legal_move_apply::validate_move;
use ds_chess::move_generation::legal_move_generator::{CaptureMoveGenerator, LegalMoveGenerator};
use ds_chess::move_generation::move_generator::MoveGenerator;
use ds_chess::move_generation::perft::perft;

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ("promotions", "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1"),
];

fn perft_depths() -> &'static [u8] {
    match std::env::var("DS_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => &[2, 3, 4],
        _ => &[2, 3],
    }
}

fn parse(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("benchmark FEN should parse")
}

/// Full legal lists against capture-only lists for the same positions.
fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, fen) in POSITIONS {
        let mut game = parse(fen);
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| {
                let moves = LegalMoveGenerator
                    .generate_legal_moves(black_box(&mut game))
                    .expect("generation should succeed");
                black_box(moves.len())
            });
        });

        let mut game = parse(fen);
        group.bench_function(BenchmarkId::new("captures", name), |b| {
            b.iter(|| {
                let moves = CaptureMoveGenerator
                    .generate_legal_moves(black_box(&mut game))
                    .expect("generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

/// Cost of one `validate_move` call, legal or not, over every from/to pair.
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let all_pairs: Vec<ChessMove> = (0..64u8)
        .flat_map(|from| (0..64u8).map(move |to| ChessMove::new(from, to)))
        .collect();

    for (name, fen) in POSITIONS {
        let mut game = parse(fen);
        group.bench_function(*name, |b| {
            b.iter(|| {
                let accepted = all_pairs
                    .iter()
                    .filter(|&&mv| validate_move(black_box(&mut game), mv).is_ok())
                    .count();
                black_box(accepted)
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let mut game = parse(fen);
        for &depth in perft_depths() {
            group.bench_with_input(BenchmarkId::new(*name, depth), &depth, |b, &depth| {
                b.iter(|| {
                    let counts = perft(&LegalMoveGenerator, black_box(&mut game), depth)
                        .expect("perft should run");
                    black_box(counts.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_generators, bench_validate, bench_perft);
criterion_main!(movegen_benches);
