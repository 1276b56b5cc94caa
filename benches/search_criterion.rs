use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use backtrack_chess::search::alpha_beta::{search_best_move, SearchConfig};
use backtrack_chess::search::board_scoring::MaterialScorer;
use backtrack_chess::utils::fen_parser::parse_fen;

struct SearchCase {
    name: &'static str,
    fen: &'static str,
    config: SearchConfig,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos_d3",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        config: SearchConfig {
            depth: 3,
            quiescence_limit: None,
        },
    },
    SearchCase {
        name: "kiwipete_d2_q2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        config: SearchConfig {
            depth: 2,
            quiescence_limit: Some(2),
        },
    },
    SearchCase {
        name: "middlegame_d3_q4",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        config: SearchConfig {
            depth: 3,
            quiescence_limit: Some(4),
        },
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    for case in CASES {
        let (mut board, color) = parse_fen(case.fen).expect("benchmark FEN should parse");

        group.bench_function(BenchmarkId::from_parameter(case.name), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                let result = search_best_move(
                    black_box(&mut board),
                    color,
                    black_box(case.config),
                    &MaterialScorer,
                    &mut rng,
                );
                black_box(result.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
