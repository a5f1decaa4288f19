//! Benchmarks for profile enumeration and payoff lookup

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nashpath_engine::fixtures::three_player_majority;
use nashpath_engine::{Contingencies, MixedProfile, NormalFormGame};

fn benchmark_contingency_walk(c: &mut Criterion) {
    let game = NormalFormGame::new(&[10, 10, 10, 10]);

    c.bench_function("contingency_walk_10k", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for profile in Contingencies::new(black_box(&game)) {
                sum += profile.index();
            }
            black_box(sum)
        })
    });
}

fn benchmark_strategy_values(c: &mut Criterion) {
    let game = three_player_majority();
    let profile = MixedProfile::uniform(&game);

    c.bench_function("strategy_values_three_player", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for pl in 0..3 {
                for st in 0..2 {
                    sum += black_box(&profile).strategy_value(pl, st);
                }
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, benchmark_contingency_walk, benchmark_strategy_values);
criterion_main!(benches);
