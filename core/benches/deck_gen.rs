use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use twinflip_core::*;

fn bench_deck_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_gen");
    for level in 1..=3u8 {
        let level = Level::new(level).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(level.get()), &level, |b, &level| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                RandomDeckGenerator::new(seed)
                    .generate(&BuiltinPool, black_box(level), Category::Flower)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("perfect_game_level_3", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut session = Session::with_builtin_pool(SessionConfig {
                level: Level::MAX,
                seed: Some(seed),
                ..Default::default()
            })
            .unwrap();
            let tiles = session.engine().tiles().to_vec();
            for (index, tile) in tiles.iter().enumerate() {
                if let Some(other) = tiles
                    .iter()
                    .skip(index + 1)
                    .position(|candidate| candidate.image == tile.image)
                {
                    session.select(index).unwrap();
                    session.select(index + 1 + other).unwrap();
                }
            }
            black_box(session.progression())
        });
    });
}

criterion_group!(benches, bench_deck_generation, bench_perfect_game);
criterion_main!(benches);
