use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kalaha::{Game, GameConfig, Seat, Strategy};

fn full_games(c: &mut Criterion) {
    let random = GameConfig::new().with_seed(1);
    let greedy = GameConfig::new()
        .with_beads_per_bowl(6)
        .with_strategy(Seat::First, Strategy::GreedyMax)
        .with_strategy(Seat::Second, Strategy::GreedyMax)
        .with_seed(1);

    c.bench_function("random_vs_random", |b| {
        b.iter(|| Game::new(black_box(&random)).run())
    });
    c.bench_function("greedy_vs_greedy_6_beads", |b| {
        b.iter(|| Game::new(black_box(&greedy)).run())
    });
}

criterion_group!(benches, full_games);
criterion_main!(benches);
