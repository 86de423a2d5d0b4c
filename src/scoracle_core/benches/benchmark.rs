use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scoracle_core::constants::{DEFAULT_SIMULATIONS, MAX_EVENTS};
use scoracle_core::over_under::analyze;
use scoracle_core::parlay::generate_balanced_pairs;
use scoracle_core::simulation::{simulate, summarize, ScoreSimulator};

fn create_score_history() -> (Vec<i64>, Vec<i64>) {
    let team1 = (0..40).map(|i| 95 + (i * 7) % 30).collect();
    let team2 = (0..40).map(|i| 90 + (i * 11) % 28).collect();
    (team1, team2)
}

fn bench_simulate(c: &mut Criterion) {
    let (team1, team2) = create_score_history();

    c.bench_function("simulate_10000_draws", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| simulate(black_box(&team1), black_box(&team2), DEFAULT_SIMULATIONS, &mut rng))
    });
}

fn bench_summarize(c: &mut Criterion) {
    let (team1, team2) = create_score_history();
    let samples = ScoreSimulator::new(DEFAULT_SIMULATIONS, Some(42))
        .draw(&team1, &team2)
        .unwrap();

    c.bench_function("summarize_10000_draws", |b| {
        b.iter(|| summarize(black_box(&samples)))
    });
}

fn bench_over_under(c: &mut Criterion) {
    let (team1, team2) = create_score_history();
    let result = ScoreSimulator::new(DEFAULT_SIMULATIONS, Some(42))
        .run(&team1, &team2)
        .unwrap();

    c.bench_function("analyze_4_lines", |b| {
        b.iter(|| analyze(black_box(&result.totals), &[205, 215], &[200, 210]))
    });
}

fn bench_parlays(c: &mut Criterion) {
    let events: Vec<String> = (0..MAX_EVENTS).map(|i| format!("Game{}", i)).collect();

    c.bench_function("balanced_pairs_10_events", |b| {
        b.iter(|| generate_balanced_pairs(black_box(&events)))
    });
}

criterion_group!(
    benches,
    bench_simulate,
    bench_summarize,
    bench_over_under,
    bench_parlays,
);
criterion_main!(benches);
