//! Benchmark module for the scoring core.
//! Measures score calculation and averaging over synthetic participant sets.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reposcore::scoring::{calculate_averages, calculate_scores};
use reposcore::types::{ParticipantActivity, ParticipantMap};

/// Build a deterministic participant set of the given size.
fn synthetic_participants(count: usize) -> ParticipantMap {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|index| {
            let activity = ParticipantActivity {
                pr_enhancement: rng.gen_range(0..10),
                pr_bug: rng.gen_range(0..5),
                pr_documentation: rng.gen_range(0..15),
                pr_typo: rng.gen_range(0..15),
                issue_enhancement: rng.gen_range(0..10),
                issue_bug: rng.gen_range(0..10),
                issue_documentation: rng.gen_range(0..10),
            };
            (format!("user{index:05}"), activity)
        })
        .collect()
}

fn benchmark_calculate_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_scores");
    for &size in &[100usize, 1_000, 10_000] {
        let participants = synthetic_participants(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &participants,
            |b, participants| b.iter(|| calculate_scores(participants, None, 0)),
        );
    }
    group.finish();
}

fn benchmark_calculate_averages(c: &mut Criterion) {
    let participants = synthetic_participants(10_000);
    let scores = calculate_scores(&participants, None, 0);
    c.bench_function("calculate_averages/10000", |b| {
        b.iter(|| calculate_averages(&scores))
    });
}

criterion_group!(
    benches,
    benchmark_calculate_scores,
    benchmark_calculate_averages
);
criterion_main!(benches);
