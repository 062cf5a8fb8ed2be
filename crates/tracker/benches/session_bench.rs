//! Full-frame benchmark: queue a burst of actions and run one update.
//!
//! Run with: cargo bench -p tracker --features bench --bench session_bench

use criterion::{criterion_group, criterion_main, Criterion};

use tracker::test_harness::TestSession;

fn bench_action_burst(c: &mut Criterion) {
    c.bench_function("frame_with_50_submissions", |b| {
        b.iter_batched(
            || {
                let mut session = TestSession::new().with_event("Bench cleanup", None);
                for i in 0..50 {
                    session.submit_waste("Plastic bottles", 27.5 + i as f64 * 0.01, 86.0);
                }
                session.join_event(1);
                session
            },
            |mut session| {
                session.tick(1);
                session
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_action_burst);
criterion_main!(benches);
