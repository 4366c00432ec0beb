//! Spring curve benchmarks
//!
//! Building a curve and sampling one second of 120fps frames for each regime.

use blinc_spring::{SpringConfig, SpringSolver};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_build(c: &mut Criterion) {
    c.bench_function("spring_build", |b| {
        b.iter(|| SpringSolver::build(black_box(SpringConfig::wobbly().with_to(100.0))))
    });
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_sample_120_frames");
    let configs = [
        ("underdamped", SpringConfig::wobbly()),
        ("critical", SpringConfig::molasses()),
        ("overdamped", SpringConfig::new(100.0, 50.0, 1.0)),
    ];

    for (name, config) in configs {
        let curve = SpringSolver::build(config.with_to(100.0));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for frame in 0..120 {
                    sum += curve.evaluate(black_box(frame as f64 * 8.333));
                }
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_sample);
criterion_main!(benches);
