//! Benchmark for full-stream generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twingen::generator::{GeneratorConfig, GraphGenerator};

fn bench_generate(c: &mut Criterion) {
    // 511 nodes + 510 edges
    c.bench_function("generate_depth8_fanout2", |b| {
        b.iter(|| {
            let config = GeneratorConfig::new(8, 2, "contains");
            let generator = GraphGenerator::new(config).unwrap();
            black_box(generator.count())
        })
    });

    // Deep chain: 201 nodes
    c.bench_function("generate_chain_depth200", |b| {
        b.iter(|| {
            let config = GeneratorConfig::new(200, 1, "contains");
            let generator = GraphGenerator::new(config).unwrap();
            black_box(generator.count())
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
