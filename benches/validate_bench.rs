//! Benchmarks for parameter validation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forge_paramcheck::{check_all, resolve, BuildRequest, IndexType, ParamSet};

fn ivf_pq_params() -> ParamSet {
    ParamSet::new()
        .with("metric_type", "L2")
        .with("nlist", "4096")
        .with("dim", "768")
        .with("m", "48")
        .with("index_mode", "GPU")
}

fn benchmark_validation(c: &mut Criterion) {
    let params = ivf_pq_params();

    c.bench_function("resolve_and_check_ivf_pq", |b| {
        b.iter(|| {
            let validator = resolve(black_box("IVF_PQ")).unwrap();
            black_box(validator.check_train(black_box(&params)))
        })
    });

    let validator = resolve("IVF_PQ").unwrap();
    c.bench_function("check_ivf_pq", |b| {
        b.iter(|| black_box(validator.check_train(black_box(&params))))
    });

    let hnsw = ParamSet::new()
        .with("metric_type", "IP")
        .with("efConstruction", "200")
        .with("M", "16");
    let requests: Vec<BuildRequest> = (0..10_000)
        .map(|i| {
            if i % 2 == 0 {
                BuildRequest::new(IndexType::IvfPq, params.clone())
            } else {
                BuildRequest::new(IndexType::Hnsw, hnsw.clone())
            }
        })
        .collect();

    c.bench_function("check_all_10k", |b| {
        b.iter(|| black_box(check_all(black_box(&requests))))
    });
}

criterion_group!(benches, benchmark_validation);
criterion_main!(benches);
