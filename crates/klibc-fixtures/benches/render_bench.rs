//! Fixture rendering benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use klibc_fixtures::routines::build_all;
use klibc_fixtures::{DEFAULT_SEED, Routine, routines, verify_all};

fn bench_render_each(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for routine in Routine::ALL {
        let Ok(fixture) = routines::build(routine, DEFAULT_SEED) else {
            continue;
        };
        group.throughput(Throughput::Bytes(fixture.to_c_source().len() as u64));
        group.bench_with_input(
            BenchmarkId::new("to_c_source", routine.symbol()),
            &fixture,
            |b, f| b.iter(|| black_box(f.to_c_source())),
        );
    }
    group.finish();
}

fn bench_build_all(c: &mut Criterion) {
    c.bench_function("build_all", |b| {
        b.iter(|| black_box(build_all(black_box(DEFAULT_SEED))));
    });
}

fn bench_verify_all(c: &mut Criterion) {
    let Ok(fixtures) = build_all(DEFAULT_SEED) else {
        return;
    };
    c.bench_function("verify_all", |b| b.iter(|| black_box(verify_all(&fixtures))));
}

criterion_group!(benches, bench_render_each, bench_build_all, bench_verify_all);
criterion_main!(benches);
