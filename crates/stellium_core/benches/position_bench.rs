use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stellium_core::{Body, Engine, FixedDeltaT};
use stellium_houses::{HouseSystem, houses};

fn position_bench(c: &mut Criterion) {
    let engine = Engine::new(FixedDeltaT::new(69.0));
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("position");
    group.bench_function("sun", |b| {
        b.iter(|| engine.position(Body::Sun, black_box(jd)))
    });
    group.bench_function("moon", |b| {
        b.iter(|| engine.position(Body::Moon, black_box(jd)))
    });
    group.bench_function("mars", |b| {
        b.iter(|| engine.position(Body::Mars, black_box(jd)))
    });
    group.bench_function("pluto", |b| {
        b.iter(|| engine.position(Body::Pluto, black_box(jd)))
    });
    group.bench_function("mean_node", |b| {
        b.iter(|| engine.position(Body::MeanNode, black_box(jd)))
    });
    group.bench_function("chiron", |b| {
        b.iter(|| engine.position(Body::Chiron, black_box(jd)))
    });
    group.finish();
}

fn houses_bench(c: &mut Criterion) {
    let dt = FixedDeltaT::new(69.0);
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("houses");
    group.bench_function("placidus", |b| {
        b.iter(|| houses(&dt, black_box(jd), 47.3769, 8.5417, HouseSystem::Placidus))
    });
    group.bench_function("whole_sign", |b| {
        b.iter(|| houses(&dt, black_box(jd), 47.3769, 8.5417, HouseSystem::WholeSign))
    });
    group.finish();
}

criterion_group!(benches, position_bench, houses_bench);
criterion_main!(benches);
