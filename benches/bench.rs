use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delaunay_dungeon::{generate, triangulate, GeneratorBuilder, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate 80x100", |b| {
        b.iter(|| generate(black_box(80), black_box(100), 4, 30, 7))
    });

    let generator = GeneratorBuilder::new(400, 400)
        .spacing(6)
        .max_points(300)
        .seed(7)
        .build()
        .unwrap();
    c.bench_function("generate 400x400", |b| b.iter(|| generator.generate()));
}

fn bench_triangulate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let points = (0..1000)
        .map(|_| Point::new(rng.gen_range(0.0..800.), rng.gen_range(0.0..800.)))
        .collect::<Vec<_>>();

    c.bench_function("triangulate 1000", |b| {
        b.iter(|| triangulate(black_box(&points), 800, 800, 1000 * 9))
    });
}

criterion_group!(benches, bench_generate, bench_triangulate);
criterion_main!(benches);
