use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pvector::{Vector2, Vector2Like};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn generate_fixed_vectors(size: usize, seed: u64) -> Vec<Vector2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    let mut vectors = Vec::with_capacity(size);

    for _ in 0..size {
        vectors.push(Vector2::random_within_using(&mut rng, -1.0e3..=1.0e3));
    }
    vectors
}

fn bench_vector_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector2 Operations");

    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        let a = generate_fixed_vectors(size, 12345);
        let b = generate_fixed_vectors(size, 67890);

        group.bench_with_input(BenchmarkId::new("Add", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                let sum = a
                    .iter()
                    .zip(b.iter())
                    .fold(Vector2::default(), |acc, (x, y)| acc + (*x + *y));
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("Dot", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                let total: f64 = a.iter().zip(b.iter()).map(|(x, y)| *x * *y).sum();
                black_box(total)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Normalized", size),
            &a,
            |bench, vectors| {
                bench.iter(|| {
                    for v in vectors {
                        black_box(v.normalized());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ClampMagnitude", size),
            &a,
            |bench, vectors| {
                bench.iter(|| {
                    for v in vectors {
                        black_box(v.clamp_magnitude(100.0));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("AngleBetween", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    for (x, y) in a.iter().zip(b.iter()) {
                        let _ = black_box(x.angle_between(y));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_vector_operations);
criterion_main!(benches);
