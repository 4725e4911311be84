use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqkit_rs::{compress, decode, encode, lotto_select, rand_select, rotate, slice, SamplingConfig};

/// Generate run-heavy data (every value repeated a few times)
fn generate_runs(size: usize) -> Vec<u8> {
    let pattern = "aaabccddddeffg";
    pattern.bytes().cycle().take(size).collect()
}

/// Generate low-repetition data with a simple LCG
fn generate_low_repetition(size: usize) -> Vec<u8> {
    let mut seed = 12345u64;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) as u8
        })
        .collect()
}

fn bench_run_length(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("run_length");

    for size in sizes.iter() {
        let runs = generate_runs(*size);
        let noise = generate_low_repetition(*size);

        group.bench_with_input(BenchmarkId::new("encode_runs", size), &runs, |b, data| {
            b.iter(|| black_box(encode(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("encode_noise", size), &noise, |b, data| {
            b.iter(|| black_box(encode(black_box(data))));
        });

        let encoded = encode(&runs);
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, data| {
            b.iter(|| black_box(decode(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("compress", size), &runs, |b, data| {
            b.iter(|| black_box(compress(black_box(data))));
        });
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("positional");

    for size in sizes.iter() {
        let data = generate_low_repetition(*size);
        let len = *size as i64;

        // Small left shift versus a shift past the halfway point
        group.bench_with_input(BenchmarkId::new("rotate_small", size), &data, |b, data| {
            b.iter(|| black_box(rotate(black_box(data), 3)));
        });

        group.bench_with_input(BenchmarkId::new("rotate_large", size), &data, |b, data| {
            b.iter(|| black_box(rotate(black_box(data), len - 3)));
        });

        group.bench_with_input(BenchmarkId::new("slice_negative", size), &data, |b, data| {
            b.iter(|| black_box(slice(black_box(data), -(len / 2), -1)));
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let sizes = [100, 1_000, 5_000];
    let mut group = c.benchmark_group("sampling");

    for size in sizes.iter() {
        let data: Vec<u32> = (0..*size as u32).collect();
        let n = (*size / 2) as i64;

        group.bench_with_input(BenchmarkId::new("rand_select_half", size), &data, |b, data| {
            let mut rng = SamplingConfig::seeded(42).rng();
            b.iter(|| black_box(rand_select(black_box(data), n, &mut rng)));
        });

        group.bench_with_input(BenchmarkId::new("lotto_select", size), size, |b, size| {
            let mut rng = SamplingConfig::seeded(42).rng();
            b.iter(|| black_box(lotto_select(*size as i64, 49, &mut rng)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_length, bench_positional, bench_sampling);
criterion_main!(benches);
