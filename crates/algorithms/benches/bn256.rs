// Benchmarks for BN256 group operations and the pairing

use bnpair_algorithms::ec::bn256::{pair, pairing_check, random_g1, random_g2, Gt, G1, G2};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use num_bigint::BigUint;
use rand::{rngs::OsRng, RngCore};

/// Generate a random 256-bit scalar for benchmarking
fn random_scalar() -> BigUint {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

/// Benchmark scalar multiplication in each group
fn bench_scalar_mult(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256-scalar-mult");

    group.bench_function("g1-glv", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(G1::scalar_base_mult(&k)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("g2-double-and-add", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(G2::scalar_base_mult(&k)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("gt-exponentiation", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(Gt::scalar_base_mult(&k)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark the pairing and a two-pair check
fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256-pairing");
    group.sample_size(20);

    let (_, p) = random_g1(&mut OsRng).unwrap();
    let (_, q) = random_g2(&mut OsRng).unwrap();

    group.bench_function("pair", |b| b.iter(|| black_box(pair(&p, &q))));

    let a = [p, p.neg()];
    let bs = [q, q];
    group.bench_function("pairing-check-2", |b| {
        b.iter(|| black_box(pairing_check(&a, &bs)))
    });

    group.finish();
}

/// Benchmark the wire codec
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256-codec");
    let (_, p) = random_g1(&mut OsRng).unwrap();
    let (_, q) = random_g2(&mut OsRng).unwrap();
    let p_bytes = p.marshal();
    let q_bytes = q.marshal();

    group.bench_function("g1-unmarshal", |b| {
        b.iter(|| black_box(G1::unmarshal(&p_bytes).unwrap()))
    });
    group.bench_function("g2-unmarshal-with-subgroup-check", |b| {
        b.iter(|| black_box(G2::unmarshal(&q_bytes).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_mult, bench_pairing, bench_codec);
criterion_main!(benches);
