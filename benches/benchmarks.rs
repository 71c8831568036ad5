// benches/benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eulertools::integer_math::divisors::Divisors;
use eulertools::integer_math::partitions::partitions;
use eulertools::integer_math::primality::Primality;
use eulertools::integer_math::prime_divisors::prime_divisors;
use eulertools::integer_math::prime_sieve::PrimeSieve;

fn bench_divisors(c: &mut Criterion) {
    // 720720 is highly composite: the ordered path buffers the most
    c.bench_function("divisors_720720_unordered", |b| {
        b.iter(|| Divisors::of(black_box(720_720), 1).count())
    });
    c.bench_function("divisors_720720_ordered", |b| {
        b.iter(|| Divisors::ordered(black_box(720_720), 1).last())
    });
}

fn bench_prime_divisors(c: &mut Criterion) {
    c.bench_function("prime_divisors_600851475143", |b| {
        b.iter(|| prime_divisors(black_box(600_851_475_143)).count())
    });
}

fn bench_primality(c: &mut Criterion) {
    c.bench_function("is_prime_trial_division", |b| {
        b.iter(|| Primality::is_prime(black_box(1_000_003)))
    });
    c.bench_function("miller_rabin_m31", |b| {
        b.iter(|| Primality::miller_rabin(black_box(2_147_483_647), 0))
    });
    let table = PrimeSieve::new(10_000);
    c.bench_function("is_prime_with_table", |b| {
        b.iter(|| Primality::is_prime_with_table(black_box(99_999_989), table.primes()))
    });
}

fn bench_partitions(c: &mut Criterion) {
    c.bench_function("partitions_of_40", |b| {
        b.iter(|| partitions(black_box(40)).count())
    });
}

fn bench_prime_sieve(c: &mut Criterion) {
    c.bench_function("prime_sieve_1e6", |b| {
        b.iter(|| PrimeSieve::new(black_box(1_000_000)).len())
    });
}

criterion_group!(
    benches,
    bench_divisors,
    bench_prime_divisors,
    bench_primality,
    bench_partitions,
    bench_prime_sieve
);
criterion_main!(benches);
