// src/main.rs

use env_logger::Env;
use log::info;

use eulertools::integer_math::partitions::partitions;
use eulertools::integer_math::primality::Primality;
use eulertools::integer_math::prime_divisors::prime_factors_with_powers;

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    // quick smoke run over the library surface
    let num: u64 = 600_851_475_143;
    let counts = prime_factors_with_powers(num);
    info!("{} -> {}", num, counts.format_as_factorization());

    let candidate: u64 = 1_000_000_007;
    info!("{} prime: {}", candidate, Primality::is_prime(candidate));

    let n: u64 = 40;
    info!("p({}) = {}", n, partitions(n).count());
}
