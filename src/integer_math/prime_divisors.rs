// src/integer_math/prime_divisors.rs
//
// Prime factorization by repeated smallest-factor extraction.
// Factor 2 is pulled out with direct modulo checks; odd factors are found
// by handing the remainder to the divisor scan with step 2, resuming from
// the last factor found.

use crate::integer_math::divisors::Divisors;
use crate::integer_math::factor_counts::FactorCounts;
use num::integer::gcd;

/// Yields the prime factors of `num` in non-decreasing order, with
/// duplicates for repeated factors.
///
/// `prime_divisors(1)` yields the sentinel `1`. That is not a prime factor,
/// but callers in the corpus this library serves rely on the non-empty
/// yield; the quirk is kept, do not "fix" it here.
///
/// # Examples
/// ```
/// use eulertools::integer_math::prime_divisors::prime_divisors;
///
/// let factors: Vec<u64> = prime_divisors(12).collect();
/// assert_eq!(factors, vec![2, 2, 3]);
/// ```
pub fn prime_divisors(num: u64) -> PrimeDivisorIter {
    assert!(num > 0, "prime divisors are defined for num > 0");
    PrimeDivisorIter {
        remaining: num,
        scan_from: 3,
        yield_sentinel: num == 1,
    }
}

pub struct PrimeDivisorIter {
    remaining: u64,
    scan_from: u64,
    yield_sentinel: bool,
}

impl Iterator for PrimeDivisorIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.yield_sentinel {
            self.yield_sentinel = false;
            return Some(1);
        }
        if self.remaining <= 1 {
            return None;
        }
        if self.remaining % 2 == 0 {
            self.remaining >>= 1;
            return Some(2);
        }
        // The scan resumes where the previous factor was found: anything
        // below it was already ruled out.
        let factor = Divisors::with_step(self.remaining, self.scan_from, 2)
            .next()
            // no divisor up to sqrt means the remainder itself is prime
            .unwrap_or(self.remaining);
        self.scan_from = factor;
        self.remaining /= factor;
        Some(factor)
    }
}

/// Collects the factorization of `num` as ordered (prime, power) counts.
///
/// ```
/// use eulertools::integer_math::prime_divisors::prime_factors_with_powers;
///
/// let counts = prime_factors_with_powers(12);
/// assert_eq!(counts.pairs().collect::<Vec<_>>(), vec![(2, 2), (3, 1)]);
/// ```
pub fn prime_factors_with_powers(num: u64) -> FactorCounts {
    let mut counts = FactorCounts::new();
    for factor in prime_divisors(num) {
        counts.add(factor);
    }
    counts
}

/// Factorization with the common power divided out.
///
/// Returns `(g, pairs)` where `g` is the gcd of all powers and `pairs` the
/// factorization with each power divided by `g`, so that
/// `num == product(pairs)^g`. E.g. 36 -> `(2, [(2, 1), (3, 1)])` and
/// 64 -> `(6, [(2, 1)])`.
pub fn normalized_prime_factors_with_powers(num: u64) -> (u32, Vec<(u64, u32)>) {
    let counts = prime_factors_with_powers(num);
    let common = counts
        .pairs()
        .map(|(_, power)| power)
        .fold(0, gcd);
    let pairs = counts
        .pairs()
        .map(|(prime, power)| (prime, power / common))
        .collect();
    (common, pairs)
}
