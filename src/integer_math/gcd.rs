// src/integer_math/gcd.rs

use num::Integer;

pub struct GCD;

impl GCD {
    /// Least common multiple of a slice, folded from 1.
    ///
    /// ```
    /// use eulertools::integer_math::gcd::GCD;
    ///
    /// assert_eq!(GCD::find_lcm(&[2, 4, 6, 8]), 24);
    /// ```
    pub fn find_lcm(numbers: &[u64]) -> u64 {
        numbers.iter().fold(1, |acc, &x| Self::find_lcm_pair(acc, x))
    }

    pub fn find_lcm_pair(left: u64, right: u64) -> u64 {
        left / Self::find_gcd_pair(left, right) * right
    }

    /// Greatest common divisor of a slice, folded from 0.
    pub fn find_gcd(numbers: &[u64]) -> u64 {
        numbers.iter().fold(0, |acc, &x| Self::find_gcd_pair(acc, x))
    }

    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        left.gcd(&right)
    }

    pub fn are_coprime(numbers: &[u64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}

/// Counts the integers in `[1, stop)` divisible by any of `divisors`.
///
/// Divisibility repeats with period lcm(divisors): one full cycle is
/// counted directly, multiplied by the number of whole cycles, and the
/// partial tail is scanned.
pub fn count_divisible_in_range(divisors: &[u64], stop: u64) -> u64 {
    assert!(stop >= 1, "range [1, stop) needs stop >= 1");
    assert!(!divisors.is_empty(), "at least one divisor is required");

    let has_divisor = |num: u64| divisors.iter().any(|&d| num % d == 0);

    let cycle = GCD::find_lcm(divisors);
    let frames = (stop - 1) / cycle;
    let per_frame = (1..=cycle).filter(|&k| has_divisor(k)).count() as u64;

    let mut total = frames * per_frame;
    for k in (frames * cycle + 1)..stop {
        if has_divisor(k) {
            total += 1;
        }
    }
    total
}
