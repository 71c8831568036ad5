// src/integer_math/primality.rs
//
// Primality testing at three scales:
// - below 13: hardcoded facts
// - small inputs: odd trial division through the divisor scan
// - everything else: Miller-Rabin, deterministic up to 2_152_302_898_747
//   by threshold-picked witness sets, probabilistic beyond (fixed bases
//   plus random witnesses)
// A sorted prime table, when supplied, short-circuits the witness
// machinery with table trial division and a 6k±1 residual scan.

use crate::core::rng::WitnessRng;
use crate::integer_math::divisors::Divisors;
use crate::integer_math::prime_sieve::PrimeSieve;
use lazy_static::lazy_static;
use num::integer::Roots;
use num::{BigInt, Integer, One, ToPrimitive};

// primality facts for 2..=12
const SMALL_PRIME_FACTS: [bool; 11] = [
    true, true, false, true, false, true, false, false, false, true, false,
];

// below this bound the odd divisor scan beats the witness machinery
const TRIAL_DIVISION_CUTOFF: u64 = 1 << 20;

// widest gap between a supplied prime table and sqrt(num) that the 6k±1
// scan closes before falling back to Miller-Rabin
const RESIDUAL_SCAN_WINDOW: u64 = 1 << 16;

// random witnesses added once num exceeds the deterministic thresholds
const DEFAULT_EXTRA_ROUNDS: usize = 5;

// fixed witness set for arbitrary-precision inputs
const BIGINT_CHECK_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

lazy_static! {
    // the first 20 primes, shared prescreen for every Miller-Rabin call
    static ref PRESCREEN_PRIMES: Vec<u64> = PrimeSieve::new(71).primes().to_vec();
}

pub struct Primality;

impl Primality {
    /// Verifies whether `num` is prime.
    ///
    /// # Examples
    /// ```
    /// use eulertools::integer_math::primality::Primality;
    ///
    /// assert!(Primality::is_prime(97));
    /// assert!(!Primality::is_prime(100));
    /// ```
    pub fn is_prime(num: u64) -> bool {
        if num < 13 {
            return num >= 2 && SMALL_PRIME_FACTS[(num - 2) as usize];
        }
        if num % 2 == 0 {
            return false;
        }
        if num < TRIAL_DIVISION_CUTOFF {
            // the first odd divisor decides
            return Divisors::with_step(num, 3, 2).next().is_none();
        }
        Self::miller_rabin(num, DEFAULT_EXTRA_ROUNDS)
    }

    /// Primality assisted by a sorted table of primes.
    ///
    /// Values inside the table are answered by binary search. Otherwise the
    /// table entries up to sqrt(num) are used for trial division; a short
    /// remaining gap up to sqrt(num) is closed by scanning 6k±1 candidates,
    /// while a gap wider than the residual window falls back to
    /// Miller-Rabin prescreened by the leading table entries.
    pub fn is_prime_with_table(num: u64, primes: &[u64]) -> bool {
        if num < 13 {
            return num >= 2 && SMALL_PRIME_FACTS[(num - 2) as usize];
        }
        if num % 2 == 0 || num % 3 == 0 {
            return false;
        }
        let last = match primes.last() {
            Some(&last) => last,
            None => return Self::miller_rabin(num, DEFAULT_EXTRA_ROUNDS),
        };
        if num <= last {
            return primes.binary_search(&num).is_ok();
        }
        let sqrt_num = num.sqrt();
        for &p in primes {
            if p > sqrt_num {
                return true;
            }
            if num % p == 0 {
                return false;
            }
        }
        // table exhausted below sqrt(num)
        if sqrt_num - last > RESIDUAL_SCAN_WINDOW {
            let prescreen = &primes[..primes.len().min(20)];
            return Self::miller_rabin_prescreened(num, prescreen, DEFAULT_EXTRA_ROUNDS);
        }
        let mut candidate = last + 1;
        while candidate % 6 != 1 && candidate % 6 != 5 {
            candidate += 1;
        }
        while candidate <= sqrt_num {
            if num % candidate == 0 {
                return false;
            }
            candidate += if candidate % 6 == 5 { 2 } else { 4 };
        }
        true
    }

    /// Miller-Rabin with magnitude-picked witness sets.
    ///
    /// Deterministic below 2_152_302_898_747. Beyond that, the fixed base
    /// set {2,3,5,7,11,13} is extended with `extra_rounds` random witnesses
    /// from [17, num-1) and the answer is probabilistic, an accepted
    /// accuracy/performance trade-off, not an oversight.
    pub fn miller_rabin(num: u64, extra_rounds: usize) -> bool {
        Self::miller_rabin_prescreened(num, &PRESCREEN_PRIMES, extra_rounds)
    }

    fn miller_rabin_prescreened(num: u64, primes: &[u64], extra_rounds: usize) -> bool {
        if num < 2 {
            return false;
        }
        if num < 13 {
            return SMALL_PRIME_FACTS[(num - 2) as usize];
        }
        let sqrt_num = num.sqrt();
        for &p in primes {
            if p > sqrt_num {
                return true;
            }
            if num % p == 0 {
                return false;
            }
        }

        // factor num - 1 as d * 2^s
        let mut d = num - 1;
        let mut s = 0u32;
        while d % 2 == 0 {
            d /= 2;
            s += 1;
        }

        let witnesses: Vec<u64> = if num < 1_373_653 {
            vec![2, 3]
        } else if num < 25_326_001 {
            vec![2, 3, 5]
        } else if num < 118_670_087_467 {
            // the lone strong pseudoprime to {2,3,5,7} below this bound
            if num == 3_215_031_751 {
                return false;
            }
            vec![2, 3, 5, 7]
        } else if num < 2_152_302_898_747 {
            vec![2, 3, 5, 7, 11]
        } else {
            let mut set = vec![2, 3, 5, 7, 11, 13];
            let mut rng = WitnessRng::new();
            for _ in 0..extra_rounds {
                set.push(rng.next_in_range(17, num - 1));
            }
            set
        };

        witnesses
            .iter()
            .all(|&a| Self::strong_probable_prime(num, a, d, s))
    }

    fn strong_probable_prime(num: u64, witness: u64, d: u64, s: u32) -> bool {
        let mut x = Self::pow_mod(witness, d, num);
        if x == 1 || x == num - 1 {
            return true;
        }
        for _ in 0..s {
            x = Self::mul_mod(x, x, num);
            if x == num - 1 {
                return true;
            }
        }
        false
    }

    fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
        ((a as u128 * b as u128) % modulus as u128) as u64
    }

    fn pow_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
        let mut result = 1u64;
        let mut base = base % modulus;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = Self::mul_mod(result, base, modulus);
            }
            base = Self::mul_mod(base, base, modulus);
            exponent >>= 1;
        }
        result
    }

    /// Probable-prime test for values beyond `u64`.
    ///
    /// Runs the fixed 15-base witness set plus `extra_rounds` random
    /// witnesses. Inputs that fit in `u64` are routed through
    /// [`Primality::miller_rabin`], where the small fixed bases are handled
    /// exactly.
    pub fn is_probable_prime(input: &BigInt, extra_rounds: usize) -> bool {
        if input < &BigInt::from(2) {
            return false;
        }
        if let Some(small) = input.to_u64() {
            return Self::miller_rabin(small, extra_rounds);
        }
        if input.is_even() {
            return false;
        }

        let n_minus_one: BigInt = input - 1;
        let mut d = n_minus_one.clone();
        let mut s = 0u32;
        while d.is_even() {
            d /= 2;
            s += 1;
        }

        let mut witnesses: Vec<BigInt> =
            BIGINT_CHECK_BASES.iter().map(|&a| BigInt::from(a)).collect();
        if extra_rounds > 0 {
            let mut rng = WitnessRng::new();
            let lower = BigInt::from(BIGINT_CHECK_BASES[BIGINT_CHECK_BASES.len() - 1] + 2);
            let upper: BigInt = input - 2;
            for _ in 0..extra_rounds {
                witnesses.push(rng.next_bigint(&lower, &upper));
            }
        }

        for a in &witnesses {
            let mut x = a.modpow(&d, input);
            if x.is_one() || x == n_minus_one {
                continue;
            }
            let mut r = 1;
            while r < s {
                x = x.modpow(&BigInt::from(2), input);
                if x.is_one() {
                    return false;
                }
                if x == n_minus_one {
                    break;
                }
                r += 1;
            }
            if x != n_minus_one {
                return false;
            }
        }
        true
    }
}
