// src/integer_math/prime_sieve.rs
//
// Fixed-size Eratosthenes table. Built once at construction, read-only
// afterwards: composite marks in a bit table, the ascending prime list,
// and running prime sums for "sum of primes <= n" lookups.

use bitvec::prelude::*;
use log::debug;

pub struct PrimeSieve {
    limit: u64,
    composite: BitVec,
    primes: Vec<u64>,
    cumulative: Vec<u64>,
}

impl PrimeSieve {
    /// Sieves all primes in `[2, limit]`.
    pub fn new(limit: u64) -> Self {
        debug!("sieving primes up to {}", limit);

        let size = limit as usize + 1;
        let mut composite = bitvec![0; size];
        let mut primes: Vec<u64> = Vec::new();
        let mut cumulative: Vec<u64> = Vec::new();
        let mut running = 0u64;

        if limit >= 2 {
            primes.push(2);
            running = 2;
            cumulative.push(running);
        }
        // even candidates never get read, so their marks are irrelevant
        let mut i = 3usize;
        while i < size {
            if !composite[i] {
                primes.push(i as u64);
                running += i as u64;
                cumulative.push(running);
                let mut multiple = i + i;
                while multiple < size {
                    composite.set(multiple, true);
                    multiple += i;
                }
            }
            i += 2;
        }

        debug!("sieve holds {} primes", primes.len());
        PrimeSieve {
            limit,
            composite,
            primes,
            cumulative,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of primes in the table.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Primes in ascending order.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    /// Primality by table lookup (binary search over the prime list).
    pub fn contains(&self, num: u64) -> bool {
        assert!(num <= self.limit, "sieve covers only [0, {}]", self.limit);
        self.primes.binary_search(&num).is_ok()
    }

    /// Composite mark for `num`. 0 and 1 are neither prime nor composite.
    pub fn is_composite(&self, num: u64) -> bool {
        assert!(num <= self.limit, "sieve covers only [0, {}]", self.limit);
        if num < 4 {
            return false;
        }
        num % 2 == 0 || self.composite[num as usize]
    }

    /// Sum of all primes `<= n`.
    ///
    /// ```
    /// use eulertools::integer_math::prime_sieve::PrimeSieve;
    ///
    /// let sieve = PrimeSieve::new(100);
    /// assert_eq!(sieve.prime_sum(9), 17); // 2 + 3 + 5 + 7
    /// ```
    pub fn prime_sum(&self, n: u64) -> u64 {
        assert!(n <= self.limit, "prime sums are tabulated only up to {}", self.limit);
        let count = self.primes.partition_point(|&p| p <= n);
        if count == 0 {
            0
        } else {
            self.cumulative[count - 1]
        }
    }
}
