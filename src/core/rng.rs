// src/core/rng.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random witness source for probabilistic primality rounds.
///
/// ChaCha8 seeded from the OS entropy source, with a short warm-up discard
/// so consecutive constructions do not share a stream prefix.
pub struct WitnessRng {
    rng: ChaCha8Rng,
}

impl WitnessRng {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let discard = rng.random_range(100..200);
        for _ in 0..discard {
            rng.next_u32();
        }
        WitnessRng { rng }
    }

    /// Uniform draw from `[lower, upper)`.
    pub fn next_in_range(&mut self, lower: u64, upper: u64) -> u64 {
        assert!(lower < upper, "witness range must be non-empty");
        self.rng.random_range(lower..upper)
    }

    /// Uniform draw from `[lower, upper]` by rejection sampling over the
    /// byte width of the interval.
    pub fn next_bigint(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        assert!(lower <= upper, "upper must be greater than or equal to lower");

        let delta = upper - lower;
        let width = delta.to_bytes_be().1.len();
        let mut buffer = vec![0u8; width];

        loop {
            self.rng.fill_bytes(&mut buffer);
            let candidate = BigInt::from_bytes_be(Sign::Plus, &buffer) + lower;
            if &candidate >= lower && &candidate <= upper {
                return candidate;
            }
        }
    }
}

impl Default for WitnessRng {
    fn default() -> Self {
        Self::new()
    }
}
