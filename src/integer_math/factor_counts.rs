// src/integer_math/factor_counts.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiset of prime factors: factor -> multiplicity, ordered by factor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorCounts(BTreeMap<u64, u32>);

impl FactorCounts {
    pub fn new() -> Self {
        FactorCounts(BTreeMap::new())
    }

    pub fn add(&mut self, factor: u64) {
        self.add_count(factor, 1);
    }

    fn add_count(&mut self, factor: u64, count: u32) {
        let entry = self.0.entry(factor).or_insert(0);
        *entry += count;
    }

    /// Merges another factorization into this one. Combining the counts of
    /// `a` and `b` gives the counts of `a * b`.
    pub fn combine(&mut self, other: &FactorCounts) {
        for (&factor, &count) in &other.0 {
            self.add_count(factor, count);
        }
    }

    /// (factor, power) pairs in ascending factor order.
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&factor, &power)| (factor, power))
    }

    /// Multiplies the factorization back together.
    pub fn product(&self) -> u64 {
        self.0
            .iter()
            .fold(1u64, |acc, (&factor, &power)| acc * factor.pow(power))
    }

    pub fn format_as_factorization(&self) -> String {
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(factor, power)| format!("{}^{}", factor, power))
            .collect();
        factors.join(" * ")
    }
}
