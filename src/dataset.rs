//! Reproducible integer datasets for the benchmark matrix.
//!
//! Each size gets its own generator seeded with the same value, so the first
//! `n` values of a larger dataset equal the whole dataset of size `n`.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::error::{BenchError, Result};

/// Inclusive lower bound of generated values.
pub const MIN_VALUE: i32 = 0;
/// Inclusive upper bound of generated values.
pub const MAX_VALUE: i32 = 100;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 8;

/// Immutable sequence of integers drawn uniformly from `[MIN_VALUE, MAX_VALUE]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub size: usize,
    pub seed: u64,
    values: Vec<i32>,
}

impl Dataset {
    /// Draw `size` values from a generator seeded with `seed`.
    pub fn generate(size: usize, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(BenchError::InvalidArgument(
                "dataset size must be positive".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let values = (0..size)
            .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect();

        Ok(Self { size, seed, values })
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Ascending copy for the variants that need sorted input.
    pub fn sorted_copy(&self) -> Vec<i32> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn contains(&self, target: i32) -> bool {
        self.values.contains(&target)
    }
}

/// Generate one dataset per requested size, all from the same seed.
pub fn generate(sizes: &[usize], seed: u64) -> Result<BTreeMap<usize, Dataset>> {
    if sizes.is_empty() {
        return Err(BenchError::InvalidArgument(
            "at least one dataset size is required".to_string(),
        ));
    }

    let mut datasets = BTreeMap::new();
    for &size in sizes {
        if datasets.contains_key(&size) {
            continue;
        }
        datasets.insert(size, Dataset::generate(size, seed)?);
        tracing::debug!(size, seed, "generated dataset");
    }

    Ok(datasets)
}
