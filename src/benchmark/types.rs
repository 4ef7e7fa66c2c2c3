use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::Serialize;

use super::aggregator::ResultTable;
use crate::dataset::{DEFAULT_SEED, Dataset};
use crate::error::{BenchError, Result};
use crate::search::AlgorithmVariant;

pub const DEFAULT_SIZES: [usize; 4] = [10, 100, 1000, 10000];
pub const DEFAULT_TARGET: i32 = 50;

/// Unique key of one measurement in the matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellKey {
    pub size: usize,
    pub variant: AlgorithmVariant,
}

impl CellKey {
    pub fn new(size: usize, variant: AlgorithmVariant) -> Self {
        Self { size, variant }
    }
}

/// Averaged measurement for one `(size, variant)` pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkCell {
    pub iterations: usize,
    pub avg_duration_nanos: f64,
    pub avg_tick_count: u64,
    pub found_index: Option<usize>,
}

impl BenchmarkCell {
    pub fn avg_duration_ms(&self) -> f64 {
        self.avg_duration_nanos / 1_000_000.0
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub variants: Vec<AlgorithmVariant>,
    pub target: i32,
    pub seed: u64,
    pub verify: bool,
    pub report_dir: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            variants: AlgorithmVariant::ALL.to_vec(),
            target: DEFAULT_TARGET,
            seed: DEFAULT_SEED,
            verify: true,
            report_dir: None,
        }
    }
}

impl BenchmarkConfig {
    /// Reject configurations that cannot produce a complete table.
    pub fn validate(&self) -> Result<()> {
        validate_matrix(&self.sizes, &self.variants)
    }

    /// Variants with duplicates removed, in declaration order.
    pub fn distinct_variants(&self) -> Vec<AlgorithmVariant> {
        self.variants
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Check the size list and variant set that span the benchmark matrix.
pub fn validate_matrix(sizes: &[usize], variants: &[AlgorithmVariant]) -> Result<()> {
    if sizes.is_empty() {
        return Err(BenchError::InvalidArgument(
            "at least one dataset size is required".to_string(),
        ));
    }
    if let Some(size) = sizes.iter().find(|&&s| s == 0) {
        return Err(BenchError::InvalidArgument(format!(
            "dataset size must be positive, got {}",
            size
        )));
    }
    let mut seen = BTreeSet::new();
    for size in sizes {
        if !seen.insert(size) {
            return Err(BenchError::InvalidArgument(format!(
                "dataset size {} listed more than once",
                size
            )));
        }
    }
    if variants.is_empty() {
        return Err(BenchError::InvalidArgument(
            "at least one algorithm variant is required".to_string(),
        ));
    }
    Ok(())
}

/// Everything a run produced: the inputs it used and the finished table.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    pub target: i32,
    pub seed: u64,
    pub sizes: Vec<usize>,
    pub variants: Vec<AlgorithmVariant>,
    #[serde(skip)]
    pub datasets: BTreeMap<usize, Dataset>,
    pub table: ResultTable,
}
