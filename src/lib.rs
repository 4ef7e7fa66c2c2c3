// Search Algorithm Benchmark Harness
//
// Four textbook searches (brute-force linear, sentinel linear, binary,
// golden-ratio binary) measured over a matrix of dataset sizes. Every
// (size, variant) cell runs on its own worker thread and lands in a
// write-once result table.

#![allow(clippy::needless_range_loop)]

pub mod benchmark;
pub mod dataset;
pub mod error;
pub mod search;

pub use benchmark::{
    BenchmarkCell, BenchmarkConfig, BenchmarkReport, BenchmarkRunner, CellKey,
    CompletenessVerifier, FoundIndexVerifier, ResultAggregator, ResultTable, ResultVerifier,
};
pub use dataset::{Dataset, generate};
pub use error::{BenchError, Result};
pub use search::{
    AlgorithmVariant, binary_search, brute_force_search, golden_ratio_search, sentinel_search,
};

/// Runner preloaded with the completeness and found-index verifiers.
pub fn default_runner(config: BenchmarkConfig) -> BenchmarkRunner {
    let mut runner = BenchmarkRunner::new(config);
    runner.add_verifier(Box::new(CompletenessVerifier));
    runner.add_verifier(Box::new(FoundIndexVerifier));
    runner
}
