use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;
use std::thread;
use std::time::Instant;

use super::aggregator::{ResultAggregator, ResultTable};
use super::reporting::save_text_report;
use super::types::{BenchmarkCell, BenchmarkConfig, BenchmarkReport, CellKey, validate_matrix};
use super::verification::ResultVerifier;
use crate::dataset::{self, Dataset};
use crate::error::{BenchError, Result};
use crate::search::AlgorithmVariant;

/// Length of one tick of the monotonic counter, in nanoseconds.
pub const TICK_NANOS: u128 = 100;

/// Repetitions per cell. Smaller datasets are repeated more so every cell
/// runs for a comparable wall time.
pub fn iterations_for_size(size: usize) -> usize {
    match size {
        0..=100 => 10_000,
        101..=1000 => 1_000,
        _ => 100,
    }
}

/// Run `variant` back to back `iterations` times over `data` and average the
/// elapsed time. The index reported is the one from the last iteration.
pub fn measure_cell(
    variant: AlgorithmVariant,
    target: i32,
    data: &[i32],
    iterations: usize,
) -> BenchmarkCell {
    let iterations = iterations.max(1);
    let mut found_index = None;

    let start = Instant::now();
    for _ in 0..iterations {
        found_index = black_box(variant.search(black_box(target), black_box(data)));
    }
    let elapsed = start.elapsed();

    let total_nanos = elapsed.as_nanos();
    BenchmarkCell {
        iterations,
        avg_duration_nanos: total_nanos as f64 / iterations as f64,
        avg_tick_count: (total_nanos / TICK_NANOS / iterations as u128) as u64,
        found_index,
    }
}

/// Measure every `(size, variant)` pair concurrently, one worker per pair,
/// and return the finished table once all workers have joined.
///
/// Datasets are only read. Variants that need sorted input sort a private
/// copy inside their own worker.
pub fn run(
    sizes: &[usize],
    variants: &[AlgorithmVariant],
    target: i32,
    datasets: &BTreeMap<usize, Dataset>,
) -> Result<ResultTable> {
    run_with(sizes, variants, target, datasets, measure_cell)
}

/// Scheduler body with the per-cell measurement supplied by the caller.
pub(crate) fn run_with<M>(
    sizes: &[usize],
    variants: &[AlgorithmVariant],
    target: i32,
    datasets: &BTreeMap<usize, Dataset>,
    measure: M,
) -> Result<ResultTable>
where
    M: Fn(AlgorithmVariant, i32, &[i32], usize) -> BenchmarkCell + Sync,
{
    validate_matrix(sizes, variants)?;
    let variants: Vec<AlgorithmVariant> = variants
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    for size in sizes {
        match datasets.get(size) {
            Some(dataset) if dataset.values().len() == *size => {}
            Some(dataset) => {
                return Err(BenchError::InvalidArgument(format!(
                    "dataset for size {} holds {} values",
                    size,
                    dataset.values().len()
                )));
            }
            None => {
                return Err(BenchError::InvalidArgument(format!(
                    "no dataset generated for size {}",
                    size
                )));
            }
        }
    }

    let aggregator = ResultAggregator::new();
    let run_start = Instant::now();
    tracing::info!(
        cells = sizes.len() * variants.len(),
        target,
        "starting benchmark workers"
    );

    let outcome = thread::scope(|scope| {
        let mut handles = vec![];

        for &size in sizes {
            // Presence checked above.
            let dataset = &datasets[&size];
            for &variant in &variants {
                let aggregator = &aggregator;
                let measure = &measure;
                let handle = scope.spawn(move || -> Result<()> {
                    let data: Cow<[i32]> = if variant.requires_sorted() {
                        Cow::Owned(dataset.sorted_copy())
                    } else {
                        Cow::Borrowed(dataset.values())
                    };

                    let iterations = iterations_for_size(size);
                    let cell = measure(variant, target, &data, iterations);
                    tracing::debug!(
                        size,
                        variant = variant.name(),
                        iterations,
                        avg_ns = cell.avg_duration_nanos,
                        found = ?cell.found_index,
                        "cell measured"
                    );

                    aggregator.set(CellKey::new(size, variant), cell)
                });
                handles.push(((size, variant), handle));
            }
        }

        let mut first_error = None;
        for ((size, variant), handle) in handles {
            let result = match handle.join() {
                Ok(result) => result,
                Err(payload) => Err(BenchError::WorkerPanicked(format!(
                    "size={} variant={}: {}",
                    size,
                    variant.name(),
                    panic_message(payload.as_ref())
                ))),
            };
            if let Err(e) = result {
                tracing::error!(size, variant = variant.name(), "worker failed: {}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    });
    outcome?;

    aggregator.seal()?;
    let table = aggregator.into_table()?;
    tracing::info!(
        cells = table.len(),
        elapsed_ms = run_start.elapsed().as_millis() as u64,
        "benchmark workers finished"
    );

    let expected = sizes.len() * variants.len();
    if table.len() != expected {
        return Err(BenchError::IncompleteRun {
            expected,
            actual: table.len(),
        });
    }

    Ok(table)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Drives a full run: dataset generation, the concurrent matrix, optional
/// verification and report persistence.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    verifiers: Vec<Box<dyn ResultVerifier + Send + Sync>>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            verifiers: Vec::new(),
        }
    }

    pub fn add_verifier(&mut self, verifier: Box<dyn ResultVerifier + Send + Sync>) {
        self.verifiers.push(verifier);
    }

    pub fn run_benchmarks(&self) -> Result<BenchmarkReport> {
        self.config.validate()?;
        let variants = self.config.distinct_variants();

        tracing::info!(
            sizes = ?self.config.sizes,
            variants = variants.len(),
            seed = self.config.seed,
            target = self.config.target,
            "generating datasets"
        );
        let datasets = dataset::generate(&self.config.sizes, self.config.seed)?;

        let table = run(&self.config.sizes, &variants, self.config.target, &datasets)?;

        let report = BenchmarkReport {
            target: self.config.target,
            seed: self.config.seed,
            sizes: self.config.sizes.clone(),
            variants,
            datasets,
            table,
        };

        if self.config.verify {
            if self.verifiers.is_empty() {
                tracing::warn!("verification requested but no verifier configured");
            }
            for verifier in &self.verifiers {
                verifier.verify(&report)?;
                tracing::info!(verifier = verifier.name(), "verification passed");
            }
        }

        if let Some(dir) = &self.config.report_dir {
            let path = save_text_report(dir, &report)?;
            tracing::info!(path = %path.display(), "report saved");
        }

        Ok(report)
    }
}
