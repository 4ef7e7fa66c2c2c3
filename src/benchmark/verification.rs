use super::types::BenchmarkReport;
use crate::error::{BenchError, Result};

pub trait ResultVerifier {
    fn name(&self) -> &'static str;
    fn verify(&self, report: &BenchmarkReport) -> Result<()>;
}

/// Checks that every declared `(size, variant)` pair has exactly one cell.
pub struct CompletenessVerifier;

impl ResultVerifier for CompletenessVerifier {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn verify(&self, report: &BenchmarkReport) -> Result<()> {
        let expected = report.sizes.len() * report.variants.len();
        let missing = report.table.missing(&report.sizes, &report.variants);

        if !missing.is_empty() || report.table.len() != expected {
            for key in &missing {
                tracing::error!(size = key.size, variant = key.variant.name(), "missing cell");
            }
            return Err(BenchError::IncompleteRun {
                expected,
                actual: report.table.len(),
            });
        }
        Ok(())
    }
}

/// Cross-checks every recorded index against the data the variant searched,
/// and every absent result against the dataset contents.
pub struct FoundIndexVerifier;

impl ResultVerifier for FoundIndexVerifier {
    fn name(&self) -> &'static str {
        "found-index"
    }

    fn verify(&self, report: &BenchmarkReport) -> Result<()> {
        for (key, cell) in report.table.iter() {
            let dataset = report.datasets.get(&key.size).ok_or_else(|| {
                BenchError::Verification(format!("no dataset for size {}", key.size))
            })?;

            match cell.found_index {
                Some(index) => {
                    let sorted;
                    let data: &[i32] = if key.variant.requires_sorted() {
                        sorted = dataset.sorted_copy();
                        &sorted
                    } else {
                        dataset.values()
                    };
                    if data.get(index) != Some(&report.target) {
                        return Err(BenchError::Verification(format!(
                            "{} on size {} reported index {} which does not hold {}",
                            key.variant.name(),
                            key.size,
                            index,
                            report.target
                        )));
                    }
                }
                None if dataset.contains(report.target) => {
                    return Err(BenchError::Verification(format!(
                        "{} on size {} missed {} which is present",
                        key.variant.name(),
                        key.size,
                        report.target
                    )));
                }
                None => {}
            }
        }
        Ok(())
    }
}
