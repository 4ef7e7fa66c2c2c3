//! Renders a finished [`BenchmarkReport`]. Nothing here touches timings
//! beyond formatting them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::aggregator::ResultTable;
use super::types::{BenchmarkCell, BenchmarkReport};
use crate::dataset::Dataset;
use crate::error::Result;

/// Values shown per dataset on the console.
pub const CONSOLE_PREVIEW_LIMIT: usize = 30;
/// Values shown per dataset in the saved report.
pub const FILE_PREVIEW_LIMIT: usize = 50;
/// Values shown by the one-shot manual search.
pub const MANUAL_PREVIEW_LIMIT: usize = 50;
/// Largest dataset whose sorted form is also previewed on the console.
pub const SORTED_PREVIEW_MAX_SIZE: usize = 100;

pub fn format_found(found_index: Option<usize>) -> String {
    match found_index {
        Some(i) => format!("Index: {}", i),
        None => "NOT FOUND".to_string(),
    }
}

fn format_cell(cell: &BenchmarkCell) -> String {
    format!(
        "{:.8} ms | {:>8} ticks | {}",
        cell.avg_duration_ms(),
        cell.avg_tick_count,
        format_found(cell.found_index)
    )
}

fn write_values(
    f: &mut fmt::Formatter,
    values: &[i32],
    limit: usize,
    highlight: Option<i32>,
) -> fmt::Result {
    for &v in values.iter().take(limit) {
        match highlight {
            Some(target) if v == target => write!(f, "[{}] ", v)?,
            _ => write!(f, "{} ", v)?,
        }
    }
    if values.len() > limit {
        write!(f, "... (showing first {} of {})", limit, values.len())?;
    }
    Ok(())
}

/// Leading values of a sequence, `highlight` occurrences bracketed.
pub struct ValuesPreview<'a> {
    pub values: &'a [i32],
    pub limit: usize,
    pub highlight: Option<i32>,
}

impl fmt::Display for ValuesPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_values(f, self.values, self.limit, self.highlight)
    }
}

fn presence(dataset: &Dataset, target: i32) -> &'static str {
    if dataset.contains(target) {
        "PRESENT"
    } else {
        "NOT PRESENT"
    }
}

/// Console preview of the generated datasets, target occurrences bracketed.
pub struct DatasetPreview<'a>(pub &'a BenchmarkReport);

impl fmt::Display for DatasetPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.0;
        writeln!(f, "GENERATED TEST ARRAYS")?;
        writeln!(f, "{}", "=".repeat(100))?;
        writeln!(f, "Searching for value: {}", report.target)?;
        writeln!(f)?;

        for (size, dataset) in &report.datasets {
            writeln!(f, "Array size: {} elements", size)?;
            write!(f, "   Original: ")?;
            write_values(f, dataset.values(), CONSOLE_PREVIEW_LIMIT, Some(report.target))?;
            writeln!(f)?;
            writeln!(
                f,
                "   Element {} is {} in array",
                report.target,
                presence(dataset, report.target)
            )?;

            if *size <= SORTED_PREVIEW_MAX_SIZE {
                write!(f, "   Sorted:   ")?;
                write_values(
                    f,
                    &dataset.sorted_copy(),
                    CONSOLE_PREVIEW_LIMIT,
                    Some(report.target),
                )?;
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "=".repeat(100))?;
        writeln!(f, "Note: elements in [brackets] are the searched value")
    }
}

/// Per-size comparison of every variant.
pub struct ComparisonTable<'a>(pub &'a BenchmarkReport);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.0;
        writeln!(f, "PERFORMANCE COMPARISON RESULTS")?;
        writeln!(f, "{}", "=".repeat(100))?;

        for &size in &report.sizes {
            writeln!(f)?;
            writeln!(f, "Array size: {} elements", size)?;
            writeln!(f, "{}", "-".repeat(100))?;
            for (key, cell) in report.table.row(size) {
                writeln!(f, "  {:<22} | {}", key.variant.display_name(), format_cell(cell))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(100))
    }
}

/// Fastest and slowest variant per size.
pub struct PerformanceAnalysis<'a>(pub &'a BenchmarkReport);

impl fmt::Display for PerformanceAnalysis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.0;
        writeln!(f, "=== PERFORMANCE ANALYSIS ===")?;

        for &size in &report.sizes {
            let row: Vec<_> = report.table.row(size).collect();
            let fastest = row
                .iter()
                .min_by(|a, b| a.1.avg_duration_nanos.total_cmp(&b.1.avg_duration_nanos));
            let slowest = row
                .iter()
                .max_by(|a, b| a.1.avg_duration_nanos.total_cmp(&b.1.avg_duration_nanos));

            if let (Some((fast_key, fast)), Some((slow_key, slow))) = (fastest, slowest) {
                write!(
                    f,
                    "Size {:>6}: fastest {} ({:.1} ns)",
                    size,
                    fast_key.variant.display_name(),
                    fast.avg_duration_nanos
                )?;
                if fast_key != slow_key && fast.avg_duration_nanos > 0.0 {
                    write!(
                        f,
                        ", {:.2}x faster than {}",
                        slow.avg_duration_nanos / fast.avg_duration_nanos,
                        slow_key.variant.display_name()
                    )?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Plain-text report persisted to disk.
pub struct TextReport<'a> {
    pub report: &'a BenchmarkReport,
    pub generated_at: DateTime<Local>,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        let rule = "=".repeat(64);

        writeln!(f, "{}", rule)?;
        writeln!(f, "Search Algorithms - Performance Comparison Report")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Seed: {}", report.seed)?;
        writeln!(f, "Searched value: {}", report.target)?;
        writeln!(f)?;

        writeln!(f, "{}", rule)?;
        writeln!(f, "GENERATED TEST ARRAYS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        for (size, dataset) in &report.datasets {
            writeln!(f, "Array size: {} elements", size)?;
            write!(f, "Original: ")?;
            write_values(f, dataset.values(), FILE_PREVIEW_LIMIT, None)?;
            writeln!(f)?;
            writeln!(
                f,
                "Element {} is {} in array",
                report.target,
                presence(dataset, report.target)
            )?;
            writeln!(f)?;
        }

        writeln!(f, "{}", rule)?;
        writeln!(f, "PERFORMANCE RESULTS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        for &size in &report.sizes {
            writeln!(f, "Array size: {} elements", size)?;
            writeln!(f, "{}", "-".repeat(64))?;
            for (key, cell) in report.table.row(size) {
                writeln!(f, "  {:<25} | {}", key.variant.display_name(), format_cell(cell))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", rule)?;
        writeln!(f, "ANALYSIS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        write!(f, "{}", PerformanceAnalysis(report))?;
        writeln!(f)?;
        writeln!(f, "Linear search algorithms:")?;
        writeln!(f, "  - Work on unsorted arrays")?;
        writeln!(f, "  - Time complexity: O(n)")?;
        writeln!(f, "  - The barrier variant drops the bounds check from the scan loop")?;
        writeln!(f)?;
        writeln!(f, "Binary search algorithms:")?;
        writeln!(f, "  - Require sorted arrays")?;
        writeln!(f, "  - Time complexity: O(log n)")?;
        writeln!(f, "  - The golden ratio variant probes at 0.618 of the range instead of 0.5")
    }
}

/// File name for a report generated at `at`.
pub fn report_file_name(at: &DateTime<Local>) -> String {
    format!("searchbench_report_{}.txt", at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Write the text report into `dir`, creating it when missing.
pub fn save_text_report(dir: impl AsRef<Path>, report: &BenchmarkReport) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let generated_at = Local::now();
    let path = dir.join(report_file_name(&generated_at));
    let contents = TextReport {
        report,
        generated_at,
    }
    .to_string();
    fs::write(&path, contents)?;

    Ok(path)
}

/// One CSV row per cell, ordered by size then variant.
pub fn results_to_csv(table: &ResultTable) -> String {
    let mut csv = String::from(
        "size,variant,iterations,avg_duration_ns,avg_duration_ms,avg_ticks,found_index\n",
    );
    for (key, cell) in table.iter() {
        csv.push_str(&format!(
            "{},{},{},{:.3},{:.8},{},{}\n",
            key.size,
            key.variant.name(),
            cell.iterations,
            cell.avg_duration_nanos,
            cell.avg_duration_ms(),
            cell.avg_tick_count,
            cell.found_index.map(|i| i.to_string()).unwrap_or_default()
        ));
    }
    csv
}

pub fn results_to_json(report: &BenchmarkReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Console summary: dataset previews, the comparison table and the analysis.
pub fn print_benchmark_summary(report: &BenchmarkReport) {
    println!("{}", DatasetPreview(report));
    println!("{}", ComparisonTable(report));
    println!("{}", PerformanceAnalysis(report));
}
