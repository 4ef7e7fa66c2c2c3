pub mod aggregator;
pub mod reporting;
pub mod runner;
pub mod types;
pub mod verification;

pub use aggregator::{ResultAggregator, ResultTable};
pub use reporting::{
    ComparisonTable, DatasetPreview, MANUAL_PREVIEW_LIMIT, PerformanceAnalysis, TextReport,
    ValuesPreview, format_found, print_benchmark_summary, report_file_name, results_to_csv,
    results_to_json, save_text_report,
};
pub use runner::{BenchmarkRunner, TICK_NANOS, iterations_for_size, measure_cell, run};
pub use types::{
    BenchmarkCell, BenchmarkConfig, BenchmarkReport, CellKey, DEFAULT_SIZES, DEFAULT_TARGET,
    validate_matrix,
};
pub use verification::{CompletenessVerifier, FoundIndexVerifier, ResultVerifier};
