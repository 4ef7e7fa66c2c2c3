use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use searchbench::benchmark::{
    MANUAL_PREVIEW_LIMIT, TICK_NANOS, ValuesPreview, format_found, print_benchmark_summary,
    results_to_csv, results_to_json,
};
use searchbench::{AlgorithmVariant, BenchError, BenchmarkConfig, Dataset, default_runner};

#[derive(Parser, Debug)]
#[command(name = "searchbench", version, about = "Search algorithm benchmark harness")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every selected algorithm on every dataset size
    Compare(CompareArgs),
    /// Run one algorithm once on one generated dataset
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Value to search for
    #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
    target: i32,

    /// Comma separated dataset sizes
    #[arg(short, long, value_delimiter = ',', default_values_t = [10, 100, 1000, 10000])]
    sizes: Vec<usize>,

    /// Seed shared by every dataset
    #[arg(long, default_value_t = 8)]
    seed: u64,

    /// Comma separated variants: brute, sentinel, binary, golden
    #[arg(long, value_delimiter = ',', default_values = ["brute", "sentinel", "binary", "golden"])]
    variants: Vec<String>,

    /// Directory to write a timestamped text report into
    #[arg(long)]
    save_report: Option<PathBuf>,

    /// Print the result table as CSV
    #[arg(long)]
    csv: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Skip post-run verification
    #[arg(long)]
    no_verify: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Value to search for
    #[arg(short, long, allow_negative_numbers = true)]
    target: i32,

    /// Dataset size
    #[arg(short, long, default_value_t = 10)]
    size: usize,

    /// Variant: brute, sentinel, binary, golden
    #[arg(short, long, default_value = "brute")]
    algorithm: String,

    /// Dataset seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_variants(names: &[String]) -> Result<Vec<AlgorithmVariant>, BenchError> {
    names.iter().map(|n| n.parse()).collect()
}

fn compare(args: CompareArgs) -> Result<(), BenchError> {
    let config = BenchmarkConfig {
        sizes: args.sizes,
        variants: parse_variants(&args.variants)?,
        target: args.target,
        seed: args.seed,
        verify: !args.no_verify,
        report_dir: args.save_report,
    };

    let report = default_runner(config).run_benchmarks()?;

    if args.json {
        println!("{}", results_to_json(&report)?);
    } else if args.csv {
        print!("{}", results_to_csv(&report.table));
    } else {
        print_benchmark_summary(&report);
    }
    Ok(())
}

fn search(args: SearchArgs) -> Result<(), BenchError> {
    let variant: AlgorithmVariant = args.algorithm.parse()?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let dataset = Dataset::generate(args.size, seed)?;
    tracing::info!(size = args.size, seed, "generated dataset");

    println!("Generated array ({} elements):", args.size);
    println!(
        "   {}",
        ValuesPreview {
            values: dataset.values(),
            limit: MANUAL_PREVIEW_LIMIT,
            highlight: None,
        }
    );

    let data = if variant.requires_sorted() {
        let sorted = dataset.sorted_copy();
        println!("Array has been sorted for {}.", variant.display_name());
        println!("Sorted array:");
        println!(
            "   {}",
            ValuesPreview {
                values: &sorted,
                limit: MANUAL_PREVIEW_LIMIT,
                highlight: None,
            }
        );
        sorted
    } else {
        dataset.values().to_vec()
    };

    let start = Instant::now();
    let found = variant.search(args.target, &data);
    let elapsed = start.elapsed();

    println!("{}", "-".repeat(43));
    match found {
        Some(index) => {
            println!("{}", format_found(found));
            if variant.requires_sorted() {
                println!("   Value at this position: {}", data[index]);
            }
        }
        None => println!("There is no such element in the array"),
    }
    println!("Execution time: {:.6} ms", elapsed.as_secs_f64() * 1000.0);
    println!("Execution time: {} ticks", elapsed.as_nanos() / TICK_NANOS);
    println!("{}", "-".repeat(43));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Compare(args) => compare(args)?,
        Command::Search(args) => search(args)?,
    }
    Ok(())
}
