mod common;
use common::{small_config, test_dir_with_name};

use searchbench::benchmark::{iterations_for_size, run};
use searchbench::{AlgorithmVariant, BenchError, BenchmarkConfig, default_runner, generate};

#[test]
fn test_two_sizes_all_variants_yield_eight_cells() {
    let datasets = generate(&[10, 100], 8).unwrap();
    let table = run(&[10, 100], &AlgorithmVariant::ALL, 50, &datasets).unwrap();

    assert_eq!(table.len(), 8);
    assert!(table.missing(&[10, 100], &AlgorithmVariant::ALL).is_empty());
    for (key, cell) in table.iter() {
        assert!(cell.avg_duration_nanos >= 0.0);
        assert_eq!(cell.iterations, iterations_for_size(key.size));
    }
}

#[test]
fn test_found_indices_match_datasets() {
    let datasets = generate(&[10, 100, 1000], 8).unwrap();
    let table = run(&[10, 100, 1000], &AlgorithmVariant::ALL, 50, &datasets).unwrap();

    for (size, dataset) in &datasets {
        let brute = table.get(*size, AlgorithmVariant::BruteForceLinear).unwrap();
        let sentinel = table.get(*size, AlgorithmVariant::SentinelLinear).unwrap();
        assert_eq!(brute.found_index, sentinel.found_index);
        assert_eq!(
            brute.found_index,
            dataset.values().iter().position(|&v| v == 50)
        );

        let sorted = dataset.sorted_copy();
        for variant in [
            AlgorithmVariant::BinarySearch,
            AlgorithmVariant::GoldenRatioBinarySearch,
        ] {
            let cell = table.get(*size, variant).unwrap();
            assert_eq!(cell.found_index.is_some(), dataset.contains(50));
            if let Some(i) = cell.found_index {
                assert_eq!(sorted[i], 50);
            }
        }
    }
}

#[test]
fn test_shared_datasets_not_mutated() {
    let datasets = generate(&[100], 8).unwrap();
    let before = datasets.clone();
    run(&[100], &AlgorithmVariant::ALL, 50, &datasets).unwrap();
    assert_eq!(datasets, before);
}

#[test]
fn test_linear_slower_than_binary_on_large_miss() {
    // Absent target forces the linear scans over all 10000 values.
    let datasets = generate(&[10000], 8).unwrap();
    let table = run(&[10000], &AlgorithmVariant::ALL, -1, &datasets).unwrap();

    let binary = table.get(10000, AlgorithmVariant::BinarySearch).unwrap();
    for variant in [AlgorithmVariant::BruteForceLinear, AlgorithmVariant::SentinelLinear] {
        let linear = table.get(10000, variant).unwrap();
        assert_eq!(linear.found_index, None);
        assert!(linear.avg_duration_nanos >= binary.avg_duration_nanos);
    }
}

#[test]
fn test_single_value_dataset_all_variants_hit_zero() {
    let datasets = generate(&[1], 8).unwrap();
    let target = datasets[&1].values()[0];
    let table = run(&[1], &AlgorithmVariant::ALL, target, &datasets).unwrap();
    for variant in AlgorithmVariant::ALL {
        assert_eq!(table.get(1, variant).unwrap().found_index, Some(0));
    }
}

#[test]
fn test_zero_size_rejected_before_scheduling() {
    let config = BenchmarkConfig {
        sizes: vec![0],
        ..small_config(50)
    };
    let err = default_runner(config).run_benchmarks().unwrap_err();
    assert!(matches!(err, BenchError::InvalidArgument(_)));
}

#[test]
fn test_runner_verifies_and_reports() {
    let report = default_runner(small_config(50)).run_benchmarks().unwrap();
    assert_eq!(report.table.len(), 8);
    assert_eq!(report.datasets.len(), 2);
    assert_eq!(report.variants, AlgorithmVariant::ALL.to_vec());
}

#[test]
fn test_runner_saves_text_report() {
    let dir = test_dir_with_name("test_runs/reports");
    let config = BenchmarkConfig {
        report_dir: Some(dir.clone()),
        ..small_config(7)
    };
    default_runner(config).run_benchmarks().unwrap();

    let saved: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("searchbench_report_"))
        .collect();
    assert!(!saved.is_empty());

    let contents = std::fs::read_to_string(saved[0].path()).unwrap();
    assert!(contents.contains("PERFORMANCE RESULTS"));
    assert!(contents.contains("Searched value: "));
}

#[test]
fn test_repeated_runs_agree_on_indices() {
    let first = default_runner(small_config(42)).run_benchmarks().unwrap();
    let second = default_runner(small_config(42)).run_benchmarks().unwrap();
    for ((k1, c1), (k2, c2)) in first.table.iter().zip(second.table.iter()) {
        assert_eq!(k1, k2);
        assert_eq!(c1.found_index, c2.found_index);
    }
}
