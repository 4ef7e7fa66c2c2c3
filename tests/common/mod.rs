#![allow(dead_code)]

use std::path::PathBuf;

use searchbench::{AlgorithmVariant, BenchmarkConfig};

pub fn test_dir() -> PathBuf {
    test_dir_with_name("test_runs")
}

pub fn test_dir_with_name(name: &str) -> PathBuf {
    let dir = PathBuf::from(format!("./{}", name));
    std::fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

/// Small matrix that finishes quickly in debug builds.
pub fn small_config(target: i32) -> BenchmarkConfig {
    BenchmarkConfig {
        sizes: vec![10, 100],
        variants: AlgorithmVariant::ALL.to_vec(),
        target,
        seed: 8,
        verify: true,
        report_dir: None,
    }
}
