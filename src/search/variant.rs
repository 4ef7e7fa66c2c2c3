use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{binary_search, brute_force_search, golden_ratio_search, sentinel_search};
use crate::error::BenchError;

/// Tag identifying one of the benchmarked search algorithms.
///
/// Declaration order is the order used for report rows and table keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlgorithmVariant {
    BruteForceLinear,
    SentinelLinear,
    BinarySearch,
    GoldenRatioBinarySearch,
}

impl AlgorithmVariant {
    pub const ALL: [AlgorithmVariant; 4] = [
        AlgorithmVariant::BruteForceLinear,
        AlgorithmVariant::SentinelLinear,
        AlgorithmVariant::BinarySearch,
        AlgorithmVariant::GoldenRatioBinarySearch,
    ];

    /// Whether the variant must be handed an ascending copy of the dataset.
    pub fn requires_sorted(&self) -> bool {
        matches!(
            self,
            AlgorithmVariant::BinarySearch | AlgorithmVariant::GoldenRatioBinarySearch
        )
    }

    /// Dispatch to the search function behind this tag.
    pub fn search(&self, target: i32, data: &[i32]) -> Option<usize> {
        match self {
            AlgorithmVariant::BruteForceLinear => brute_force_search(&target, data),
            AlgorithmVariant::SentinelLinear => sentinel_search(&target, data),
            AlgorithmVariant::BinarySearch => binary_search(&target, data),
            AlgorithmVariant::GoldenRatioBinarySearch => golden_ratio_search(&target, data),
        }
    }

    /// Short identifier accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmVariant::BruteForceLinear => "brute",
            AlgorithmVariant::SentinelLinear => "sentinel",
            AlgorithmVariant::BinarySearch => "binary",
            AlgorithmVariant::GoldenRatioBinarySearch => "golden",
        }
    }

    /// Human readable label used in report tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmVariant::BruteForceLinear => "Linear (brute force)",
            AlgorithmVariant::SentinelLinear => "Linear (barrier)",
            AlgorithmVariant::BinarySearch => "Binary search",
            AlgorithmVariant::GoldenRatioBinarySearch => "Binary (golden ratio)",
        }
    }
}

impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AlgorithmVariant {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute" | "linear" | "1" => Ok(AlgorithmVariant::BruteForceLinear),
            "sentinel" | "barrier" | "2" => Ok(AlgorithmVariant::SentinelLinear),
            "binary" | "3" => Ok(AlgorithmVariant::BinarySearch),
            "golden" | "4" => Ok(AlgorithmVariant::GoldenRatioBinarySearch),
            other => Err(BenchError::InvalidArgument(format!(
                "unknown algorithm variant '{}'",
                other
            ))),
        }
    }
}
