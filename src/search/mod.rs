//! Search algorithms under benchmark.
//!
//! Every function returns `Some(index)` of a matching element or `None`.
//! The binary variants expect `data` sorted ascending; passing unsorted data
//! is a caller bug and yields an unspecified (but non-panicking) answer.

pub mod binary;
pub mod linear;
pub mod variant;

pub use binary::{GOLDEN_RATIO_SPLIT, binary_search, golden_ratio_search};
pub use linear::{brute_force_search, sentinel_search};
pub use variant::AlgorithmVariant;
