use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use searchbench::{
    AlgorithmVariant, binary_search, brute_force_search, golden_ratio_search, sentinel_search,
};

#[test]
fn test_present_value_found_at_its_index() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let len = rng.random_range(1..200);
        // Distinct values so the index of each value is unique.
        let mut data: Vec<i32> = (0..len as i32).map(|i| i * 2).collect();
        data.shuffle(&mut rng);
        let mut sorted = data.clone();
        sorted.sort();

        let i = rng.random_range(0..len);
        assert_eq!(brute_force_search(&data[i], &data), Some(i));
        assert_eq!(sentinel_search(&data[i], &data), Some(i));
        assert_eq!(binary_search(&sorted[i], &sorted), Some(i));
        assert_eq!(golden_ratio_search(&sorted[i], &sorted), Some(i));
    }
}

#[test]
fn test_absent_value_never_found() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let len = rng.random_range(1..200);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(0..=50) * 2).collect();
        let target = rng.random_range(0..=50) * 2 + 1;

        for variant in [AlgorithmVariant::BruteForceLinear, AlgorithmVariant::SentinelLinear] {
            assert_eq!(variant.search(target, &data), None);
        }
        data.sort();
        for variant in [
            AlgorithmVariant::BinarySearch,
            AlgorithmVariant::GoldenRatioBinarySearch,
        ] {
            assert_eq!(variant.search(target, &data), None);
        }
    }
}

#[test]
fn test_linear_variants_agree_everywhere() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..1000 {
        let len = rng.random_range(0..100);
        let data: Vec<i32> = (0..len).map(|_| rng.random_range(0..=100)).collect();
        let target = rng.random_range(-5..=105);
        assert_eq!(
            brute_force_search(&target, &data),
            sentinel_search(&target, &data)
        );
    }
}

#[test]
fn test_binary_variants_agree_on_presence() {
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..1000 {
        let len = rng.random_range(1..300);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(0..=100)).collect();
        data.sort();
        let target = rng.random_range(-5..=105);
        assert_eq!(
            binary_search(&target, &data).is_some(),
            golden_ratio_search(&target, &data).is_some()
        );
    }
}
