use std::cmp::Ordering;

/// Fraction of the remaining range at which the golden-ratio variant probes.
pub const GOLDEN_RATIO_SPLIT: f64 = 0.618;

/// Classic binary search over an ascending slice, probing the midpoint.
pub fn binary_search<T: Ord>(target: &T, data: &[T]) -> Option<usize> {
    narrowing_search(target, data, |left, right| left + (right - left) / 2)
}

/// Binary search that probes at 61.8% of the remaining range instead of 50%.
/// Same contract and complexity class as [`binary_search`].
pub fn golden_ratio_search<T: Ord>(target: &T, data: &[T]) -> Option<usize> {
    narrowing_search(target, data, |left, right| {
        left + ((right - left) as f64 * GOLDEN_RATIO_SPLIT) as usize
    })
}

/// Shared narrowing loop over the inclusive window `[left, right]`.
/// `probe` must return an index inside that window.
fn narrowing_search<T, F>(target: &T, data: &[T], probe: F) -> Option<usize>
where
    T: Ord,
    F: Fn(usize, usize) -> usize,
{
    if data.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = data.len() - 1;

    while left <= right {
        let mid = probe(left, right);
        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_finds_every_distinct_element() {
        let data: Vec<i32> = (0..37).map(|i| i * 3).collect();
        for (i, v) in data.iter().enumerate() {
            assert_eq!(binary_search(v, &data), Some(i));
            assert_eq!(golden_ratio_search(v, &data), Some(i));
        }
    }

    #[test]
    fn test_absent_values() {
        let data = [2, 4, 6, 8, 10];
        for target in [-1, 0, 1, 3, 5, 7, 9, 11, 100] {
            assert_eq!(binary_search(&target, &data), None);
            assert_eq!(golden_ratio_search(&target, &data), None);
        }
        let empty: [i32; 0] = [];
        assert_eq!(binary_search(&1, &empty), None);
        assert_eq!(golden_ratio_search(&1, &empty), None);
    }

    #[test]
    fn test_golden_probe_position() {
        // First probe of a 10-element slice: 0 + floor(9 * 0.618) = 5.
        let data: Vec<i32> = (0..10).collect();
        assert_eq!(golden_ratio_search(&5, &data), Some(5));
        // Midpoint probe: 0 + 9 / 2 = 4.
        assert_eq!(binary_search(&4, &data), Some(4));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(binary_search(&50, &[50]), Some(0));
        assert_eq!(golden_ratio_search(&50, &[50]), Some(0));
        assert_eq!(binary_search(&49, &[50]), None);
        assert_eq!(golden_ratio_search(&51, &[50]), None);
    }

    #[test]
    fn test_presence_agrees_on_sorted_data_with_duplicates() {
        let mut rng = StdRng::seed_from_u64(0x60_1d);
        for _ in 0..500 {
            let len = rng.random_range(1..80);
            let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(0..=15)).collect();
            data.sort();
            let target = rng.random_range(-1..=16);

            let expected = data.contains(&target);
            let classic = binary_search(&target, &data);
            let golden = golden_ratio_search(&target, &data);

            assert_eq!(classic.is_some(), expected);
            assert_eq!(golden.is_some(), expected);
            if let Some(i) = classic {
                assert_eq!(data[i], target);
            }
            if let Some(i) = golden {
                assert_eq!(data[i], target);
            }
        }
    }
}
