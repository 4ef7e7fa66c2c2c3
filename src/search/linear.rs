/// Scan from index 0 and return the first position holding `target`.
pub fn brute_force_search<T: PartialEq>(target: &T, data: &[T]) -> Option<usize> {
    for i in 0..data.len() {
        if data[i] == *target {
            return Some(i);
        }
    }
    None
}

/// Linear scan with a barrier: `target` is appended past the end so the loop
/// needs no length check. A hit on the barrier slot means "not present".
///
/// `Eq` is required: the barrier only stops the scan if equality is reflexive.
/// The copy into the guarded buffer is part of the measured cost, exactly like
/// the scan itself.
pub fn sentinel_search<T: Eq + Clone>(target: &T, data: &[T]) -> Option<usize> {
    let n = data.len();
    let mut guarded = Vec::with_capacity(n + 1);
    guarded.extend_from_slice(data);
    guarded.push(target.clone());

    let mut i = 0;
    // SAFETY: guarded[n] == target, so the loop stops at or before index n,
    // which is in bounds of the n + 1 element buffer.
    while unsafe { guarded.get_unchecked(i) } != target {
        i += 1;
    }

    if i < n { Some(i) } else { None }
}
