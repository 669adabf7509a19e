// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive and statistical testing.

/// Heap's algorithm, visiting every ordering of `indices[..k]`.
fn heap_permute<F>(indices: &mut [usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == 1 {
        callback(indices);
        return;
    }

    heap_permute(indices, k - 1, callback);

    for i in 0..k - 1 {
        if k % 2 == 0 {
            indices.swap(i, k - 1);
        } else {
            indices.swap(0, k - 1);
        }
        heap_permute(indices, k - 1, callback);
    }
}

/// Calls `callback` once for every permutation of `[0, 1, ..., len-1]`.
///
/// # Example
/// ```
/// use rampart_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_perm| {
///     count += 1;
/// });
/// assert_eq!(count, 6);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }
    let mut indices: Vec<usize> = (0..len).collect();
    heap_permute(&mut indices, len, &mut callback);
}

/// `n!`.
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Lexicographic rank of a permutation of `[0, len)`, in `[0, len!)`.
///
/// Uses the Lehmer code, so counting ranks in a `len!`-sized histogram
/// tallies how often each ordering was produced.
///
/// # Example
/// ```
/// use rampart_test_utils::permutation_rank;
///
/// assert_eq!(permutation_rank(&[0, 1, 2]), 0);
/// assert_eq!(permutation_rank(&[2, 1, 0]), 5);
/// ```
///
/// # Panics
///
/// Panics if `perm` is not a permutation of `[0, perm.len())`.
pub fn permutation_rank(perm: &[usize]) -> usize {
    let n = perm.len();
    let mut seen = vec![false; n];
    let mut rank = 0;

    for (position, &value) in perm.iter().enumerate() {
        assert!(value < n && !seen[value], "not a permutation: {:?}", perm);

        let smaller_unused = (0..value).filter(|&v| !seen[v]).count();
        rank += smaller_unused * factorial(n - 1 - position);
        seen[value] = true;
    }

    rank
}

/// Returns `true` if every bucket lies within `tolerance` (a fraction,
/// e.g. `0.25`) of the mean bucket count.
pub fn within_tolerance(counts: &[usize], tolerance: f64) -> bool {
    if counts.is_empty() {
        return true;
    }

    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .all(|&count| ((count as f64) - expected).abs() <= expected * tolerance)
}
