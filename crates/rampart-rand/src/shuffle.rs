// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fisher-Yates shuffle driven directly by an [`EntropySource`].
//!
//! Every swap index is drawn from the entropy source with rejection
//! sampling, so all `n!` orderings are equiprobable as long as the source
//! is uniform.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Permutes a slice in place.
///
/// For `i` from the last index down to 1, swaps position `i` with a
/// uniformly chosen position in `[0, i]`.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the source fails. The
/// slice may then be partially permuted, but still holds every original
/// element exactly once.
///
/// # Example
///
/// ```rust
/// use rampart_rand::{SystemEntropySource, shuffle};
///
/// let mut order = [0usize, 1, 2, 3, 4, 5, 6, 7];
/// shuffle(&mut order, &SystemEntropySource {}).expect("Failed to shuffle(..)");
///
/// let mut sorted = order;
/// sorted.sort();
/// assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn shuffle<T, E>(data: &mut [T], entropy: &E) -> Result<(), EntropyError>
where
    E: EntropySource + ?Sized,
{
    if data.len() <= 1 {
        return Ok(());
    }

    debug_assert!(data.len() <= u32::MAX as usize, "slice too long to shuffle");

    for i in (1..data.len()).rev() {
        let j = entropy.next_below(i as u32 + 1)? as usize;
        data.swap(i, j);
    }

    Ok(())
}
