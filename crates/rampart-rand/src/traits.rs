// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for unpredictable random sources.
///
/// Every mask, re-mask, blinding value, shuffle and delay in the engine is
/// drawn through this trait. Implementations must never hand out a value
/// they handed out before on purpose: a source that cannot produce fresh
/// randomness has to fail with [`EntropyError::EntropyNotAvailable`].
///
/// Sources take `&self` so a single source can be shared by every stage of
/// one computation; stateful test doubles use interior mutability.
pub trait EntropySource {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source is
    /// exhausted or unavailable. Callers must propagate the error, never
    /// retry with a stale value.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Draws a uniformly random `u32`.
    fn next_u32(&self) -> Result<u32, EntropyError> {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes)?;
        let value = u32::from_le_bytes(bytes);
        bytes.fill(0);

        Ok(value)
    }

    /// Draws a uniformly random index in `[0, bound)`.
    ///
    /// Uses rejection sampling, so small bounds (3! share permutations,
    /// shuffle positions) carry no modulo bias.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `bound` is zero.
    fn next_below(&self, bound: u32) -> Result<u32, EntropyError> {
        debug_assert!(bound > 0, "bound must be non-zero");

        let bound = bound.max(1);
        let threshold = bound.wrapping_neg() % bound;

        loop {
            let r = self.next_u32()?;
            if r >= threshold {
                return Ok(r % bound);
            }
        }
    }

    /// Draws a uniformly random value in `[min, max]`.
    ///
    /// `min > max` is treated as the single value `min`; range validation
    /// belongs to the configuration layer.
    fn next_in_range(&self, min: u32, max: u32) -> Result<u32, EntropyError> {
        if max <= min {
            return Ok(min);
        }

        match (max - min).checked_add(1) {
            Some(span) => Ok(min + self.next_below(span)?),
            None => self.next_u32(),
        }
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
