// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Reproducible entropy source for tests.
///
/// Xorshift64 (shifts 13, 7, 17) seeded by the caller. Statistically
/// uniform enough for coverage tests and fully deterministic, so a failing
/// trial can be replayed from its seed.
///
/// **Never** use this outside test fixtures: its output is predictable.
pub struct DeterministicEntropySource {
    state: Cell<u64>,
}

impl DeterministicEntropySource {
    /// Creates a source from a seed. A zero seed is remapped to a fixed
    /// non-zero constant since xorshift64 has no zero state.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };

        Self {
            state: Cell::new(seed),
        }
    }

    fn next_u64(&self) -> u64 {
        let mut x = self.state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state.set(x);
        x
    }
}

impl EntropySource for DeterministicEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        Ok(())
    }
}
