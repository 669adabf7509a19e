// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Free-running tick counter (a cycle counter on hardware).
pub trait MonotonicCounter {
    /// Current tick count. Wrapping is tolerated: elapsed time is taken
    /// with wrapping subtraction.
    fn now(&self) -> u64;
}

impl<C: MonotonicCounter + ?Sized> MonotonicCounter for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
