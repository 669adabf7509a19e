// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Doubles for exercising the fatal path in tests.

use core::cell::Cell;

use crate::counter::MonotonicCounter;
use crate::fault::{Fault, FaultResponse};

/// Panics with the fault kind instead of halting, so tests can observe the
/// fatal path with `#[should_panic]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicHalt;

impl FaultResponse for PanicHalt {
    fn halt(&self, fault: Fault) -> ! {
        panic!("integrity fault: {:?}", fault)
    }
}

/// Counter advancing by a fixed step on every reading.
pub struct SteppedCounter {
    next: Cell<u64>,
    step: u64,
}

impl SteppedCounter {
    /// First reading returns `start`, each later one `step` more.
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl MonotonicCounter for SteppedCounter {
    fn now(&self) -> u64 {
        let now = self.next.get();
        self.next.set(now.wrapping_add(self.step));
        now
    }
}
