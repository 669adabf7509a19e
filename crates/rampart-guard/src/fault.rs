// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::hint::spin_loop;

/// Which guarded item failed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Start canary no longer holds [`START_CANARY`](crate::START_CANARY).
    StartCanary,
    /// Guard canary no longer holds [`GUARD_CANARY`](crate::GUARD_CANARY).
    GuardCanary,
    /// End canary does not hold [`END_CANARY`](crate::END_CANARY).
    EndCanary,
    /// The three redundant accumulators disagree.
    RedundancyMismatch,
    /// The loop did not run exactly the configured number of times.
    IterationCount,
    /// The running checksum differs from the recomputed one.
    Checksum,
    /// The elapsed counter delta fell outside the window.
    TimingWindow,
}

/// What happens once tampering is detected.
///
/// Implementations never return: handing control back, even with an error
/// code, gives an attacker a signal to tune the glitch against.
pub trait FaultResponse {
    /// Stops execution for good.
    fn halt(&self, fault: Fault) -> !;
}

/// Parks the core in a tight loop forever.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinHalt;

impl FaultResponse for SpinHalt {
    #[inline(never)]
    fn halt(&self, fault: Fault) -> ! {
        let _ = rampart_util::opaque(fault);

        loop {
            spin_loop();
        }
    }
}
