// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Timing-noise primitive used for every [`Delay`](crate::PlanStep::Delay)
/// step.
///
/// Implementations must occupy the core for the requested time and must not
/// be removable by the optimizer. On hardware with a dedicated noise
/// source this is where it plugs in.
pub trait TimingNoise {
    /// Idles for `cycles` units of work.
    fn idle(&self, cycles: u32);
}

/// Non-elidable busy loop built on [`rampart_util::idle_cycles`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BusyWait;

impl TimingNoise for BusyWait {
    #[inline(always)]
    fn idle(&self, cycles: u32) {
        rampart_util::idle_cycles(cycles);
    }
}

impl<T: TimingNoise + ?Sized> TimingNoise for &T {
    fn idle(&self, cycles: u32) {
        (**self).idle(cycles)
    }
}
