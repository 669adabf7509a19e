// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::MonitorConfigError;

/// Inclusive window of counter ticks a protected run must take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterWindow {
    /// Fewest ticks accepted.
    pub min: u64,
    /// Most ticks accepted.
    pub max: u64,
}

impl CounterWindow {
    /// Creates a window.
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `elapsed` lies in the window.
    #[inline(always)]
    pub const fn contains(&self, elapsed: u64) -> bool {
        self.min <= elapsed && elapsed <= self.max
    }
}

/// Parameters of an [`IntegrityMonitor`](crate::IntegrityMonitor).
///
/// Defaults: 1000 iterations, 950_000..=1_050_000 counter ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Fixed number of loop iterations.
    pub iterations: u32,
    /// Expected counter delta over the whole run.
    pub window: CounterWindow,
}

impl MonitorConfig {
    /// Default iteration count.
    pub const DEFAULT_ITERATIONS: u32 = 1000;
    /// Default counter window.
    pub const DEFAULT_WINDOW: CounterWindow = CounterWindow::new(950_000, 1_050_000);

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// - [`MonitorConfigError::ZeroIterations`] if `iterations == 0`
    /// - [`MonitorConfigError::InvalidWindow`] if `window.min > window.max`
    pub fn validate(&self) -> Result<(), MonitorConfigError> {
        if self.iterations == 0 {
            return Err(MonitorConfigError::ZeroIterations);
        }

        if self.window.min > self.window.max {
            return Err(MonitorConfigError::InvalidWindow);
        }

        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            window: Self::DEFAULT_WINDOW,
        }
    }
}
