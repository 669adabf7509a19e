// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_sched::{ConfigError, CycleRange, SchedulerConfig};

/// Tunables for [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plan padding used by every scheduled adapter.
    pub scheduler: SchedulerConfig,
    /// Delay appended to every comparison. Default 50..=199.
    pub compare_delay_cycles: CycleRange,
}

impl EngineConfig {
    /// Default comparison delay.
    pub const DEFAULT_COMPARE_DELAY_CYCLES: CycleRange = CycleRange::new(50, 199);

    /// Checks the scheduler configuration and the comparison delay range.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's [`ConfigError`], or
    /// [`ConfigError::InvalidDelayRange`] for an inverted comparison delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scheduler.validate()?;

        if !self.compare_delay_cycles.is_valid() {
            return Err(ConfigError::InvalidDelayRange);
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            compare_delay_cycles: Self::DEFAULT_COMPARE_DELAY_CYCLES,
        }
    }
}
