// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scheduler configuration.

use rampart_rand::{EntropyError, EntropySource};

use crate::error::ConfigError;

/// Inclusive range of idle cycles, `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRange {
    /// Shortest delay.
    pub min: u32,
    /// Longest delay.
    pub max: u32,
}

impl CycleRange {
    /// Creates a range. Validity is checked by the owning configuration.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= max`.
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Returns `true` if `cycles` lies in the range.
    pub const fn contains(&self, cycles: u32) -> bool {
        self.min <= cycles && cycles <= self.max
    }

    /// Draws a uniformly random cycle count from the range.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn sample<E>(&self, entropy: &E) -> Result<u32, EntropyError>
    where
        E: EntropySource + ?Sized,
    {
        entropy.next_in_range(self.min, self.max)
    }
}

/// Tunables for [`Scheduler`](crate::Scheduler).
///
/// Defaults: 5..=60 idle cycles after each real operation, 0..=3 cycles of
/// jitter before it, and up to 2 dummy operations ahead of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Delay inserted after every real operation.
    pub delay_cycles: CycleRange,
    /// Short jitter inserted before every real operation.
    pub jitter_cycles: CycleRange,
    /// Maximum number of dummy operations placed before a real one.
    pub max_dummies: u32,
}

impl SchedulerConfig {
    /// Default post-operation delay.
    pub const DEFAULT_DELAY_CYCLES: CycleRange = CycleRange::new(5, 60);
    /// Default pre-operation jitter.
    pub const DEFAULT_JITTER_CYCLES: CycleRange = CycleRange::new(0, 3);
    /// Default dummy bound.
    pub const DEFAULT_MAX_DUMMIES: u32 = 2;
    /// Largest accepted `max_dummies`. Plans grow linearly with it.
    pub const MAX_DUMMIES_LIMIT: u32 = 16;

    /// Checks both cycle ranges and the dummy bound.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDelayRange`] if `delay_cycles.min > delay_cycles.max`
    /// - [`ConfigError::InvalidJitterRange`] if `jitter_cycles.min > jitter_cycles.max`
    /// - [`ConfigError::InvalidDummyCount`] if `max_dummies > MAX_DUMMIES_LIMIT`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delay_cycles.is_valid() {
            return Err(ConfigError::InvalidDelayRange);
        }

        if !self.jitter_cycles.is_valid() {
            return Err(ConfigError::InvalidJitterRange);
        }

        if self.max_dummies > Self::MAX_DUMMIES_LIMIT {
            return Err(ConfigError::InvalidDummyCount);
        }

        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            delay_cycles: Self::DEFAULT_DELAY_CYCLES,
            jitter_cycles: Self::DEFAULT_JITTER_CYCLES,
            max_dummies: Self::DEFAULT_MAX_DUMMIES,
        }
    }
}
