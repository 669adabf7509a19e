// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported when validating a scheduler configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A delay range has `min > max`.
    #[error("InvalidDelayRange")]
    InvalidDelayRange,

    /// The jitter range has `min > max`.
    #[error("InvalidJitterRange")]
    InvalidJitterRange,

    /// `max_dummies` exceeds [`SchedulerConfig::MAX_DUMMIES_LIMIT`](crate::SchedulerConfig::MAX_DUMMIES_LIMIT).
    #[error("InvalidDummyCount")]
    InvalidDummyCount,
}
