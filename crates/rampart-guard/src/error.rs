// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported when validating a [`MonitorConfig`](crate::MonitorConfig).
///
/// These are the only recoverable errors of this crate. Integrity
/// violations never produce an error value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MonitorConfigError {
    /// The protected loop must run at least once.
    #[error("ZeroIterations")]
    ZeroIterations,

    /// The counter window has `min > max`.
    #[error("InvalidWindow")]
    InvalidWindow,
}
