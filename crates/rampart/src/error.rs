// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::EntropyError;
use rampart_sched::ConfigError;
use thiserror::Error;

/// Errors returned by the [`Engine`](crate::Engine) adapters.
///
/// Every variant is reported before the caller's buffers are modified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdapterError {
    /// Input length is zero, below the transform minimum, or not a
    /// multiple of its block size.
    #[error("InvalidLength")]
    InvalidLength,

    /// The two operands of a comparison differ in length.
    #[error("LengthMismatch")]
    LengthMismatch,

    /// Fresh randomness was unavailable.
    #[error("Entropy: {0}")]
    Entropy(#[from] EntropyError),

    /// The engine configuration was rejected.
    #[error("Config: {0}")]
    Config(#[from] ConfigError),
}
