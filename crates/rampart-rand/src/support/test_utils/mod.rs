// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy source doubles for tests.

mod deterministic_entropy_source;
mod mock_entropy_source;

pub use deterministic_entropy_source::DeterministicEntropySource;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
