// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Unprotected block transform run after the masked key stage of
/// [`Engine::byte_transform`](crate::Engine::byte_transform).
///
/// Only ever invoked on already-unmasked data.
pub trait BlockTransform {
    /// Block granularity. Inputs must be a multiple of this.
    const BLOCK_BYTES: usize;

    /// Smallest accepted input.
    const MIN_BYTES: usize = Self::BLOCK_BYTES;

    /// Transforms `data` in place. `data.len()` has been validated.
    fn transform(&self, data: &mut [u8]);
}
