// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Canary sentinels and volatile cells.

use core::ptr::{read_volatile, write_volatile};

/// Written before the protected loop starts.
pub const START_CANARY: u32 = 0x1234_5678;

/// Written after the protected loop ends.
pub const END_CANARY: u32 = 0x8765_4321;

/// Checked on every iteration of the protected loop.
pub const GUARD_CANARY: u32 = 0xDEAD_BEEF;

/// A word that is only ever accessed with volatile loads and stores.
///
/// Redundant checks must really re-read memory; a glitch that corrupts the
/// word between two reads is then seen by the second one.
pub(crate) struct VolatileCell<T: Copy> {
    value: T,
}

impl<T: Copy> VolatileCell<T> {
    pub(crate) fn new(value: T) -> Self {
        let mut cell = Self { value };
        cell.set(value);
        cell
    }

    #[inline(always)]
    pub(crate) fn get(&self) -> T {
        // SAFETY: `self.value` is a valid, aligned and initialized `T`
        // borrowed from `self`.
        unsafe { read_volatile(&self.value) }
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, value: T) {
        // SAFETY: `self.value` is valid for writes and aligned since it is
        // borrowed mutably from `self`; `T: Copy` needs no drop.
        unsafe { write_volatile(&mut self.value, value) }
    }
}
