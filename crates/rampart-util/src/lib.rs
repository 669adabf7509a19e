// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level helpers shared by the Rampart crates.
//!
//! Everything a countermeasure relies on that the optimizer would happily
//! delete lives here: the value barrier, the busy-wait idle loop and the
//! zeroization probes used by tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod printer;

use core::hint::black_box;
use core::sync::atomic::{Ordering, compiler_fence};

/// Passes a value through an optimization barrier.
///
/// The compiler must assume the returned value is unrelated to the input,
/// so redundant checks, dummy computations and decoy reads built on it are
/// neither folded nor removed.
#[inline(always)]
pub fn opaque<T>(value: T) -> T {
    black_box(value)
}

/// Burns `cycles` iterations of a non-elidable busy loop.
///
/// This is the timing-noise primitive behind every delay in Rampart. It
/// occupies the core; it never yields to a scheduler.
///
/// # Example
///
/// ```
/// use rampart_util::idle_cycles;
///
/// idle_cycles(60);
/// ```
#[inline(never)]
pub fn idle_cycles(cycles: u32) {
    let mut remaining = black_box(cycles);

    while black_box(remaining) != 0 {
        core::hint::spin_loop();
        remaining -= 1;
    }

    compiler_fence(Ordering::SeqCst);
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The comparison time is constant regardless of where differences occur,
/// preventing timing side-channel attacks. Lengths are public and compared
/// up front.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| black_box(acc | (x ^ y)));

    black_box(diff) == 0
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 8]));
/// assert!(!is_slice_zeroized(&[0, 0, 1]));
/// ```
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|b| *b == 0)
}
