// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Randomness for the Rampart masked execution engine.
//!
//! Every countermeasure in Rampart consumes fresh randomness: share masks,
//! re-masking values, blinding words, operation shuffles, dummy placement
//! and delay lengths. This crate defines the single seam all of them draw
//! from.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`shuffle`]: Fisher-Yates permutation driven by an entropy source
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for random sources, with uniform
//!   sampling helpers
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut mask = [0u8; 16];
//! entropy.fill_bytes(&mut mask).expect("Failed to fill_bytes(..)");
//!
//! let delay = entropy.next_in_range(5, 60).expect("Failed to next_in_range(..)");
//! assert!((5..=60).contains(&delay));
//! ```
//!
//! ## Exhaustion
//!
//! A source that cannot deliver fresh randomness returns
//! [`EntropyError::EntropyNotAvailable`]. Nothing in Rampart retries or
//! substitutes a fixed value: reused masks make two executions linkable.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod shuffle;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use shuffle::shuffle;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
