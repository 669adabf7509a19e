// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart
//!
//! Side-channel hardened execution of small secret-dependent computations
//! on resource-constrained targets.
//!
//! A secret never exists unmasked outside a bounded instant: it is split
//! into Boolean shares ([`shares`]), operated on share by share, and only
//! the final result is recombined. The order and timing of the masked
//! operations are decorrelated from their logical order by the scheduler
//! ([`sched`]): shuffled batches, dummy operations, jitter and random
//! delays. Control-flow integrity of non-secret critical loops is watched
//! by [`guard`].
//!
//! ## Core Types
//!
//! - [`Engine`]: the four adapters (byte transform, ARX rounds, sort,
//!   compare), first- or second-order
//! - [`Secret`]: owned secret buffer, wiped on drop
//! - [`ArxProgram`]: quarter-round description for
//!   [`Engine::arx_rounds`]
//!
//! ## Traits
//!
//! - [`BlockTransform`]: unprotected transform run on the unmasked output
//! - [`ResultSink`]: receives each adapter's final output once
//!
//! ## Example
//!
//! ```rust
//! use rampart::{ArxProgram, Engine, EngineConfig, ResultSink, Secret};
//! use rampart_rand::SystemEntropySource;
//!
//! struct Collect(Vec<u8>);
//!
//! impl ResultSink for Collect {
//!     fn emit(&mut self, buffer: &[u8]) {
//!         self.0.extend_from_slice(buffer);
//!     }
//! }
//!
//! let entropy = SystemEntropySource {};
//! let engine = Engine::first_order(&entropy, EngineConfig::default())
//!     .expect("Failed to Engine::first_order(..)");
//!
//! let mut words = [0u32; 16];
//! words[..4].copy_from_slice(&[0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574]);
//! let state = Secret::from(&mut words);
//!
//! let mut sink = Collect(Vec::new());
//! engine
//!     .arx_rounds(&state, &ArxProgram::chacha(), 10, &mut sink)
//!     .expect("Failed to arx_rounds(..)");
//!
//! assert_eq!(sink.0.len(), 64);
//! ```
//!
//! ## Weak fallback
//!
//! Masked addition recombines its operands for the duration of the call;
//! see [`rampart_shares::masked_add`]. ARX rounds inherit this.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod arx;
mod config;
mod engine;
mod error;
mod secret;
mod sink;
mod transform;

pub mod support;

pub use arx::{ArxProgram, ArxStep, Lane};
pub use config::EngineConfig;
pub use engine::{ARX_STATE_WORDS, COLUMNS, DIAGONALS, Engine};
pub use error::AdapterError;
pub use secret::Secret;
pub use sink::ResultSink;
pub use transform::BlockTransform;

pub use rampart_guard as guard;
pub use rampart_rand as rand;
pub use rampart_sched as sched;
pub use rampart_shares as shares;
