// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_sched
//!
//! Decorrelates the physical order and timing of operations from their
//! logical order.
//!
//! A batch of independent masked operations is named by
//! [`OperationToken`]s. The [`Scheduler`] turns a batch into an
//! [`ExecutionPlan`]: the tokens in random order, each preceded by jitter
//! and a random number of dummy operations and followed by a random delay.
//! [`execute`] then walks the plan, dispatching to a [`PlanHandler`] and a
//! [`TimingNoise`] source.
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::SystemEntropySource;
//! use rampart_sched::{
//!     BusyWait, OperationToken, PlanHandler, Scheduler, SchedulerConfig, execute,
//! };
//!
//! struct Accumulate<'a> {
//!     values: &'a [u32],
//!     sum: u32,
//!     decoy: u32,
//! }
//!
//! impl PlanHandler for Accumulate<'_> {
//!     type Error = core::convert::Infallible;
//!
//!     fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error> {
//!         self.sum ^= self.values[token.index()];
//!         Ok(())
//!     }
//!
//!     fn decoy(&mut self, slot: OperationToken) -> Result<(), Self::Error> {
//!         self.decoy ^= self.values[slot.index()];
//!         Ok(())
//!     }
//! }
//!
//! let entropy = SystemEntropySource {};
//! let scheduler = Scheduler::new(&entropy, SchedulerConfig::default())
//!     .expect("Failed to Scheduler::new(..)");
//!
//! let values = [1, 2, 4, 8];
//! let mut handler = Accumulate { values: &values, sum: 0, decoy: 0 };
//!
//! let plan = scheduler.plan(values.len()).expect("Failed to plan(..)");
//! execute(plan, &mut handler, &BusyWait).expect("Failed to execute(..)");
//!
//! assert_eq!(handler.sum, 15);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod config;
mod error;
mod executor;
mod noise;
mod plan;
mod scheduler;

pub use config::{CycleRange, SchedulerConfig};
pub use error::ConfigError;
pub use executor::{PlanHandler, execute};
pub use noise::{BusyWait, TimingNoise};
pub use plan::{ExecutionPlan, OperationToken, PlanStep};
pub use scheduler::Scheduler;
