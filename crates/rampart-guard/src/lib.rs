// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_guard
//!
//! Fault-injection detection for non-secret critical computations.
//!
//! Masking defends secrets against observation; this crate defends control
//! flow against glitching. [`IntegrityMonitor`] brackets a fixed loop with
//! canaries, evaluates the computation redundantly, counts iterations,
//! keeps a running checksum and times the run against a
//! [`MonotonicCounter`]. Any inconsistency ends in
//! [`FaultResponse::halt`], never in an error value.
//!
//! ## Core Types
//!
//! - [`IntegrityMonitor`]: the protected loop and its validation
//! - [`MonitorConfig`]: iteration count and counter window
//! - [`SpinHalt`]: production fault response, parks the core
//!
//! ## Traits
//!
//! - [`MonotonicCounter`]: tick source for the timing window
//! - [`FaultResponse`]: non-returning reaction to a detected fault

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod canary;
mod config;
mod counter;
mod error;
mod fault;
mod monitor;
mod support;

pub use canary::{END_CANARY, GUARD_CANARY, START_CANARY};
pub use config::{CounterWindow, MonitorConfig};
pub use counter::MonotonicCounter;
pub use error::MonitorConfigError;
pub use fault::{Fault, FaultResponse, SpinHalt};
pub use monitor::{CHECKSUM_MULTIPLIER, IntegrityMonitor, expected_checksum};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
