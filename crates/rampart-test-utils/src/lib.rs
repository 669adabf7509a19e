// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Rampart crates.
//!
//! Enumeration and ranking of permutations, used to check that shuffles and
//! plans cover every ordering, and that adapters behave identically on all
//! orderings of an input.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;

pub use permutations::{factorial, index_permutations, permutation_rank, within_tolerance};
