// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_shares
//!
//! Boolean masking for the Rampart engine.
//!
//! A secret word is never handled directly. It is split into 2 or 3
//! shares whose XOR is the value, and every computation on it goes
//! through the masked ALU, which transforms the shares without
//! reconstructing the secret.
//!
//! ## Core Types
//!
//! - [`ShareSet`]: a value held as `N` Boolean shares (`N` is 2 or 3)
//! - [`Word`]: the fixed-width integers that can be shared
//!
//! ## Masked ALU
//!
//! - [`masked_xor`], [`masked_xor_public`], [`masked_rotate_left`]:
//!   linear over shares, the secret never exists in the clear
//! - [`masked_add`]: weak fallback that briefly recombines its operands
//! - [`constant_time_compare`], [`constant_time_greater`],
//!   [`constant_time_conditional_swap`], [`constant_time_blinded_swap`]:
//!   branch-free comparisons on plain words
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::SystemEntropySource;
//! use rampart_shares::{ShareSet, masked_rotate_left, masked_xor};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut a = ShareSet::<u32, 2>::mask(0x0102_0304, &entropy).expect("Failed to mask(..)");
//! let b = ShareSet::<u32, 2>::mask(0x1000_0000, &entropy).expect("Failed to mask(..)");
//!
//! masked_xor(&mut a, &b);
//! masked_rotate_left(&mut a, 8);
//!
//! assert_eq!(a.unmask(), 0x1102_0304u32.rotate_left(8));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod alu;
mod share_set;
mod word;

pub use alu::{
    constant_time_blinded_swap, constant_time_compare, constant_time_conditional_swap,
    constant_time_greater, masked_add, masked_rotate_left, masked_xor, masked_xor_public,
};
pub use share_set::{Masked2, Masked3, ShareSet};
pub use word::Word;
