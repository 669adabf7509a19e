// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width unsigned words that can be shared.

use core::fmt::Debug;
use core::ops::{BitXor, BitXorAssign};

use rampart_rand::{EntropyError, EntropySource};
use subtle::{ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};
use zeroize::Zeroize;

/// A fixed-width unsigned integer usable as a share.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The constant-time bounds
/// come from `subtle`, so every comparison and selection on a `Word` is
/// branch-free.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + BitXor<Output = Self>
    + BitXorAssign
    + ConditionallySelectable
    + ConstantTimeEq
    + ConstantTimeGreater
    + Zeroize
    + 'static
{
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;
    /// All-zero word.
    const ZERO: Self;

    /// Addition modulo `2^BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Rotation to the left by `amount % BITS` bit positions.
    fn rotate_left(self, amount: u32) -> Self;

    /// Writes the word little-endian into `out[..BYTES]`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`Word::BYTES`].
    fn write_le(self, out: &mut [u8]);

    /// Draws a uniformly random word.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    fn random<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self, EntropyError>;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = core::mem::size_of::<$ty>();
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn rotate_left(self, amount: u32) -> Self {
                    <$ty>::rotate_left(self, amount % <$ty>::BITS)
                }

                #[inline(always)]
                fn write_le(self, out: &mut [u8]) {
                    out[..core::mem::size_of::<$ty>()].copy_from_slice(&self.to_le_bytes());
                }

                fn random<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self, EntropyError> {
                    let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                    entropy.fill_bytes(&mut bytes)?;

                    let value = <$ty>::from_le_bytes(bytes);
                    bytes.zeroize();

                    Ok(value)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
