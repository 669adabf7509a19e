// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Masked primitive ALU.
//!
//! Every operation here works on shares and keeps the XOR invariant of its
//! operands. The only exception is [`masked_add`], the documented weak
//! fallback: it briefly recombines both operands.

use rampart_rand::{EntropyError, EntropySource};
use subtle::{ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};
use zeroize::Zeroizing;

use crate::share_set::ShareSet;
use crate::word::Word;

/// `a ^= b`, share by share.
///
/// XOR is linear over Boolean shares, so the represented values combine
/// without either one being reconstructed.
#[inline]
pub fn masked_xor<W: Word, const N: usize>(a: &mut ShareSet<W, N>, b: &ShareSet<W, N>) {
    a.xor_assign(b);
}

/// `a ^= operand` for a public operand, applied to share `share % N` only.
#[inline]
pub fn masked_xor_public<W: Word, const N: usize>(
    a: &mut ShareSet<W, N>,
    share: usize,
    operand: W,
) {
    a.xor_public(share, operand);
}

/// `a <<<= amount`, with `amount` reduced modulo the word width.
#[inline]
pub fn masked_rotate_left<W: Word, const N: usize>(a: &mut ShareSet<W, N>, amount: u32) {
    a.rotate_left(amount % W::BITS);
}

/// Wrapping addition of two masked values.
///
/// **Weak fallback.** Addition does not distribute over XOR, and a proper
/// Boolean-to-arithmetic conversion is not provided. This recombines both
/// operands, adds the plaintexts and masks the sum afresh. The plaintexts
/// live in [`Zeroizing`] scratch and are wiped before returning, but they
/// do exist for the duration of the call.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the sum cannot be
/// re-masked. The scratch plaintexts are wiped on that path too.
pub fn masked_add<W, const N: usize, E>(
    a: &ShareSet<W, N>,
    b: &ShareSet<W, N>,
    entropy: &E,
) -> Result<ShareSet<W, N>, EntropyError>
where
    W: Word,
    E: EntropySource + ?Sized,
{
    let plain_a = Zeroizing::new(a.unmask());
    let plain_b = Zeroizing::new(b.unmask());
    let sum = Zeroizing::new(plain_a.wrapping_add(*plain_b));

    ShareSet::mask(*sum, entropy)
}

/// Constant-time equality of two words.
#[inline]
pub fn constant_time_compare<W: Word>(a: W, b: W) -> bool {
    bool::from(a.ct_eq(&b))
}

/// Constant-time `a > b` for unsigned words.
#[inline]
pub fn constant_time_greater<W: Word>(a: W, b: W) -> bool {
    bool::from(a.ct_gt(&b))
}

/// Swaps `a` and `b` iff `a > b`, without branching on either value.
///
/// Afterwards `a <= b`. This is the only comparison primitive the sorting
/// adapter uses.
#[inline]
pub fn constant_time_conditional_swap<W: Word>(a: &mut W, b: &mut W) {
    let swap = a.ct_gt(b);
    W::conditional_swap(a, b, swap);
}

/// Conditional swap on XOR-blinded operands.
///
/// `a` and `b` hold `x ^ blind` and `y ^ blind`. XOR blinding does not
/// preserve order, so the ordering is taken on the unblinded values inside
/// the branch-free primitive, and the blinded words are swapped iff
/// `x > y`. The unblinded copies are wiped before returning.
#[inline]
pub fn constant_time_blinded_swap<W: Word>(a: &mut W, b: &mut W, blind: W) {
    let x = Zeroizing::new(rampart_util::opaque(*a ^ blind));
    let y = Zeroizing::new(rampart_util::opaque(*b ^ blind));

    let swap = x.ct_gt(&*y);
    W::conditional_swap(a, b, swap);
}
