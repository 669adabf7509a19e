// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Boolean share sets.

use core::fmt;
use core::sync::atomic::{Ordering, compiler_fence};

use rampart_rand::{EntropyError, EntropySource};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::word::Word;

/// The six orderings of a 3-share set. Entry `p` maps new position `i` to
/// old position `p[i]`.
pub(crate) const SHARE_PERMUTATIONS_3: [[usize; 3]; 6] = [
    [0, 1, 2],
    [1, 0, 2],
    [2, 1, 0],
    [0, 2, 1],
    [1, 2, 0],
    [2, 0, 1],
];

/// A value split into `N` Boolean shares.
///
/// The XOR of all shares equals the represented value at all times. No
/// single share is correlated with that value: every share but the last is
/// drawn uniformly at random, and the last one is the value XOR the others.
///
/// Only 2-share (first-order) and 3-share (second-order) sets exist;
/// any other `N` fails to compile as soon as the set is constructed.
///
/// # Design
///
/// - **No `Clone`/`Copy`**: a share set is transformed, never duplicated
/// - **Redacted `Debug`**: shares never reach logs
/// - **Zeroized on drop**: all shares are overwritten when the set dies,
///   on success and error paths alike
///
/// # Example
///
/// ```rust
/// use rampart_rand::SystemEntropySource;
/// use rampart_shares::ShareSet;
///
/// let entropy = SystemEntropySource {};
///
/// let mut masked = ShareSet::<u8, 3>::mask(0x5A, &entropy).expect("Failed to mask(..)");
/// masked.remask(&entropy).expect("Failed to remask(..)");
///
/// assert_eq!(masked.unmask(), 0x5A);
/// ```
pub struct ShareSet<W: Word, const N: usize> {
    shares: [W; N],
}

impl<W: Word, const N: usize> ShareSet<W, N> {
    const SUPPORTED_ORDER: () = assert!(
        N == 2 || N == 3,
        "only 2-share and 3-share Boolean masking is supported"
    );

    /// Splits `value` into `N` fresh shares.
    ///
    /// Shares `0..N-1` are drawn from `entropy`; share `N-1` is `value`
    /// XOR all of them.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if fresh randomness
    /// cannot be drawn. No partially built set escapes.
    pub fn mask<E>(value: W, entropy: &E) -> Result<Self, EntropyError>
    where
        E: EntropySource + ?Sized,
    {
        let () = Self::SUPPORTED_ORDER;

        let mut set = Self {
            shares: [W::ZERO; N],
        };

        // Starts as the plaintext; wiped on every return, early ones included.
        let mut last = Zeroizing::new(value);
        for share in set.shares[..N - 1].iter_mut() {
            *share = W::random(entropy)?;
            *last ^= *share;
        }
        set.shares[N - 1] = *last;

        Ok(set)
    }

    /// Recombines the shares into the represented value.
    ///
    /// The returned plaintext is the one instant the secret exists in the
    /// clear; keep its lifetime short and wipe it after use.
    #[inline]
    pub fn unmask(&self) -> W {
        self.shares
            .iter()
            .fold(W::ZERO, |acc, share| rampart_util::opaque(acc ^ *share))
    }

    /// Re-randomizes the representation without changing the value.
    ///
    /// - 2 shares: XOR one fresh random word into both shares.
    /// - 3 shares: apply one of the 6 share orderings, chosen uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if fresh randomness
    /// cannot be drawn. The set is untouched in that case.
    pub fn remask<E>(&mut self, entropy: &E) -> Result<(), EntropyError>
    where
        E: EntropySource + ?Sized,
    {
        let () = Self::SUPPORTED_ORDER;

        if N == 2 {
            let mut r = W::random(entropy)?;
            for share in self.shares.iter_mut() {
                *share ^= r;
            }
            r.zeroize();
        } else {
            let index = entropy.next_below(SHARE_PERMUTATIONS_3.len() as u32)? as usize;
            self.permute(index);
        }

        compiler_fence(Ordering::SeqCst);

        Ok(())
    }

    /// Reorders a 3-share set by entry `index % 6` of the ordering table.
    ///
    /// Share order is free: the represented value never changes. No-op for
    /// 2-share sets.
    pub fn permute(&mut self, index: usize) {
        if N != 3 {
            return;
        }

        let permutation = &SHARE_PERMUTATIONS_3[index % SHARE_PERMUTATIONS_3.len()];
        let mut reordered = [W::ZERO; N];
        for (slot, &from) in reordered.iter_mut().zip(permutation.iter()) {
            *slot = self.shares[from];
        }

        self.shares = reordered;
        reordered.zeroize();
    }

    /// XORs another share set into this one, share by share.
    #[inline]
    pub fn xor_assign(&mut self, other: &Self) {
        for (share, rhs) in self.shares.iter_mut().zip(other.shares.iter()) {
            *share ^= *rhs;
        }
    }

    /// XORs a public operand into exactly one share (`share % N`).
    ///
    /// The other shares are left untouched.
    #[inline]
    pub fn xor_public(&mut self, share: usize, operand: W) {
        self.shares[share % N] ^= operand;
    }

    /// Rotates every share left by `amount` bit positions.
    ///
    /// Rotation distributes over XOR, so this rotates the represented
    /// value without recombining it.
    #[inline]
    pub fn rotate_left(&mut self, amount: u32) {
        for share in self.shares.iter_mut() {
            *share = share.rotate_left(amount);
        }
    }

    /// Returns share `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn share(&self, index: usize) -> W {
        self.shares[index]
    }

    /// Returns all shares.
    #[inline]
    pub fn shares(&self) -> &[W; N] {
        &self.shares
    }

    /// Number of shares.
    #[inline]
    pub const fn order(&self) -> usize {
        N
    }

    /// Returns `true` if every share is zero (the state after zeroization).
    pub fn is_zeroized(&self) -> bool {
        self.shares.iter().all(|share| *share == W::ZERO)
    }
}

impl<W: Word, const N: usize> fmt::Debug for ShareSet<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ShareSet<{}>]", N)
    }
}

impl<W: Word, const N: usize> Zeroize for ShareSet<W, N> {
    fn zeroize(&mut self) {
        self.shares.zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<W: Word, const N: usize> Drop for ShareSet<W, N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<W: Word, const N: usize> ZeroizeOnDrop for ShareSet<W, N> {}

/// First-order (2-share) masked value.
pub type Masked2<W> = ShareSet<W, 2>;

/// Second-order (3-share) masked value.
pub type Masked3<W> = ShareSet<W, 3>;
