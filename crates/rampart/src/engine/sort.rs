// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use rampart_rand::EntropySource;
use rampart_sched::{OperationToken, PlanHandler, TimingNoise, execute};
use rampart_shares::{Word, constant_time_blinded_swap};
use rampart_util::{opaque, rprintln};
use zeroize::{Zeroize, Zeroizing};

use crate::error::AdapterError;
use crate::sink::ResultSink;

use super::Engine;

/// Adjacent pairs compared by a data-oblivious insertion sort, in order.
///
/// For every `i` in `1..len`, element `i` is walked down with a
/// compare-and-swap at `(j - 1, j)` for `j` from `i` down to 1. The
/// sequence depends on `len` only.
pub(crate) fn insertion_pairs(len: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(len.saturating_sub(1) * len / 2);

    for i in 1..len {
        for j in (1..=i).rev() {
            pairs.push((j - 1, j));
        }
    }

    pairs
}

/// Runs the comparison for each token on blinded words.
struct BlindedCompareSwap<'s, W: Word> {
    data: &'s mut [W],
    pairs: &'s [(usize, usize)],
    blind: W,
    scratch: [W; 2],
}

impl<W: Word> PlanHandler for BlindedCompareSwap<'_, W> {
    type Error = Infallible;

    fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error> {
        let (low, high) = self.pairs[token.index()];
        let (left, right) = self.data.split_at_mut(high);

        constant_time_blinded_swap(&mut left[low], &mut right[0], self.blind);

        Ok(())
    }

    fn decoy(&mut self, _slot: OperationToken) -> Result<(), Self::Error> {
        let [a, b] = &mut self.scratch;
        constant_time_blinded_swap(a, b, self.blind);
        *a = opaque(a.rotate_left(1));

        Ok(())
    }
}

impl<E, T, const N: usize> Engine<'_, E, T, N>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    /// Secure constant-time sort, ascending.
    ///
    /// 1. draws a blinding word, a position shuffle and a padded plan
    /// 2. XOR-blinds every element and shuffles positions
    /// 3. runs the insertion-sort comparison sequence through the plan,
    ///    each comparison a branch-free blinded swap
    /// 4. removes the blind, then emits the sorted words once to `sink` as
    ///    `data.len() * W::BYTES` little-endian bytes
    ///
    /// `data` holds the sorted words on return. All randomness is drawn
    /// before `data` is touched, so a failure leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Entropy`] if randomness runs out. Nothing is
    /// emitted.
    pub fn sort<W, S>(&self, data: &mut [W], sink: &mut S) -> Result<(), AdapterError>
    where
        W: Word,
        S: ResultSink + ?Sized,
    {
        if data.len() > 1 {
            self.sort_blinded(data)?;
        }

        let mut output: Zeroizing<Vec<u8>> = Zeroizing::new(vec![0u8; data.len() * W::BYTES]);
        for (i, word) in data.iter().enumerate() {
            (*word).write_le(&mut output[i * W::BYTES..]);
        }

        sink.emit(&output[..]);

        Ok(())
    }

    fn sort_blinded<W: Word>(&self, data: &mut [W]) -> Result<(), AdapterError> {
        let scheduler = self.scheduler()?;
        let pairs = insertion_pairs(data.len());

        let blind = Zeroizing::new(W::random(self.entropy)?);
        let scratch = Zeroizing::new([W::random(self.entropy)?, W::random(self.entropy)?]);
        let order = scheduler.permutation(data.len())?;
        let plan = scheduler.plan_in_order(pairs.len())?;

        rprintln!(
            "[rampart] sort: {} elements, {} comparisons, {} steps",
            data.len(),
            pairs.len(),
            plan.len()
        );

        let mut blinded: Zeroizing<Vec<W>> = Zeroizing::new(
            order
                .iter()
                .map(|token| data[token.index()] ^ *blind)
                .collect(),
        );

        let mut handler = BlindedCompareSwap {
            data: &mut blinded[..],
            pairs: &pairs,
            blind: *blind,
            scratch: *scratch,
        };

        let Ok(()) = execute(plan, &mut handler, &self.noise);
        handler.scratch.zeroize();
        handler.blind.zeroize();

        for (out, value) in data.iter_mut().zip(blinded.iter()) {
            *out = *value ^ *blind;
        }

        Ok(())
    }
}
