// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use rampart_rand::{EntropyError, EntropySource};
use rampart_sched::{OperationToken, PlanHandler, TimingNoise, execute};
use rampart_shares::{ShareSet, Word, masked_xor_public};
use rampart_util::{opaque, rprintln};
use zeroize::{Zeroize, Zeroizing};

use crate::error::AdapterError;
use crate::secret::Secret;
use crate::sink::ResultSink;
use crate::transform::BlockTransform;

use super::Engine;

/// XORs every masked key byte into `data[i % len]`, one token per key byte.
struct KeyXor<'s, E: EntropySource + ?Sized, const N: usize> {
    key: &'s mut [ShareSet<u8, N>],
    data: &'s mut [u8],
    entropy: &'s E,
}

impl<E: EntropySource + ?Sized, const N: usize> KeyXor<'_, E, N> {
    /// First-order decoys read 7 bytes ahead, second-order ones 11.
    const DECOY_OFFSET: usize = if N == 2 { 7 } else { 11 };
}

impl<E: EntropySource + ?Sized, const N: usize> PlanHandler for KeyXor<'_, E, N> {
    type Error = EntropyError;

    fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error> {
        let position = token.index() % self.data.len();
        let masked = &mut self.key[token.index()];

        masked_xor_public(masked, 0, self.data[position]);
        masked.remask(self.entropy)?;

        self.data[position] = masked.unmask();
        masked.zeroize();

        Ok(())
    }

    fn decoy(&mut self, slot: OperationToken) -> Result<(), Self::Error> {
        let position = (slot.index() + Self::DECOY_OFFSET) % self.data.len();

        let mut decoy = ShareSet::<u8, N>::mask(<u8 as Word>::random(self.entropy)?, self.entropy)?;
        masked_xor_public(&mut decoy, 0, self.data[position]);
        decoy.remask(self.entropy)?;
        let _ = opaque(decoy.unmask());

        Ok(())
    }
}

impl<E, T, const N: usize> Engine<'_, E, T, N>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    /// Secure byte transform.
    ///
    /// Masks every key byte, XORs key byte `i` into `data[i % data.len()]`
    /// through a randomized plan (shuffled order, dummy operations, jitter
    /// and delays), then runs `transform` on the result and emits it once
    /// to `sink`. `data` holds the transformed output on return.
    ///
    /// The XOR stage works on a private copy; `data` is only overwritten
    /// once every step has succeeded.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::InvalidLength`] if `data` is empty, shorter than
    ///   `B::MIN_BYTES`, or not a multiple of `B::BLOCK_BYTES`. Nothing is
    ///   touched and nothing is emitted.
    /// - [`AdapterError::Entropy`] if randomness runs out. `data` is left
    ///   as it was and nothing is emitted.
    pub fn byte_transform<K, B, S>(
        &self,
        key: &Secret<K>,
        data: &mut [u8],
        transform: &B,
        sink: &mut S,
    ) -> Result<(), AdapterError>
    where
        K: AsRef<[u8]> + Zeroize,
        B: BlockTransform,
        S: ResultSink + ?Sized,
    {
        if B::BLOCK_BYTES == 0
            || data.is_empty()
            || data.len() < B::MIN_BYTES
            || data.len() % B::BLOCK_BYTES != 0
        {
            return Err(AdapterError::InvalidLength);
        }

        let key_bytes = key.as_ref().as_ref();

        let mut masked_key: Vec<ShareSet<u8, N>> = Vec::with_capacity(key_bytes.len());
        for byte in key_bytes {
            masked_key.push(ShareSet::mask(*byte, self.entropy)?);
        }

        let plan = self.scheduler()?.plan(masked_key.len())?;

        rprintln!(
            "[rampart] byte_transform: {} bytes, {} key bytes, {} steps",
            data.len(),
            masked_key.len(),
            plan.len()
        );

        let mut work = Zeroizing::new(Vec::from(&*data));
        let mut handler = KeyXor {
            key: &mut masked_key[..],
            data: &mut work[..],
            entropy: self.entropy,
        };

        if let Err(e) = execute(plan, &mut handler, &self.noise) {
            rprintln!("[rampart] byte_transform: entropy unavailable");
            return Err(e.into());
        }

        transform.transform(&mut work[..]);
        data.copy_from_slice(&work[..]);
        sink.emit(data);

        Ok(())
    }
}
