// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::EntropySource;
use rampart_sched::TimingNoise;
use rampart_util::opaque;
use subtle::{Choice, ConstantTimeEq};

use crate::error::AdapterError;
use crate::sink::ResultSink;

use super::Engine;

impl<E, T, const N: usize> Engine<'_, E, T, N>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    /// Secure constant-time comparison.
    ///
    /// Compares every byte, folding the results into one [`Choice`] with
    /// no early exit, then idles for a random delay drawn from
    /// `compare_delay_cycles` before answering. Timing does not depend on
    /// where (or whether) the inputs differ.
    ///
    /// After the delay the verdict is emitted once to `sink` as a single
    /// byte, `1` for equal and `0` otherwise, and returned.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::LengthMismatch`] if the lengths differ. Lengths
    ///   are public.
    /// - [`AdapterError::Entropy`] if the delay cannot be drawn. No bytes
    ///   are compared in that case.
    ///
    /// Nothing is emitted on either error.
    pub fn compare<S>(&self, a: &[u8], b: &[u8], sink: &mut S) -> Result<bool, AdapterError>
    where
        S: ResultSink + ?Sized,
    {
        if a.len() != b.len() {
            return Err(AdapterError::LengthMismatch);
        }

        let delay = self.config.compare_delay_cycles.sample(self.entropy)?;

        let mut equal = Choice::from(1u8);
        for (x, y) in a.iter().zip(b.iter()) {
            equal &= opaque(x.ct_eq(y));
        }

        self.noise.idle(delay);

        let verdict = opaque(equal).unwrap_u8();
        sink.emit(&[verdict]);

        Ok(verdict == 1)
    }
}
