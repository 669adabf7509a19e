// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use rampart_rand::{EntropyError, EntropySource};
use rampart_sched::{OperationToken, PlanHandler, TimingNoise, execute};
use rampart_shares::{ShareSet, Word, masked_add, masked_rotate_left, masked_xor};
use rampart_util::{opaque, rprintln};
use zeroize::Zeroizing;

use crate::arx::{ArxProgram, ArxStep};
use crate::error::AdapterError;
use crate::secret::Secret;
use crate::sink::ResultSink;

use super::{Engine, pair_mut};

/// Number of words in an ARX state.
pub const ARX_STATE_WORDS: usize = 16;

/// Column quarter rounds. Mutually independent.
pub const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];

/// Diagonal quarter rounds. Mutually independent.
pub const DIAGONALS: [[usize; 4]; 4] =
    [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

/// Runs `program` on the masked lanes `state[lanes[..]]`, then remasks
/// them.
fn run_masked<W, E, const N: usize>(
    program: &ArxProgram,
    state: &mut [ShareSet<W, N>],
    lanes: [usize; 4],
    entropy: &E,
) -> Result<(), EntropyError>
where
    W: Word,
    E: EntropySource + ?Sized,
{
    for step in program.steps() {
        match *step {
            ArxStep::Add { dst, src } => {
                let (dst, src) = (lanes[dst.index()], lanes[src.index()]);
                let sum = masked_add(&state[dst], &state[src], entropy)?;
                state[dst] = sum;
            }
            ArxStep::Xor { dst, src } => {
                let (dst, src) = (lanes[dst.index()], lanes[src.index()]);
                if dst == src {
                    state[dst] = ShareSet::mask(W::ZERO, entropy)?;
                } else {
                    let (dst, src) = pair_mut(state, dst, src);
                    masked_xor(dst, src);
                }
            }
            ArxStep::RotateLeft { dst, amount } => {
                masked_rotate_left(&mut state[lanes[dst.index()]], amount);
            }
        }
    }

    for lane in lanes {
        state[lane].remask(entropy)?;
    }

    Ok(())
}

/// Applies one batch of four independent quarter rounds.
struct QuarterRounds<'s, W: Word, E: EntropySource + ?Sized, const N: usize> {
    state: &'s mut [ShareSet<W, N>],
    groups: &'static [[usize; 4]; 4],
    program: &'s ArxProgram,
    entropy: &'s E,
}

impl<W, E, const N: usize> PlanHandler for QuarterRounds<'_, W, E, N>
where
    W: Word,
    E: EntropySource + ?Sized,
{
    type Error = EntropyError;

    fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error> {
        run_masked(
            self.program,
            self.state,
            self.groups[token.index()],
            self.entropy,
        )
    }

    fn decoy(&mut self, _slot: OperationToken) -> Result<(), Self::Error> {
        let mut lanes: Vec<ShareSet<W, N>> = Vec::with_capacity(4);
        for _ in 0..4 {
            lanes.push(ShareSet::mask(W::random(self.entropy)?, self.entropy)?);
        }

        run_masked(self.program, &mut lanes, [0, 1, 2, 3], self.entropy)?;
        let _ = opaque(lanes[0].share(0));

        Ok(())
    }
}

impl<E, T, const N: usize> Engine<'_, E, T, N>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    /// Secure ARX rounds.
    ///
    /// Masks the 16-word `state`, then runs `double_rounds` iterations of
    /// one column batch followed by one diagonal batch. Each batch is the
    /// four independent quarter rounds `program` describes, executed in a
    /// fresh random order with dummy quarter rounds and delays interleaved.
    /// Additions use the weak [`masked_add`] fallback; XORs and rotations
    /// stay masked throughout.
    ///
    /// The final state is unmasked and emitted once to `sink` as
    /// `16 * W::BYTES` little-endian bytes. The caller's `state` is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Entropy`] if randomness runs out. Nothing is
    /// emitted and every masked lane is wiped.
    pub fn arx_rounds<W, S>(
        &self,
        state: &Secret<[W; ARX_STATE_WORDS]>,
        program: &ArxProgram,
        double_rounds: usize,
        sink: &mut S,
    ) -> Result<(), AdapterError>
    where
        W: Word,
        S: ResultSink + ?Sized,
    {
        let scheduler = self.scheduler()?;

        let mut masked: Vec<ShareSet<W, N>> = Vec::with_capacity(ARX_STATE_WORDS);
        for word in state.as_ref() {
            masked.push(ShareSet::mask(*word, self.entropy)?);
        }

        rprintln!(
            "[rampart] arx_rounds: {} double rounds, {} steps per quarter round",
            double_rounds,
            program.steps().len()
        );

        for _ in 0..double_rounds {
            for groups in [&COLUMNS, &DIAGONALS] {
                let plan = scheduler.plan(groups.len())?;
                let mut handler = QuarterRounds {
                    state: &mut masked[..],
                    groups,
                    program,
                    entropy: self.entropy,
                };

                execute(plan, &mut handler, &self.noise)?;
            }
        }

        let mut output = Zeroizing::new([0u8; ARX_STATE_WORDS * 8]);
        for (i, lane) in masked.iter().enumerate() {
            let word = Zeroizing::new(lane.unmask());
            (*word).write_le(&mut output[i * W::BYTES..]);
        }

        sink.emit(&output[..ARX_STATE_WORDS * W::BYTES]);

        Ok(())
    }
}
