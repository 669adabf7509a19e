// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::Cell;

use rampart_sched::TimingNoise;
use rampart_shares::Word;

use crate::arx::ArxProgram;
use crate::engine::{COLUMNS, DIAGONALS};
use crate::sink::ResultSink;
use crate::transform::BlockTransform;

/// Sink collecting every emitted buffer.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Emitted buffers, in order.
    pub emitted: Vec<Vec<u8>>,
}

impl ResultSink for VecSink {
    fn emit(&mut self, buffer: &[u8]) {
        self.emitted.push(Vec::from(buffer));
    }
}

/// Timing noise that only counts what it was asked to idle.
#[derive(Debug, Default)]
pub struct CountingNoise {
    calls: Cell<usize>,
    cycles: Cell<u64>,
}

impl CountingNoise {
    /// Number of idle requests.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Sum of requested cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles.get()
    }
}

impl TimingNoise for CountingNoise {
    fn idle(&self, cycles: u32) {
        self.calls.set(self.calls.get() + 1);
        self.cycles.set(self.cycles.get() + u64::from(cycles));
    }
}

/// XXTEA block encryption (Wheeler and Needham), used as the unprotected
/// stage after the masked key XOR. Operates on little-endian 32-bit words;
/// at least two words.
#[derive(Debug, Clone, Copy)]
pub struct Xxtea {
    /// 128-bit key.
    pub key: [u32; 4],
}

impl Xxtea {
    const DELTA: u32 = 0x9E37_79B9;

    /// Encrypts `v` in place. `v.len() >= 2`.
    pub fn encrypt_words(&self, v: &mut [u32]) {
        let n = v.len();
        if n < 2 {
            return;
        }

        let mx = |sum: u32, y: u32, z: u32, p: usize, e: usize| -> u32 {
            ((z >> 5 ^ y << 2).wrapping_add(y >> 3 ^ z << 4))
                ^ ((sum ^ y).wrapping_add(self.key[(p & 3) ^ e] ^ z))
        };

        let mut rounds = 6 + 52 / n;
        let mut sum = 0u32;
        let mut z = v[n - 1];

        while rounds > 0 {
            sum = sum.wrapping_add(Self::DELTA);
            let e = ((sum >> 2) & 3) as usize;

            for p in 0..n - 1 {
                let y = v[p + 1];
                v[p] = v[p].wrapping_add(mx(sum, y, z, p, e));
                z = v[p];
            }

            let y = v[0];
            v[n - 1] = v[n - 1].wrapping_add(mx(sum, y, z, n - 1, e));
            z = v[n - 1];

            rounds -= 1;
        }
    }
}

impl BlockTransform for Xxtea {
    const BLOCK_BYTES: usize = 4;
    const MIN_BYTES: usize = 8;

    fn transform(&self, data: &mut [u8]) {
        let mut words: Vec<u32> = data
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        self.encrypt_words(&mut words);

        for (chunk, word) in data.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }
}

/// Unprotected reference for [`Engine::arx_rounds`](crate::Engine::arx_rounds):
/// the same column and diagonal rounds on plain words, in logical order.
pub fn reference_arx_rounds<W: Word>(state: &mut [W; 16], program: &ArxProgram, double_rounds: usize) {
    for _ in 0..double_rounds {
        for groups in [&COLUMNS, &DIAGONALS] {
            for group in groups.iter() {
                let mut lanes = [state[group[0]], state[group[1]], state[group[2]], state[group[3]]];
                program.apply_plain(&mut lanes);
                for (index, lane) in group.iter().zip(lanes) {
                    state[*index] = lane;
                }
            }
        }
    }
}

/// Little-endian serialization of an ARX state, as emitted by the engine.
pub fn state_le_bytes<W: Word>(state: &[W; 16]) -> Vec<u8> {
    let mut out = alloc::vec![0u8; 16 * W::BYTES];
    for (i, word) in state.iter().enumerate() {
        word.write_le(&mut out[i * W::BYTES..]);
    }
    out
}
