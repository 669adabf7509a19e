// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Add-rotate-XOR quarter-round programs.

use alloc::vec::Vec;

use rampart_shares::Word;

/// Working lane of a quarter round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// First lane.
    A,
    /// Second lane.
    B,
    /// Third lane.
    C,
    /// Fourth lane.
    D,
}

impl Lane {
    /// Position of the lane within a quarter-round group.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Lane::A => 0,
            Lane::B => 1,
            Lane::C => 2,
            Lane::D => 3,
        }
    }
}

/// One ARX instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArxStep {
    /// `dst = dst + src` (wrapping).
    Add {
        /// Updated lane.
        dst: Lane,
        /// Operand lane.
        src: Lane,
    },
    /// `dst = dst ^ src`.
    Xor {
        /// Updated lane.
        dst: Lane,
        /// Operand lane.
        src: Lane,
    },
    /// `dst = dst <<< amount`, amount taken modulo the word width.
    RotateLeft {
        /// Updated lane.
        dst: Lane,
        /// Rotation distance.
        amount: u32,
    },
}

/// A quarter round as a sequence of [`ArxStep`]s over four lanes.
///
/// The engine runs it on masked lanes; [`apply_plain`](Self::apply_plain)
/// runs it on plain words for reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArxProgram {
    steps: Vec<ArxStep>,
}

impl ArxProgram {
    /// Builds a program from explicit steps.
    pub fn new(steps: Vec<ArxStep>) -> Self {
        Self { steps }
    }

    /// The ChaCha quarter round (rotations 16, 12, 8, 7).
    pub fn chacha() -> Self {
        use Lane::{A, B, C, D};

        Self::new(Vec::from([
            ArxStep::Add { dst: A, src: B },
            ArxStep::Xor { dst: D, src: A },
            ArxStep::RotateLeft { dst: D, amount: 16 },
            ArxStep::Add { dst: C, src: D },
            ArxStep::Xor { dst: B, src: C },
            ArxStep::RotateLeft { dst: B, amount: 12 },
            ArxStep::Add { dst: A, src: B },
            ArxStep::Xor { dst: D, src: A },
            ArxStep::RotateLeft { dst: D, amount: 8 },
            ArxStep::Add { dst: C, src: D },
            ArxStep::Xor { dst: B, src: C },
            ArxStep::RotateLeft { dst: B, amount: 7 },
        ]))
    }

    /// Quarter round with caller-chosen rotations:
    ///
    /// ```text
    /// a += d; b ^= a; b <<<= r[0]
    /// c += b; d ^= c; d <<<= r[1]
    /// a += d; b ^= a; b <<<= r[2]
    /// c += b; d ^= c; d <<<= r[3]
    /// ```
    pub fn shifted(rotations: [u32; 4]) -> Self {
        use Lane::{A, B, C, D};

        let mut steps = Vec::with_capacity(12);
        for pair in rotations.chunks(2) {
            steps.extend_from_slice(&[
                ArxStep::Add { dst: A, src: D },
                ArxStep::Xor { dst: B, src: A },
                ArxStep::RotateLeft {
                    dst: B,
                    amount: pair[0],
                },
                ArxStep::Add { dst: C, src: B },
                ArxStep::Xor { dst: D, src: C },
                ArxStep::RotateLeft {
                    dst: D,
                    amount: pair[1],
                },
            ]);
        }

        Self::new(steps)
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[ArxStep] {
        &self.steps
    }

    /// Runs the program on plain words. Not protected in any way.
    pub fn apply_plain<W: Word>(&self, lanes: &mut [W; 4]) {
        for step in &self.steps {
            match *step {
                ArxStep::Add { dst, src } => {
                    lanes[dst.index()] = lanes[dst.index()].wrapping_add(lanes[src.index()]);
                }
                ArxStep::Xor { dst, src } => {
                    lanes[dst.index()] = lanes[dst.index()] ^ lanes[src.index()];
                }
                ArxStep::RotateLeft { dst, amount } => {
                    lanes[dst.index()] = lanes[dst.index()].rotate_left(amount);
                }
            }
        }
    }
}
