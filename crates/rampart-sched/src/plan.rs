// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Logical slot of one independent operation within a batch.
///
/// Tokens `0..len` name the operations of a batch; the adapter that built
/// the batch decides what each slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroize)]
pub struct OperationToken(pub usize);

impl OperationToken {
    /// Slot index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One step of an [`ExecutionPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStep {
    /// Run the real operation for this slot.
    Operation(OperationToken),
    /// Run a decoy shaped like the operation for this slot. Its result is
    /// discarded.
    Dummy(OperationToken),
    /// Idle for the given number of cycles.
    Delay(u32),
}

impl Zeroize for PlanStep {
    fn zeroize(&mut self) {
        match self {
            PlanStep::Operation(token) | PlanStep::Dummy(token) => token.zeroize(),
            PlanStep::Delay(cycles) => cycles.zeroize(),
        }
        *self = PlanStep::Delay(0);
    }
}

/// A randomized total order of real operations, dummies and delays.
///
/// Plans are built fresh by [`Scheduler`](crate::Scheduler) for each
/// invocation, consumed by [`execute`](crate::execute), and wiped on drop:
/// the physical order leaks which slot ran when, so it must not outlive
/// the run.
pub struct ExecutionPlan {
    steps: Vec<PlanStep>,
}

impl ExecutionPlan {
    pub(crate) fn from_steps(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    pub(crate) fn steps_mut(&mut self) -> &mut Vec<PlanStep> {
        &mut self.steps
    }

    /// All steps, in execution order.
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Real operations, in execution order.
    pub fn operations(&self) -> impl Iterator<Item = OperationToken> + '_ {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Operation(token) => Some(*token),
            _ => None,
        })
    }

    /// Number of dummy steps.
    pub fn dummy_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, PlanStep::Dummy(_)))
            .count()
    }
}

impl fmt::Debug for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ExecutionPlan: {} steps]", self.steps.len())
    }
}

impl Zeroize for ExecutionPlan {
    fn zeroize(&mut self) {
        self.steps.zeroize();
    }
}

impl Drop for ExecutionPlan {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for ExecutionPlan {}
