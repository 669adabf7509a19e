// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::noise::TimingNoise;
use crate::plan::{ExecutionPlan, OperationToken, PlanStep};

/// Performs the work behind each operation slot.
pub trait PlanHandler {
    /// Error that aborts the plan.
    type Error;

    /// Runs the real operation for `token`.
    fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error>;

    /// Runs a decoy resembling the operation for `slot`. The decoy must
    /// not touch the real state.
    fn decoy(&mut self, slot: OperationToken) -> Result<(), Self::Error>;
}

/// Runs `plan` strictly in step order.
///
/// Operations go to [`PlanHandler::operate`], dummies to
/// [`PlanHandler::decoy`], delays to [`TimingNoise::idle`]. The plan is
/// consumed and wiped whether or not it completes.
///
/// # Errors
///
/// The first handler error stops the run and is returned as is. Steps
/// after it are not executed.
pub fn execute<H, T>(plan: ExecutionPlan, handler: &mut H, noise: &T) -> Result<(), H::Error>
where
    H: PlanHandler + ?Sized,
    T: TimingNoise + ?Sized,
{
    for step in plan.steps() {
        match *step {
            PlanStep::Operation(token) => handler.operate(token)?,
            PlanStep::Dummy(slot) => handler.decoy(slot)?,
            PlanStep::Delay(cycles) => noise.idle(cycles),
        }
    }

    Ok(())
}
