// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use rampart_rand::{EntropyError, EntropySource};
use rampart_util::rprintln;

use crate::config::SchedulerConfig;
use crate::error::ConfigError;
use crate::plan::{ExecutionPlan, OperationToken, PlanStep};

/// Builds randomized execution plans.
///
/// A plan for a batch of `len` independent operations contains every token
/// in `0..len` exactly once as a [`PlanStep::Operation`], surrounded by
/// noise:
///
/// ```text
/// Delay(jitter)  Dummy(..) x 0..=max_dummies  Operation(t)  Delay(delay)
/// ```
///
/// Every random choice is drawn fresh, so two plans for the same batch
/// generally differ in order, dummy count and timing.
///
/// # Example
///
/// ```rust
/// use rampart_rand::SystemEntropySource;
/// use rampart_sched::{Scheduler, SchedulerConfig};
///
/// let entropy = SystemEntropySource {};
/// let scheduler = Scheduler::new(&entropy, SchedulerConfig::default())
///     .expect("Failed to Scheduler::new(..)");
///
/// let plan = scheduler.plan(4).expect("Failed to plan(..)");
///
/// let mut tokens: Vec<usize> = plan.operations().map(|t| t.index()).collect();
/// tokens.sort();
/// assert_eq!(tokens, [0, 1, 2, 3]);
/// ```
pub struct Scheduler<'a, E: EntropySource + ?Sized> {
    entropy: &'a E,
    config: SchedulerConfig,
}

impl<'a, E: EntropySource + ?Sized> Scheduler<'a, E> {
    /// Creates a scheduler after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SchedulerConfig::validate`].
    pub fn new(entropy: &'a E, config: SchedulerConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            rprintln!("[rampart-sched] rejected configuration");
            return Err(e);
        }

        Ok(Self { entropy, config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Permutes `data` in place with a fresh Fisher-Yates shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn shuffle<T>(&self, data: &mut [T]) -> Result<(), EntropyError> {
        rampart_rand::shuffle(data, self.entropy)
    }

    /// Returns the tokens `0..len` in uniformly random order.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn permutation(&self, len: usize) -> Result<Vec<OperationToken>, EntropyError> {
        let mut tokens: Vec<OperationToken> = (0..len).map(OperationToken).collect();
        self.shuffle(&mut tokens)?;

        Ok(tokens)
    }

    /// Builds a plan for `len` independent operations in random order.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    /// No partial plan is returned.
    pub fn plan(&self, len: usize) -> Result<ExecutionPlan, EntropyError> {
        let tokens = self.permutation(len)?;
        self.pad(tokens)
    }

    /// Builds a plan for `len` dependent operations that must keep their
    /// logical order. Only dummies and delays are randomized.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn plan_in_order(&self, len: usize) -> Result<ExecutionPlan, EntropyError> {
        let tokens: Vec<OperationToken> = (0..len).map(OperationToken).collect();
        self.pad(tokens)
    }

    fn pad(&self, tokens: Vec<OperationToken>) -> Result<ExecutionPlan, EntropyError> {
        let len = tokens.len();
        // Jitter, operation and delay, plus at most `max_dummies` decoys.
        // Reserving the worst case keeps the buffer from reallocating and
        // leaving stale step copies behind.
        let per_token = (self.config.max_dummies as usize).saturating_add(3);
        let capacity = len.checked_mul(per_token).unwrap_or(len);
        let mut plan = ExecutionPlan::from_steps(Vec::with_capacity(capacity));

        // Built inside the plan so a failure midway still wipes what exists.
        let steps = plan.steps_mut();

        for token in tokens {
            steps.push(PlanStep::Delay(self.config.jitter_cycles.sample(self.entropy)?));

            let dummies = self.entropy.next_in_range(0, self.config.max_dummies)?;
            for _ in 0..dummies {
                let slot = self.entropy.next_below(len as u32)? as usize;
                steps.push(PlanStep::Dummy(OperationToken(slot)));
            }

            steps.push(PlanStep::Operation(token));
            steps.push(PlanStep::Delay(self.config.delay_cycles.sample(self.entropy)?));
        }

        rprintln!(
            "[rampart-sched] plan: {} operations, {} steps",
            len,
            plan.len()
        );

        Ok(plan)
    }
}
