// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{Ordering, compiler_fence};

use rampart_util::{opaque, rprintln};

use crate::canary::{END_CANARY, GUARD_CANARY, START_CANARY, VolatileCell};
use crate::config::MonitorConfig;
use crate::counter::MonotonicCounter;
use crate::error::MonitorConfigError;
use crate::fault::{Fault, FaultResponse};

/// Golden-ratio multiplier of the per-iteration checksum.
pub const CHECKSUM_MULTIPLIER: u32 = 0x9E37_79B1;

/// State of one protected run. Every field is a guarded item.
pub(crate) struct RunRecord {
    pub(crate) start_canary: VolatileCell<u32>,
    pub(crate) guard_canary: VolatileCell<u32>,
    pub(crate) end_canary: VolatileCell<u32>,
    pub(crate) accumulators: [VolatileCell<u32>; 3],
    pub(crate) iterations: VolatileCell<u32>,
    pub(crate) checksum: VolatileCell<u32>,
    pub(crate) started_at: u64,
    pub(crate) finished_at: u64,
}

/// Hardens a non-secret critical computation against fault injection.
///
/// [`run`](Self::run) executes a fixed-length loop in which a pure
/// computation is evaluated three times per iteration into three
/// independent accumulators, alongside an iteration counter and a running
/// checksum, bracketed by canary sentinels and two counter readings.
/// Afterwards it validates, each check twice:
///
/// 1. start, guard and end canaries hold their sentinel values
/// 2. the three accumulators agree
/// 3. the iteration counter equals the configured count
/// 4. the checksum equals a freshly recomputed one
/// 5. the counter delta lies in the configured window
///
/// Any violation calls [`FaultResponse::halt`], which never returns.
///
/// # Example
///
/// ```rust
/// use rampart_guard::{IntegrityMonitor, MonitorConfig, MonotonicCounter, SpinHalt};
/// use core::cell::Cell;
///
/// // A counter that advances one million ticks per reading.
/// struct Ticks(Cell<u64>);
///
/// impl MonotonicCounter for Ticks {
///     fn now(&self) -> u64 {
///         let now = self.0.get();
///         self.0.set(now + 1_000_000);
///         now
///     }
/// }
///
/// let monitor = IntegrityMonitor::new(Ticks(Cell::new(0)), SpinHalt, MonitorConfig::default())
///     .expect("Failed to IntegrityMonitor::new(..)");
///
/// let sum = monitor.run(|i| i.wrapping_mul(2));
/// assert_eq!(sum, 999_000);
/// ```
pub struct IntegrityMonitor<C: MonotonicCounter, H: FaultResponse> {
    counter: C,
    response: H,
    config: MonitorConfig,
}

impl<C: MonotonicCounter, H: FaultResponse> IntegrityMonitor<C, H> {
    /// Creates a monitor after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`MonitorConfigError`] reported by
    /// [`MonitorConfig::validate`].
    pub fn new(counter: C, response: H, config: MonitorConfig) -> Result<Self, MonitorConfigError> {
        config.validate()?;

        rprintln!(
            "[rampart-guard] monitor: {} iterations, window {}..={}",
            config.iterations,
            config.window.min,
            config.window.max
        );

        Ok(Self {
            counter,
            response,
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Runs `compute(i)` for `i` in `0..iterations` under full monitoring
    /// and returns the wrapping sum of its results.
    ///
    /// `compute` must be pure: it is called three times per iteration and
    /// any disagreement between the calls is treated as a fault.
    pub fn run<F>(&self, compute: F) -> u32
    where
        F: Fn(u32) -> u32,
    {
        let mut record = self.begin();

        for i in 0..self.config.iterations {
            self.step(&mut record, i, &compute);
        }

        self.finish(&mut record);
        self.verify(&record)
    }

    pub(crate) fn begin(&self) -> RunRecord {
        let started_at = self.counter.now();

        let record = RunRecord {
            start_canary: VolatileCell::new(START_CANARY),
            guard_canary: VolatileCell::new(GUARD_CANARY),
            end_canary: VolatileCell::new(0),
            accumulators: [
                VolatileCell::new(0),
                VolatileCell::new(0),
                VolatileCell::new(0),
            ],
            iterations: VolatileCell::new(0),
            checksum: VolatileCell::new(0),
            started_at,
            finished_at: started_at,
        };

        compiler_fence(Ordering::SeqCst);

        record
    }

    pub(crate) fn step<F>(&self, record: &mut RunRecord, i: u32, compute: &F)
    where
        F: Fn(u32) -> u32,
    {
        self.ensure(|| record.guard_canary.get() == GUARD_CANARY, Fault::GuardCanary);
        self.ensure(|| record.start_canary.get() == START_CANARY, Fault::StartCanary);

        for accumulator in record.accumulators.iter_mut() {
            let value = opaque(compute(opaque(i)));
            accumulator.set(accumulator.get().wrapping_add(value));
        }

        record
            .iterations
            .set(record.iterations.get().wrapping_add(1));
        record
            .checksum
            .set(record.checksum.get() ^ i.wrapping_mul(CHECKSUM_MULTIPLIER));
    }

    pub(crate) fn finish(&self, record: &mut RunRecord) {
        record.finished_at = self.counter.now();
        record.end_canary.set(END_CANARY);

        compiler_fence(Ordering::SeqCst);
    }

    pub(crate) fn verify(&self, record: &RunRecord) -> u32 {
        self.ensure(|| record.start_canary.get() == START_CANARY, Fault::StartCanary);
        self.ensure(|| record.guard_canary.get() == GUARD_CANARY, Fault::GuardCanary);
        self.ensure(|| record.end_canary.get() == END_CANARY, Fault::EndCanary);

        self.ensure(
            || {
                let [a, b, c] = &record.accumulators;
                a.get() == b.get() && b.get() == c.get()
            },
            Fault::RedundancyMismatch,
        );

        self.ensure(
            || record.iterations.get() == self.config.iterations,
            Fault::IterationCount,
        );

        let expected = expected_checksum(self.config.iterations);
        self.ensure(|| record.checksum.get() == expected, Fault::Checksum);

        let elapsed = record.finished_at.wrapping_sub(record.started_at);
        self.ensure(|| self.config.window.contains(elapsed), Fault::TimingWindow);

        opaque(record.accumulators[0].get())
    }

    /// Evaluates `condition` twice through a barrier and halts on the
    /// first failure, so skipping a single branch does not get past it.
    #[inline(always)]
    fn ensure(&self, condition: impl Fn() -> bool, fault: Fault) {
        if !opaque(condition()) {
            self.response.halt(fault);
        }

        if !opaque(condition()) {
            self.response.halt(fault);
        }
    }
}

/// XOR of `i * CHECKSUM_MULTIPLIER` over `0..iterations`, wrapping.
pub fn expected_checksum(iterations: u32) -> u32 {
    (0..iterations).fold(0u32, |acc, i| {
        opaque(acc ^ i.wrapping_mul(CHECKSUM_MULTIPLIER))
    })
}
