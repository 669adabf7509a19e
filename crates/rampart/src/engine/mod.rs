// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The masked execution engine and its adapters.

mod arx_rounds;
mod byte_transform;
mod compare;
mod sort;

pub use arx_rounds::{ARX_STATE_WORDS, COLUMNS, DIAGONALS};

#[cfg(test)]
pub(crate) use sort::insertion_pairs;

use rampart_rand::EntropySource;
use rampart_sched::{BusyWait, Scheduler, TimingNoise};
use rampart_util::rprintln;

use crate::config::EngineConfig;
use crate::error::AdapterError;

/// Runs secret-dependent computations masked, shuffled and jittered.
///
/// An engine borrows an entropy source, owns a validated
/// [`EngineConfig`] and a [`TimingNoise`] primitive, and exposes four
/// adapters:
///
/// - [`byte_transform`](Self::byte_transform): masked key XOR followed by a
///   caller-supplied [`BlockTransform`](crate::BlockTransform)
/// - [`arx_rounds`](Self::arx_rounds): masked add-rotate-XOR rounds
/// - [`sort`](Self::sort): blinded constant-time insertion sort
/// - [`compare`](Self::compare): constant-time equality with a random delay
///
/// Every adapter hands its final output to a [`ResultSink`](crate::ResultSink)
/// exactly once, and never on an error path.
///
/// `N` is the masking order: 2 shares for [`first_order`](Self::first_order),
/// 3 shares for [`second_order`](Self::second_order).
///
/// # Example
///
/// ```rust
/// use rampart::{Engine, EngineConfig, ResultSink};
/// use rampart_rand::SystemEntropySource;
///
/// struct Reply(Vec<Vec<u8>>);
///
/// impl ResultSink for Reply {
///     fn emit(&mut self, buffer: &[u8]) {
///         self.0.push(buffer.to_vec());
///     }
/// }
///
/// let entropy = SystemEntropySource {};
/// let engine = Engine::second_order(&entropy, EngineConfig::default())
///     .expect("Failed to Engine::second_order(..)");
/// let mut reply = Reply(Vec::new());
///
/// let mut data = [5u8, 3, 1, 4, 2];
/// engine.sort(&mut data, &mut reply).expect("Failed to sort(..)");
/// assert_eq!(data, [1, 2, 3, 4, 5]);
///
/// assert!(engine.compare(b"hunter2", b"hunter2", &mut reply).expect("Failed to compare(..)"));
/// assert_eq!(reply.0, vec![vec![1, 2, 3, 4, 5], vec![1]]);
/// ```
pub struct Engine<'a, E, T = BusyWait, const N: usize = 2>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    entropy: &'a E,
    config: EngineConfig,
    noise: T,
}

impl<'a, E: EntropySource + ?Sized> Engine<'a, E, BusyWait, 2> {
    /// Creates a first-order (2-share) engine.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] if `config` is invalid.
    pub fn first_order(entropy: &'a E, config: EngineConfig) -> Result<Self, AdapterError> {
        Self::build(entropy, config, BusyWait)
    }
}

impl<'a, E: EntropySource + ?Sized> Engine<'a, E, BusyWait, 3> {
    /// Creates a second-order (3-share) engine.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] if `config` is invalid.
    pub fn second_order(entropy: &'a E, config: EngineConfig) -> Result<Self, AdapterError> {
        Self::build(entropy, config, BusyWait)
    }
}

impl<'a, E, T, const N: usize> Engine<'a, E, T, N>
where
    E: EntropySource + ?Sized,
    T: TimingNoise,
{
    fn build(entropy: &'a E, config: EngineConfig, noise: T) -> Result<Self, AdapterError> {
        if let Err(e) = config.validate() {
            rprintln!("[rampart] rejected engine configuration");
            return Err(e.into());
        }

        Ok(Self {
            entropy,
            config,
            noise,
        })
    }

    /// Replaces the timing-noise primitive, e.g. with a hardware source.
    pub fn with_noise<U: TimingNoise>(self, noise: U) -> Engine<'a, E, U, N> {
        Engine {
            entropy: self.entropy,
            config: self.config,
            noise,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Masking order (number of shares).
    pub const fn order(&self) -> usize {
        N
    }

    fn scheduler(&self) -> Result<Scheduler<'a, E>, AdapterError> {
        Ok(Scheduler::new(self.entropy, self.config.scheduler)?)
    }
}

/// Splits `slice` into a mutable reference at `dst` and a shared one at
/// `src`.
///
/// # Panics
///
/// Panics if `dst == src` or either index is out of bounds.
fn pair_mut<T>(slice: &mut [T], dst: usize, src: usize) -> (&mut T, &T) {
    assert_ne!(dst, src, "pair_mut requires distinct indices");

    if dst < src {
        let (low, high) = slice.split_at_mut(src);
        (&mut low[dst], &high[0])
    } else {
        let (low, high) = slice.split_at_mut(dst);
        (&mut high[0], &low[src])
    }
}
