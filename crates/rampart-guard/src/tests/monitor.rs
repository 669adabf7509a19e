// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::canary::{END_CANARY, GUARD_CANARY, START_CANARY};
use crate::config::MonitorConfig;
use crate::monitor::{CHECKSUM_MULTIPLIER, IntegrityMonitor, RunRecord, expected_checksum};
use crate::support::test_utils::{PanicHalt, SteppedCounter};

fn double(i: u32) -> u32 {
    i.wrapping_mul(2)
}

fn monitor() -> IntegrityMonitor<SteppedCounter, PanicHalt> {
    IntegrityMonitor::new(
        SteppedCounter::new(7, 1_000_000),
        PanicHalt,
        MonitorConfig::default(),
    )
    .expect("Failed to IntegrityMonitor::new(..)")
}

/// Runs every phase except validation.
fn completed_run(monitor: &IntegrityMonitor<SteppedCounter, PanicHalt>) -> RunRecord {
    let mut record = monitor.begin();
    for i in 0..monitor.config().iterations {
        monitor.step(&mut record, i, &double);
    }
    monitor.finish(&mut record);
    record
}

#[test]
fn test_run_returns_value_when_untouched() {
    assert_eq!(monitor().run(double), 999_000);
}

#[test]
fn test_phases_return_value_when_untouched() {
    let monitor = monitor();
    let record = completed_run(&monitor);

    assert_eq!(record.start_canary.get(), START_CANARY);
    assert_eq!(record.guard_canary.get(), GUARD_CANARY);
    assert_eq!(record.end_canary.get(), END_CANARY);
    assert_eq!(record.iterations.get(), 1000);
    assert_eq!(record.checksum.get(), expected_checksum(1000));
    assert_eq!(monitor.verify(&record), 999_000);
}

#[test]
fn test_run_tolerates_counter_wrap() {
    let monitor = IntegrityMonitor::new(
        SteppedCounter::new(u64::MAX - 10, 1_000_000),
        PanicHalt,
        MonitorConfig::default(),
    )
    .expect("Failed to IntegrityMonitor::new(..)");

    assert_eq!(monitor.run(double), 999_000);
}

#[test]
#[should_panic(expected = "StartCanary")]
fn test_corrupted_start_canary_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    record.start_canary.set(START_CANARY ^ 1);

    monitor.verify(&record);
}

#[test]
#[should_panic(expected = "StartCanary")]
fn test_start_canary_checked_during_loop() {
    let monitor = monitor();
    let mut record = monitor.begin();

    monitor.step(&mut record, 0, &double);
    record.start_canary.set(0);
    monitor.step(&mut record, 1, &double);
}

#[test]
#[should_panic(expected = "GuardCanary")]
fn test_corrupted_guard_canary_halts_next_iteration() {
    let monitor = monitor();
    let mut record = monitor.begin();

    monitor.step(&mut record, 0, &double);
    record.guard_canary.set(0xDEAD_BEEE);
    monitor.step(&mut record, 1, &double);
}

#[test]
#[should_panic(expected = "EndCanary")]
fn test_corrupted_end_canary_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    record.end_canary.set(0);

    monitor.verify(&record);
}

#[test]
#[should_panic(expected = "RedundancyMismatch")]
fn test_corrupted_accumulator_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    let second = record.accumulators[1].get();
    record.accumulators[1].set(second.wrapping_add(1));

    monitor.verify(&record);
}

#[test]
#[should_panic(expected = "RedundancyMismatch")]
fn test_impure_computation_halts() {
    let calls = Cell::new(0u32);

    monitor().run(|i| {
        calls.set(calls.get() + 1);
        i.wrapping_add(calls.get() % 3)
    });
}

#[test]
#[should_panic(expected = "IterationCount")]
fn test_corrupted_iteration_counter_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    record.iterations.set(999);

    monitor.verify(&record);
}

#[test]
#[should_panic(expected = "Checksum")]
fn test_corrupted_checksum_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    let checksum = record.checksum.get();
    record.checksum.set(checksum ^ 999u32.wrapping_mul(CHECKSUM_MULTIPLIER));

    monitor.verify(&record);
}

#[test]
#[should_panic(expected = "TimingWindow")]
fn test_run_too_fast_halts() {
    let monitor = IntegrityMonitor::new(
        SteppedCounter::new(0, 10),
        PanicHalt,
        MonitorConfig::default(),
    )
    .expect("Failed to IntegrityMonitor::new(..)");

    monitor.run(double);
}

#[test]
#[should_panic(expected = "TimingWindow")]
fn test_corrupted_finish_timestamp_halts() {
    let monitor = monitor();
    let mut record = completed_run(&monitor);

    record.finished_at += 60_000;

    monitor.verify(&record);
}

#[test]
fn test_expected_checksum_matches_running_checksum() {
    let mut running = 0u32;
    for i in 0..1000u32 {
        running ^= i.wrapping_mul(0x9E37_79B1);
    }

    assert_eq!(expected_checksum(1000), running);
    assert_eq!(expected_checksum(0), 0);
}
