// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::RefCell;

use crate::executor::execute;
use crate::noise::{BusyWait, TimingNoise};
use crate::plan::{ExecutionPlan, OperationToken, PlanStep};

use super::support::{Event, Recorder, RecordingNoise};

fn plan() -> ExecutionPlan {
    ExecutionPlan::from_steps(vec![
        PlanStep::Delay(1),
        PlanStep::Dummy(OperationToken(0)),
        PlanStep::Operation(OperationToken(2)),
        PlanStep::Delay(17),
        PlanStep::Delay(3),
        PlanStep::Operation(OperationToken(0)),
        PlanStep::Delay(9),
        PlanStep::Delay(0),
        PlanStep::Dummy(OperationToken(2)),
        PlanStep::Dummy(OperationToken(1)),
        PlanStep::Operation(OperationToken(1)),
        PlanStep::Delay(60),
    ])
}

#[test]
fn test_execute_honors_plan_order() {
    let log = RefCell::new(Vec::new());
    let mut handler = Recorder {
        log: &log,
        fail_at_operation: None,
    };

    execute(plan(), &mut handler, &RecordingNoise { log: &log }).expect("Failed to execute(..)");

    assert_eq!(
        *log.borrow(),
        [
            Event::Idle(1),
            Event::Decoy(0),
            Event::Operate(2),
            Event::Idle(17),
            Event::Idle(3),
            Event::Operate(0),
            Event::Idle(9),
            Event::Idle(0),
            Event::Decoy(2),
            Event::Decoy(1),
            Event::Operate(1),
            Event::Idle(60),
        ]
    );
}

#[test]
fn test_execute_stops_at_first_error() {
    let log = RefCell::new(Vec::new());
    let mut handler = Recorder {
        log: &log,
        fail_at_operation: Some(0),
    };

    let result = execute(plan(), &mut handler, &RecordingNoise { log: &log });

    assert_eq!(result, Err(0));
    assert_eq!(
        *log.borrow(),
        [
            Event::Idle(1),
            Event::Decoy(0),
            Event::Operate(2),
            Event::Idle(17),
            Event::Idle(3),
        ]
    );
}

#[test]
fn test_execute_empty_plan() {
    let log = RefCell::new(Vec::new());
    let mut handler = Recorder {
        log: &log,
        fail_at_operation: None,
    };

    execute(
        ExecutionPlan::from_steps(Vec::new()),
        &mut handler,
        &RecordingNoise { log: &log },
    )
    .expect("Failed to execute(..)");

    assert!(log.borrow().is_empty());
}

#[test]
fn test_busy_wait_idles() {
    BusyWait.idle(0);
    BusyWait.idle(1000);
}
