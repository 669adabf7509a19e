// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::plan::{ExecutionPlan, OperationToken, PlanStep};

fn sample_plan() -> ExecutionPlan {
    ExecutionPlan::from_steps(vec![
        PlanStep::Delay(2),
        PlanStep::Dummy(OperationToken(1)),
        PlanStep::Operation(OperationToken(1)),
        PlanStep::Delay(30),
        PlanStep::Delay(0),
        PlanStep::Operation(OperationToken(0)),
        PlanStep::Delay(12),
    ])
}

#[test]
fn test_plan_accessors() {
    let plan = sample_plan();

    assert_eq!(plan.len(), 7);
    assert!(!plan.is_empty());
    assert_eq!(plan.dummy_count(), 1);
    assert_eq!(
        plan.operations().collect::<Vec<_>>(),
        [OperationToken(1), OperationToken(0)]
    );
}

#[test]
fn test_plan_zeroize_clears_steps() {
    let mut plan = sample_plan();

    plan.zeroize();

    assert!(plan.is_empty());
}

#[test]
fn test_plan_step_zeroize() {
    let mut step = PlanStep::Operation(OperationToken(9));
    step.zeroize();
    assert_eq!(step, PlanStep::Delay(0));

    let mut step = PlanStep::Delay(44);
    step.zeroize();
    assert_eq!(step, PlanStep::Delay(0));
}

#[test]
fn test_plan_debug_is_redacted() {
    let plan = sample_plan();
    let debug = format!("{:?}", plan);

    assert_eq!(debug, "[REDACTED ExecutionPlan: 7 steps]");
}
