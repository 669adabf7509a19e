// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::RefCell;

use crate::executor::PlanHandler;
use crate::noise::TimingNoise;
use crate::plan::OperationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Operate(usize),
    Decoy(usize),
    Idle(u32),
}

/// Records every handler call and delay into one shared log.
pub(crate) struct Recorder<'a> {
    pub log: &'a RefCell<Vec<Event>>,
    pub fail_at_operation: Option<usize>,
}

impl PlanHandler for Recorder<'_> {
    type Error = usize;

    fn operate(&mut self, token: OperationToken) -> Result<(), Self::Error> {
        if self.fail_at_operation == Some(token.index()) {
            return Err(token.index());
        }

        self.log.borrow_mut().push(Event::Operate(token.index()));
        Ok(())
    }

    fn decoy(&mut self, slot: OperationToken) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Decoy(slot.index()));
        Ok(())
    }
}

pub(crate) struct RecordingNoise<'a> {
    pub log: &'a RefCell<Vec<Event>>,
}

impl TimingNoise for RecordingNoise<'_> {
    fn idle(&self, cycles: u32) {
        self.log.borrow_mut().push(Event::Idle(cycles));
    }
}
