//! Scripted world queries for rig tests

use std::cell::RefCell;

use tether_core::{QueryError, Trace, TraceResult, WorldQuery};

/// World that stops every sweep at a fixed distance from its start
pub(crate) struct FakeWorld {
    block_at: Option<f32>,
    last_trace: RefCell<Option<Trace>>,
}

impl FakeWorld {
    pub(crate) fn open() -> Self {
        Self {
            block_at: None,
            last_trace: RefCell::new(None),
        }
    }

    pub(crate) fn blocked_at(distance: f32) -> Self {
        Self {
            block_at: Some(distance),
            last_trace: RefCell::new(None),
        }
    }

    pub(crate) fn last_trace(&self) -> Option<Trace> {
        self.last_trace.borrow().clone()
    }
}

impl WorldQuery for FakeWorld {
    fn sweep(&self, trace: &Trace) -> Result<TraceResult, QueryError> {
        *self.last_trace.borrow_mut() = Some(trace.clone());

        let travel = trace.end - trace.start;
        match self.block_at {
            Some(distance) if distance < travel.length() => Ok(TraceResult {
                hit: true,
                end_position: trace.start + travel.normalize() * distance,
            }),
            _ => Ok(trace.unobstructed()),
        }
    }
}

/// World whose queries always fail
pub(crate) struct FailingWorld;

impl WorldQuery for FailingWorld {
    fn sweep(&self, _trace: &Trace) -> Result<TraceResult, QueryError> {
        Err(QueryError::Unavailable("scene not loaded".into()))
    }
}
