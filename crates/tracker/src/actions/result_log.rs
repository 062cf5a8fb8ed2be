//! Recent action outcomes, newest last. Bounded by [`ACTION_LOG_CAPACITY`];
//! the runner reads back each step's result from here.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::ACTION_LOG_CAPACITY;

use super::{ActionResult, TrackerAction};

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: VecDeque<(TrackerAction, ActionResult)>,
}

impl ActionResultLog {
    pub fn push(&mut self, action: TrackerAction, result: ActionResult) {
        if self.entries.len() == ACTION_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    pub fn last(&self) -> Option<&(TrackerAction, ActionResult)> {
        self.entries.back()
    }

    /// Up to `n` of the most recent outcomes, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &(TrackerAction, ActionResult)> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Rejected actions still held in the log.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| !r.is_success()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
