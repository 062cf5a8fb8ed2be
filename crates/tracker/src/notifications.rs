//! Hand-off of newly unlocked achievements to the notification collaborator.
//!
//! Unlocks go out twice: as an `AchievementUnlocked` event for systems that
//! react in the same frame, and into the `AchievementNotification` queue for
//! a presenter that polls. Display and expiry belong to the presenter.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::NOTIFICATION_QUEUE_CAPACITY;
use crate::progression::{Achievement, Rank};

/// Fired once per achievement, on the action that unlocked it.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementUnlocked {
    pub achievement: Achievement,
    /// Points total right after the unlocking action.
    pub points: u32,
    pub rank: Rank,
}

/// Pending unlocks not yet taken by the presenter. Oldest entries are dropped
/// once the queue is full.
#[derive(Resource, Debug, Default)]
pub struct AchievementNotification {
    recent_unlocks: VecDeque<Achievement>,
}

impl AchievementNotification {
    pub fn push(&mut self, achievement: Achievement) {
        if self.recent_unlocks.len() >= NOTIFICATION_QUEUE_CAPACITY {
            self.recent_unlocks.pop_front();
        }
        self.recent_unlocks.push_back(achievement);
    }

    /// Take all pending notifications, clearing the internal list.
    pub fn take(&mut self) -> Vec<Achievement> {
        self.recent_unlocks.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.recent_unlocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent_unlocks.is_empty()
    }
}
