pub mod engine;
mod save;
pub mod summary;
pub mod tables;
pub mod types;

pub use engine::{apply, newly_crossed, replay, ProgressUpdate, Replay, UnlockRecord};
pub use summary::{AchievementStatus, ProgressSummary, RankProgress};
pub use tables::{award_for, compute_rank, POINT_AWARDS, RANK_THRESHOLDS};
pub use types::{Achievement, ActionKind, Rank, UserProgress};

use bevy::prelude::*;

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UserProgress>();

        app.init_resource::<crate::SaveableRegistry>();
        let mut registry = app.world_mut().resource_mut::<crate::SaveableRegistry>();
        registry.register::<UserProgress>();
    }
}
