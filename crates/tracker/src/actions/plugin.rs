//! Plugin that wires up the action subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::ActionQueue;
use crate::TrackerSet;

/// Registers the action queue, result log, and executor system.
pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>();
        app.init_resource::<ActionResultLog>();

        app.add_systems(Update, execute_queued_actions.in_set(TrackerSet::Actions));
    }
}
