use bevy::prelude::*;
use tracker::SaveableRegistry;

use crate::session_snapshot::{restore_world, snapshot_world};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Ask for a snapshot of the current session; the bytes land in
/// `SnapshotStore::latest`.
#[derive(Event, Debug, Clone, Copy)]
pub struct TakeSnapshotEvent;

/// Replace the current session with the given snapshot bytes.
#[derive(Event, Debug, Clone)]
pub struct RestoreSnapshotEvent(pub Vec<u8>);

/// Reset every registered resource to its default.
#[derive(Event, Debug, Clone, Copy)]
pub struct NewSessionEvent;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Hand-off point for the persistence collaborator: the most recent snapshot
/// bytes and the last failure, if any.
#[derive(Resource, Default, Debug)]
pub struct SnapshotStore {
    pub latest: Option<Vec<u8>>,
    pub last_error: Option<String>,
}

impl SnapshotStore {
    pub fn take_latest(&mut self) -> Option<Vec<u8>> {
        self.latest.take()
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TakeSnapshotEvent>()
            .add_event::<RestoreSnapshotEvent>()
            .add_event::<NewSessionEvent>()
            .init_resource::<SaveableRegistry>()
            .init_resource::<SnapshotStore>()
            .add_systems(PostUpdate, process_snapshot_requests);
    }
}

/// Exclusive system handling snapshot requests with full world access.
///
/// Within one frame, a new-session reset runs first, then restores (last one
/// wins), then the snapshot, so a snapshot always reflects the frame's final
/// state.
fn process_snapshot_requests(world: &mut World) {
    let new_session = world
        .resource_mut::<Events<NewSessionEvent>>()
        .drain()
        .count()
        > 0;
    let restore = world
        .resource_mut::<Events<RestoreSnapshotEvent>>()
        .drain()
        .last();
    let snapshot = world
        .resource_mut::<Events<TakeSnapshotEvent>>()
        .drain()
        .count()
        > 0;

    if new_session {
        world.resource_scope(|world, registry: Mut<SaveableRegistry>| {
            registry.reset_all(world);
        });
        info!("New session: all saveable resources reset");
    }

    if let Some(RestoreSnapshotEvent(bytes)) = restore {
        if let Err(e) = restore_world(world, &bytes) {
            error!("Restore failed: {e}");
            world.resource_mut::<SnapshotStore>().last_error = Some(e.to_string());
        }
    }

    if snapshot {
        let result = snapshot_world(world);
        let mut store = world.resource_mut::<SnapshotStore>();
        match result {
            Ok(bytes) => store.latest = Some(bytes),
            Err(e) => {
                error!("Snapshot failed: {e}");
                store.last_error = Some(e.to_string());
            }
        }
    }
}
