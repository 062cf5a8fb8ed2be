use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod actions;
pub mod cleanup_events;
pub mod config;
pub mod geo;
pub mod leaderboard;
pub mod ledger;
pub mod map_projection;
pub mod notifications;
pub mod progression;
pub mod session;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

// ---------------------------------------------------------------------------
// Saveable trait + registry for the session snapshot
// ---------------------------------------------------------------------------

/// Trait for resources that are persisted in the session snapshot.
///
/// Each implementing resource provides its own serialization logic; the
/// snapshot codec only sees the keyed byte blobs produced by the registry.
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Unique key for this resource in the snapshot's extension map.
    /// Must be stable across versions (used for deserialization lookup).
    const SAVE_KEY: &'static str;

    /// Serialize this resource to bytes.
    /// Return `None` to skip saving (e.g. when the resource is at its default state).
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Deserialize from bytes, returning the restored resource.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// Decode bytes via `bitcode::decode`, logging a warning and returning `Default` on failure.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset operations for a single registered resource.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

/// Registry of all saveable resources, populated during plugin setup.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Register a resource type that implements `Saveable`.
    ///
    /// Panics in debug builds if a resource with the same `SAVE_KEY` is already
    /// registered.
    pub fn register<T: Saveable>(&mut self) {
        let key = T::SAVE_KEY.to_string();
        if self.entries.iter().any(|e| e.key == key) {
            warn!(
                "SaveableRegistry: duplicate key '{}', ignoring second registration",
                key
            );
            debug_assert!(false, "SaveableRegistry: duplicate key '{}'", key);
            return;
        }
        self.entries.push(SaveableEntry {
            key,
            save_fn: Box::new(|world: &World| {
                world.get_resource::<T>().and_then(|r| r.save_to_bytes())
            }),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                let value = T::load_from_bytes(bytes);
                world.insert_resource(value);
            }),
            reset_fn: Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        });
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Save all registered resources into an extension map.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Load registered resources from an extension map.
    /// Resources whose key is absent are left unchanged.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    /// Reset all registered resources to their defaults.
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Ordered phases in `Update`: actions are applied before the map is
/// re-projected, so a submission shows up on the map in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackerSet {
    Actions,
    Projection,
}

/// Registers the ledger, progression, event board, map projection, action
/// pipeline and unlock notifications.
pub struct TrackerPlugin;

impl Plugin for TrackerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (TrackerSet::Actions, TrackerSet::Projection).chain());

        app.init_resource::<SaveableRegistry>()
            .init_resource::<session::SessionDate>()
            .init_resource::<ledger::ActivityLedger>()
            .init_resource::<cleanup_events::EventBoard>()
            .init_resource::<notifications::AchievementNotification>()
            .add_event::<notifications::AchievementUnlocked>();

        {
            let mut registry = app.world_mut().resource_mut::<SaveableRegistry>();
            registry.register::<ledger::ActivityLedger>();
            registry.register::<cleanup_events::EventBoard>();
        }

        app.add_plugins((
            progression::ProgressionPlugin,
            map_projection::MapProjectionPlugin,
            actions::ActionsPlugin,
        ));
    }
}
