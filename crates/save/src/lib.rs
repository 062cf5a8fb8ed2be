//! Versioned binary snapshots of a tracker session.
//!
//! A snapshot is a 24-byte header followed by the bitcode-encoded extension
//! map of every registered `Saveable`. This crate only produces and consumes
//! bytes; where they are stored is up to the caller.

pub mod file_header;
mod save_codec;
mod save_error;
mod session_snapshot;
mod snapshot_plugin;


pub use file_header::{Compression, FileHeader};
pub use save_codec::SnapshotPayload;
pub use save_error::SaveError;
pub use session_snapshot::{restore_world, snapshot_world, snapshot_world_with};
pub use snapshot_plugin::{
    NewSessionEvent, RestoreSnapshotEvent, SnapshotPlugin, SnapshotStore, TakeSnapshotEvent,
};
