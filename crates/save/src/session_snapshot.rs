use bevy::prelude::*;
use tracker::SaveableRegistry;

use crate::file_header::{decompress_payload, unwrap_header, wrap_with_header, Compression};
use crate::save_codec::SnapshotPayload;
use crate::save_error::SaveError;

/// Serialize every registered `Saveable` in `world` into a headered,
/// lz4-compressed snapshot.
pub fn snapshot_world(world: &World) -> Result<Vec<u8>, SaveError> {
    snapshot_world_with(world, Compression::Lz4)
}

pub fn snapshot_world_with(world: &World, compression: Compression) -> Result<Vec<u8>, SaveError> {
    let registry = world
        .get_resource::<SaveableRegistry>()
        .ok_or(SaveError::MissingResource("SaveableRegistry"))?;

    let payload = SnapshotPayload::new(registry.save_all(world));
    let encoded = payload.encode();
    let bytes = wrap_with_header(&encoded, compression)?;

    info!(
        "Session snapshot: {} extension(s), {} payload bytes, {} bytes on disk",
        payload.extensions.len(),
        encoded.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Replace the registered resources in `world` with the state held in
/// `bytes`.
///
/// The whole snapshot is validated and decoded before the world is touched,
/// so a failed restore leaves the session as it was. Resources absent from
/// the snapshot are reset to their defaults.
pub fn restore_world(world: &mut World, bytes: &[u8]) -> Result<(), SaveError> {
    let (header, stored) = unwrap_header(bytes)?;
    debug!(
        "Snapshot header: format v{}, flags {:#X}, data size {}, checksum {:#010X}",
        header.format_version, header.flags, header.uncompressed_size, header.checksum,
    );
    let encoded = decompress_payload(&header, stored)?;
    let payload = SnapshotPayload::decode(&encoded)?;

    if !world.contains_resource::<SaveableRegistry>() {
        return Err(SaveError::MissingResource("SaveableRegistry"));
    }
    world.resource_scope(|world, registry: Mut<SaveableRegistry>| {
        for key in payload.extensions.keys() {
            if !registry.keys().any(|k| k == key) {
                warn!("Snapshot extension '{key}' is not registered, skipping");
            }
        }
        registry.reset_all(world);
        registry.load_all(world, &payload.extensions);
    });

    info!(
        "Session restored from snapshot ({} extension(s))",
        payload.extensions.len()
    );
    Ok(())
}
