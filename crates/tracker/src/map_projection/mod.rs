pub mod projector;
pub mod renderer;
pub mod systems;
#[cfg(test)]
mod tests;
pub mod types;

pub use projector::{fit_viewport, project};
pub use renderer::{publish, MapRenderer};
pub use systems::{refresh_map_projection, CurrentLocation};
pub use types::{MapConfig, MapProjection, Marker, MarkerId, MarkerVariant, Viewport};

use bevy::prelude::*;

pub struct MapProjectionPlugin;

impl Plugin for MapProjectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapConfig>()
            .init_resource::<CurrentLocation>()
            .init_resource::<MapProjection>()
            .add_systems(
                Update,
                refresh_map_projection.in_set(crate::TrackerSet::Projection),
            );
    }
}
