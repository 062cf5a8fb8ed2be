use bevy::prelude::*;

pub mod marker_layer;
pub mod marker_styles;


pub use marker_layer::{
    feed_marker_layer, sync_marker_entities, MapCamera, MapMarkerEntity, MarkerLayer,
};
pub use marker_styles::{marker_style, MarkerGlyph, MarkerStyle};

/// Draws the tracker's `MapProjection` as marker entities and drives the
/// map camera. Requires `tracker::TrackerPlugin`.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MarkerLayer>()
            .init_resource::<MapCamera>()
            .add_systems(
                Update,
                (feed_marker_layer, sync_marker_entities)
                    .chain()
                    .after(tracker::TrackerSet::Projection),
            );
    }
}
