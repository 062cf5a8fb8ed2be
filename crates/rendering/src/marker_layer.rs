use std::collections::HashMap;

use bevy::prelude::*;

use tracker::geo::Coordinate;
use tracker::ledger::HotspotPriority;
use tracker::map_projection::{
    publish, MapConfig, MapProjection, MapRenderer, Marker, MarkerId, MarkerVariant, Viewport,
};

use crate::marker_styles::{style_for, MarkerStyle};

// =============================================================================
// Resources and components
// =============================================================================

/// The marker set and viewport most recently handed over by the tracker.
#[derive(Resource, Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    viewport: Option<Viewport>,
}

impl MarkerLayer {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl MapRenderer for MarkerLayer {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }
}

/// Where the map view is looking.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub viewport: Viewport,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            viewport: MapConfig::default().default_viewport(),
        }
    }
}

/// One drawn marker. Entities are matched to markers by `id`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MapMarkerEntity {
    pub id: MarkerId,
    pub coordinate: Coordinate,
    pub title: String,
    pub variant: MarkerVariant,
    pub priority: Option<HotspotPriority>,
    pub style: MarkerStyle,
    /// Position in the draw order; later markers draw on top.
    pub draw_order: usize,
}

impl MapMarkerEntity {
    fn from_marker(marker: &Marker, draw_order: usize) -> Self {
        Self {
            id: marker.id,
            coordinate: marker.coordinate,
            title: marker.title.clone(),
            variant: marker.variant,
            priority: marker.priority,
            style: style_for(marker),
            draw_order,
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Hand a changed `MapProjection` to the marker layer.
pub fn feed_marker_layer(projection: Res<MapProjection>, mut layer: ResMut<MarkerLayer>) {
    if !projection.is_changed() {
        return;
    }
    publish(layer.as_mut(), &projection);
}

/// Keep `MapMarkerEntity` entities and the `MapCamera` in sync with the
/// layer: spawn new markers, update moved or retitled ones, despawn stale ones.
pub fn sync_marker_entities(
    mut commands: Commands,
    layer: Res<MarkerLayer>,
    mut camera: ResMut<MapCamera>,
    mut existing: Query<(Entity, &mut MapMarkerEntity)>,
) {
    if !layer.is_changed() {
        return;
    }

    let mut by_id: HashMap<MarkerId, Entity> = HashMap::with_capacity(existing.iter().len());
    for (entity, drawn) in &existing {
        by_id.insert(drawn.id, entity);
    }

    let (mut spawned, mut updated) = (0usize, 0usize);
    for (draw_order, marker) in layer.markers().iter().enumerate() {
        let next = MapMarkerEntity::from_marker(marker, draw_order);
        match by_id.remove(&marker.id) {
            Some(entity) => {
                if let Ok((_, mut drawn)) = existing.get_mut(entity) {
                    if *drawn != next {
                        *drawn = next;
                        updated += 1;
                    }
                }
            }
            None => {
                commands.spawn((Name::new(marker.id.to_string()), next));
                spawned += 1;
            }
        }
    }

    let despawned = by_id.len();
    for (_, entity) in by_id {
        commands.entity(entity).despawn();
    }

    if let Some(viewport) = layer.viewport() {
        if camera.viewport != viewport {
            camera.viewport = viewport;
        }
    }

    if spawned + updated + despawned > 0 {
        debug!(
            "Map markers synced: {} spawned, {} updated, {} despawned",
            spawned, updated, despawned
        );
    }
}
