use bevy::prelude::*;

use crate::geo::Coordinate;
use crate::ledger::ActivityLedger;

use super::projector::project;
use super::types::{MapConfig, MapProjection};

/// Last position reported by the geolocation source; `None` while unavailable.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentLocation(pub Option<Coordinate>);

/// Recompute the `MapProjection` resource when the ledger, the user's
/// position or the map config changed.
pub fn refresh_map_projection(
    config: Res<MapConfig>,
    location: Res<CurrentLocation>,
    ledger: Res<ActivityLedger>,
    mut projection: ResMut<MapProjection>,
) {
    if !(config.is_changed() || location.is_changed() || ledger.is_changed()) {
        return;
    }

    let next = project(&config, location.0, ledger.entries(), ledger.hotspots());
    debug!(
        "Map projection refreshed: {} markers, viewport {:?}",
        next.markers.len(),
        next.viewport
    );
    // Skip the write when nothing moved so renderers keyed on change
    // detection stay idle.
    if *projection != next {
        *projection = next;
    }
}
