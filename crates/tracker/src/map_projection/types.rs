use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CLOSE_MAP_ZOOM, DEFAULT_MAP_LATITUDE, DEFAULT_MAP_LONGITUDE, DEFAULT_MAP_ZOOM};
use crate::geo::{BoundingBox, Coordinate};
use crate::ledger::{HotspotId, HotspotPriority, WasteEntryId};

// =============================================================================
// Marker
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerVariant {
    User,
    Waste,
    Hotspot,
}

/// Marker identity, derived from the source record so that it is stable
/// across projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerId {
    UserLocation,
    Waste(WasteEntryId),
    Hotspot(HotspotId),
}

impl MarkerId {
    pub fn variant(self) -> MarkerVariant {
        match self {
            MarkerId::UserLocation => MarkerVariant::User,
            MarkerId::Waste(_) => MarkerVariant::Waste,
            MarkerId::Hotspot(_) => MarkerVariant::Hotspot,
        }
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerId::UserLocation => f.write_str("user-location"),
            MarkerId::Waste(id) => write!(f, "waste-{id}"),
            MarkerId::Hotspot(id) => write!(f, "hotspot-{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub coordinate: Coordinate,
    pub title: String,
    pub variant: MarkerVariant,
    /// Set for hotspot markers only.
    pub priority: Option<HotspotPriority>,
}

// =============================================================================
// Viewport
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    /// Nothing to plot; the configured overview.
    Default { center: Coordinate, zoom: u8 },
    /// Exactly one marker, shown at close zoom.
    Centered { center: Coordinate, zoom: u8 },
    /// Two or more markers; the smallest box containing all of them.
    Bounds(BoundingBox),
}

impl Viewport {
    pub fn center(&self) -> Coordinate {
        match self {
            Viewport::Default { center, .. } | Viewport::Centered { center, .. } => *center,
            Viewport::Bounds(bounds) => bounds.center(),
        }
    }
}

/// Output of one projection: what to draw and where to look.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapProjection {
    pub markers: Vec<Marker>,
    pub viewport: Viewport,
}

impl Default for MapProjection {
    fn default() -> Self {
        let config = MapConfig::default();
        Self {
            markers: Vec::new(),
            viewport: config.default_viewport(),
        }
    }
}

impl MapProjection {
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn count_of(&self, variant: MarkerVariant) -> usize {
        self.markers.iter().filter(|m| m.variant == variant).count()
    }
}

// =============================================================================
// Map Config
// =============================================================================

/// Viewport constants used by the projector.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub close_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new_unchecked(DEFAULT_MAP_LATITUDE, DEFAULT_MAP_LONGITUDE),
            default_zoom: DEFAULT_MAP_ZOOM,
            close_zoom: CLOSE_MAP_ZOOM,
        }
    }
}

impl MapConfig {
    pub fn default_viewport(&self) -> Viewport {
        Viewport::Default {
            center: self.default_center,
            zoom: self.default_zoom,
        }
    }
}
