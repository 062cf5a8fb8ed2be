//! Pure projection of the ledger and the user's position into map markers.

use crate::config::USER_MARKER_TITLE;
use crate::geo::{BoundingBox, Coordinate};
use crate::ledger::{HotspotReport, WasteEntry};

use super::types::{MapConfig, MapProjection, Marker, MarkerId, MarkerVariant, Viewport};

/// Build the marker list and a viewport that fits it.
///
/// Marker order is the user marker (when `location` is known), then waste
/// entries, then hotspots, each group in input order. Waste entries logged
/// without a coordinate have nothing to plot and are skipped.
pub fn project(
    config: &MapConfig,
    location: Option<Coordinate>,
    waste_entries: &[WasteEntry],
    hotspot_reports: &[HotspotReport],
) -> MapProjection {
    let mut markers = Vec::with_capacity(
        usize::from(location.is_some()) + waste_entries.len() + hotspot_reports.len(),
    );

    if let Some(coordinate) = location {
        markers.push(Marker {
            id: MarkerId::UserLocation,
            coordinate,
            title: USER_MARKER_TITLE.to_string(),
            variant: MarkerVariant::User,
            priority: None,
        });
    }

    markers.extend(waste_entries.iter().filter_map(|entry| {
        let coordinate = entry.coordinate?;
        Some(Marker {
            id: MarkerId::Waste(entry.id),
            coordinate,
            title: format!("{} - {}", entry.category.label(), entry.location_label),
            variant: MarkerVariant::Waste,
            priority: None,
        })
    }));

    markers.extend(hotspot_reports.iter().map(|report| Marker {
        id: MarkerId::Hotspot(report.id),
        coordinate: report.coordinate,
        title: report.title.clone(),
        variant: MarkerVariant::Hotspot,
        priority: Some(report.priority),
    }));

    let viewport = fit_viewport(config, markers.iter().map(|m| m.coordinate));
    MapProjection { markers, viewport }
}

/// Viewport for a set of coordinates: the default overview for none, a close
/// zoom on a single point, otherwise the enclosing bounding box.
pub fn fit_viewport<I>(config: &MapConfig, coordinates: I) -> Viewport
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut iter = coordinates.into_iter();
    let Some(first) = iter.next() else {
        return config.default_viewport();
    };
    let Some(second) = iter.next() else {
        return Viewport::Centered {
            center: first,
            zoom: config.close_zoom,
        };
    };

    let mut bounds = BoundingBox::around(first);
    bounds.extend(second);
    for coordinate in iter {
        bounds.extend(coordinate);
    }
    Viewport::Bounds(bounds)
}
