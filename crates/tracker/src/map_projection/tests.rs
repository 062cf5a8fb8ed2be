use crate::geo::{BoundingBox, Coordinate, EntryDate};
use crate::ledger::{
    HotspotId, HotspotPriority, HotspotReport, WasteCategory, WasteEntry, WasteEntryId,
};
use crate::map_projection::*;

fn at(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

fn waste(id: u64, coordinate: Option<Coordinate>) -> WasteEntry {
    WasteEntry {
        id: WasteEntryId(id),
        category: WasteCategory::PlasticBottles,
        location_label: format!("Camp {id}"),
        coordinate,
        photo: None,
        created_on: EntryDate::from_ymd(2025, 10, 1).unwrap(),
        verified: false,
    }
}

fn hotspot(id: u64, coordinate: Coordinate, priority: HotspotPriority) -> HotspotReport {
    HotspotReport {
        id: HotspotId(id),
        title: format!("Dump site {id}"),
        location_label: "Trail".to_string(),
        description: None,
        coordinate,
        priority,
        report_count: 1,
    }
}

#[test]
fn test_empty_projection_uses_default_viewport() {
    let config = MapConfig::default();
    let projection = project(&config, None, &[], &[]);
    assert!(projection.markers.is_empty());
    assert_eq!(
        projection.viewport,
        Viewport::Default {
            center: at(28.2, 84.5),
            zoom: 8
        }
    );
}

#[test]
fn test_single_hotspot_centers_at_close_zoom() {
    let config = MapConfig::default();
    let hotspots = [hotspot(1, at(28.0, 86.8), HotspotPriority::High)];
    let projection = project(&config, None, &[], &hotspots);

    assert_eq!(projection.markers.len(), 1);
    let marker = &projection.markers[0];
    assert_eq!(marker.variant, MarkerVariant::Hotspot);
    assert_eq!(marker.coordinate, at(28.0, 86.8));
    assert_eq!(marker.priority, Some(HotspotPriority::High));
    assert_eq!(
        projection.viewport,
        Viewport::Centered {
            center: at(28.0, 86.8),
            zoom: 14
        }
    );
}

#[test]
fn test_three_markers_fit_bounding_box() {
    let config = MapConfig::default();
    let entries = [waste(1, Some(at(28.0, 86.0)))];
    let hotspots = [hotspot(1, at(29.0, 87.0), HotspotPriority::Medium)];
    let projection = project(&config, Some(at(27.0, 85.0)), &entries, &hotspots);

    assert_eq!(projection.markers.len(), 3);
    assert_eq!(
        projection.viewport,
        Viewport::Bounds(BoundingBox {
            min_latitude: 27.0,
            max_latitude: 29.0,
            min_longitude: 85.0,
            max_longitude: 87.0,
        })
    );
}

#[test]
fn test_marker_order_user_then_waste_then_hotspots() {
    let config = MapConfig::default();
    let entries = [waste(1, Some(at(28.1, 84.1))), waste(2, Some(at(28.2, 84.2)))];
    let hotspots = [hotspot(7, at(28.3, 84.3), HotspotPriority::Low)];
    let projection = project(&config, Some(at(28.0, 84.0)), &entries, &hotspots);

    let ids: Vec<String> = projection.markers.iter().map(|m| m.id.to_string()).collect();
    assert_eq!(ids, ["user-location", "waste-1", "waste-2", "hotspot-7"]);
    assert_eq!(projection.markers[0].title, "You are here");
    assert_eq!(projection.markers[1].title, "Plastic bottles - Camp 1");
    assert_eq!(projection.markers[3].title, "Dump site 7");
}

#[test]
fn test_viewport_is_order_independent() {
    let config = MapConfig::default();
    let points = [at(27.5, 86.1), at(28.9, 83.9), at(28.1, 85.0), at(27.9, 84.2)];
    let forward = fit_viewport(&config, points);
    let backward = fit_viewport(&config, points.iter().rev().copied());
    assert_eq!(forward, backward);
}

#[test]
fn test_bounds_exactly_enclose_every_marker() {
    let config = MapConfig::default();
    let entries: Vec<WasteEntry> = (1..=6)
        .map(|i| waste(i, Some(at(27.0 + i as f64 * 0.3, 84.0 + i as f64 * 0.1))))
        .collect();
    let projection = project(&config, None, &entries, &[]);

    let Viewport::Bounds(bounds) = projection.viewport else {
        panic!("expected bounds, got {:?}", projection.viewport);
    };
    for marker in &projection.markers {
        assert!(bounds.contains(marker.coordinate));
    }
    let lats: Vec<f64> = projection.markers.iter().map(|m| m.coordinate.latitude).collect();
    assert_eq!(bounds.min_latitude, lats.iter().copied().fold(f64::MAX, f64::min));
    assert_eq!(bounds.max_latitude, lats.iter().copied().fold(f64::MIN, f64::max));
}

#[test]
fn test_waste_without_coordinate_is_skipped() {
    let config = MapConfig::default();
    let entries = [waste(1, None), waste(2, Some(at(28.0, 85.0)))];
    let projection = project(&config, None, &entries, &[]);
    assert_eq!(projection.markers.len(), 1);
    assert_eq!(projection.markers[0].id, MarkerId::Waste(WasteEntryId(2)));
    assert!(matches!(projection.viewport, Viewport::Centered { .. }));
}

#[test]
fn test_marker_ids_stable_across_projections() {
    let config = MapConfig::default();
    let mut entries = vec![waste(3, Some(at(28.0, 85.0)))];
    let first = project(&config, None, &entries, &[]);
    entries.push(waste(4, Some(at(28.5, 85.5))));
    let second = project(&config, None, &entries, &[]);

    assert_eq!(first.markers[0].id, second.markers[0].id);
    assert!(second.marker(MarkerId::Waste(WasteEntryId(4))).is_some());
    assert_eq!(second.count_of(MarkerVariant::Waste), 2);
}

#[test]
fn test_custom_close_zoom() {
    let config = MapConfig {
        close_zoom: 16,
        ..MapConfig::default()
    };
    let projection = project(&config, Some(at(27.7, 85.3)), &[], &[]);
    assert_eq!(
        projection.viewport,
        Viewport::Centered {
            center: at(27.7, 85.3),
            zoom: 16
        }
    );
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<&'static str>,
    markers: Vec<MarkerId>,
    viewport: Option<Viewport>,
}

impl MapRenderer for RecordingRenderer {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.calls.push("render_markers");
        self.markers = markers.iter().map(|m| m.id).collect();
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.push("set_viewport");
        self.viewport = Some(viewport);
    }
}

#[test]
fn test_publish_feeds_renderer() {
    let config = MapConfig::default();
    let hotspots = [hotspot(2, at(28.0, 86.8), HotspotPriority::Critical)];
    let projection = project(&config, Some(at(27.0, 85.0)), &[], &hotspots);

    let mut renderer = RecordingRenderer::default();
    publish(&mut renderer, &projection);

    assert_eq!(renderer.calls, ["render_markers", "set_viewport"]);
    assert_eq!(
        renderer.markers,
        [MarkerId::UserLocation, MarkerId::Hotspot(HotspotId(2))]
    );
    assert_eq!(renderer.viewport, Some(projection.viewport));
}
