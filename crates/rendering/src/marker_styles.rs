//! Marker iconography keyed by marker variant and hotspot priority.
//!
//! The projection only tags markers with a variant and an optional priority;
//! every pixel-level decision lives in this table.

use bevy::prelude::*;

use tracker::ledger::HotspotPriority;
use tracker::map_projection::{Marker, MarkerVariant};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const WASTE_FILL: &str = "#10B981";
pub const USER_FILL: &str = "#2563EB";
pub const HOTSPOT_CRITICAL_FILL: &str = "#DC2626";
pub const HOTSPOT_HIGH_FILL: &str = "#EA580C";
pub const HOTSPOT_MEDIUM_FILL: &str = "#D97706";
pub const HOTSPOT_LOW_FILL: &str = "#16A34A";
pub const MARKER_STROKE: &str = "#FFFFFF";

const USER_ICON_PX: u32 = 32;
const DEFAULT_ICON_PX: u32 = 24;

/// Shape drawn inside the marker circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGlyph {
    /// Check mark on collected waste.
    Check,
    /// Concentric dot for the user's own position.
    Dot,
    /// Exclamation mark on hotspots.
    Exclamation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Fill as `#RRGGBB`.
    pub fill: &'static str,
    pub stroke: &'static str,
    /// Square icon edge in screen pixels.
    pub size_px: u32,
    /// Anchor offset from the icon's top-left corner, in pixels (x = y).
    pub anchor_px: u32,
    pub glyph: MarkerGlyph,
    /// Legend text.
    pub label: &'static str,
}

impl MarkerStyle {
    pub fn fill_color(&self) -> Color {
        hex_color(self.fill)
    }

    pub fn stroke_color(&self) -> Color {
        hex_color(self.stroke)
    }
}

/// Style for a marker variant. `priority` only matters for hotspots; a hotspot
/// without one is drawn like a LOW hotspot.
pub fn marker_style(variant: MarkerVariant, priority: Option<HotspotPriority>) -> MarkerStyle {
    match variant {
        MarkerVariant::User => MarkerStyle {
            fill: USER_FILL,
            stroke: MARKER_STROKE,
            size_px: USER_ICON_PX,
            anchor_px: USER_ICON_PX / 2,
            glyph: MarkerGlyph::Dot,
            label: "You",
        },
        MarkerVariant::Waste => MarkerStyle {
            fill: WASTE_FILL,
            stroke: MARKER_STROKE,
            size_px: DEFAULT_ICON_PX,
            anchor_px: DEFAULT_ICON_PX / 2,
            glyph: MarkerGlyph::Check,
            label: "Collected waste",
        },
        MarkerVariant::Hotspot => {
            let (fill, label) = match priority {
                Some(HotspotPriority::Critical) => (HOTSPOT_CRITICAL_FILL, "Critical hotspot"),
                Some(HotspotPriority::High) => (HOTSPOT_HIGH_FILL, "High priority hotspot"),
                Some(HotspotPriority::Medium) => (HOTSPOT_MEDIUM_FILL, "Medium priority hotspot"),
                Some(HotspotPriority::Low) | None => (HOTSPOT_LOW_FILL, "Low priority hotspot"),
            };
            MarkerStyle {
                fill,
                stroke: MARKER_STROKE,
                size_px: DEFAULT_ICON_PX,
                anchor_px: DEFAULT_ICON_PX / 2,
                glyph: MarkerGlyph::Exclamation,
                label,
            }
        }
    }
}

pub fn style_for(marker: &Marker) -> MarkerStyle {
    marker_style(marker.variant, marker.priority)
}

fn hex_color(hex: &str) -> Color {
    match Srgba::hex(hex) {
        Ok(srgba) => Color::Srgba(srgba),
        Err(e) => {
            warn!("Invalid marker color {hex:?}: {e}");
            Color::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_marker_is_larger_and_centered() {
        let style = marker_style(MarkerVariant::User, None);
        assert_eq!(style.size_px, 32);
        assert_eq!(style.anchor_px, 16);
        assert_eq!(style.fill, "#2563EB");
        assert_eq!(style.glyph, MarkerGlyph::Dot);
    }

    #[test]
    fn waste_marker_style() {
        let style = marker_style(MarkerVariant::Waste, None);
        assert_eq!(style.size_px, 24);
        assert_eq!(style.anchor_px, 12);
        assert_eq!(style.fill, "#10B981");
        assert_eq!(style.glyph, MarkerGlyph::Check);
    }

    #[test]
    fn hotspot_fill_by_priority() {
        let fill = |p| marker_style(MarkerVariant::Hotspot, Some(p)).fill;
        assert_eq!(fill(HotspotPriority::Critical), "#DC2626");
        assert_eq!(fill(HotspotPriority::High), "#EA580C");
        assert_eq!(fill(HotspotPriority::Medium), "#D97706");
        assert_eq!(fill(HotspotPriority::Low), "#16A34A");
        assert_eq!(marker_style(MarkerVariant::Hotspot, None).fill, "#16A34A");
    }

    #[test]
    fn every_fill_parses() {
        for &priority in HotspotPriority::ALL {
            let style = marker_style(MarkerVariant::Hotspot, Some(priority));
            assert!(Srgba::hex(style.fill).is_ok(), "{}", style.fill);
        }
        assert_eq!(
            marker_style(MarkerVariant::Waste, None).fill_color(),
            Color::Srgba(Srgba::rgb_u8(0x10, 0xB9, 0x81))
        );
        assert_eq!(
            marker_style(MarkerVariant::User, None).stroke_color(),
            Color::Srgba(Srgba::rgb_u8(0xFF, 0xFF, 0xFF))
        );
    }
}
