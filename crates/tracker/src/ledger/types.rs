use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, EntryDate};

// =============================================================================
// Waste Category
// =============================================================================

/// Kinds of waste a trekker can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum WasteCategory {
    #[serde(rename = "Plastic bottles")]
    PlasticBottles,
    #[serde(rename = "Food packaging")]
    FoodPackaging,
    #[serde(rename = "Batteries")]
    Batteries,
    #[serde(rename = "Cans/Metal")]
    CansMetal,
    #[serde(rename = "Glass")]
    Glass,
    #[serde(rename = "Paper/Cardboard")]
    PaperCardboard,
    #[serde(rename = "Other")]
    Other,
}

impl WasteCategory {
    pub const ALL: &'static [WasteCategory] = &[
        WasteCategory::PlasticBottles,
        WasteCategory::FoodPackaging,
        WasteCategory::Batteries,
        WasteCategory::CansMetal,
        WasteCategory::Glass,
        WasteCategory::PaperCardboard,
        WasteCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::PlasticBottles => "Plastic bottles",
            WasteCategory::FoodPackaging => "Food packaging",
            WasteCategory::Batteries => "Batteries",
            WasteCategory::CansMetal => "Cans/Metal",
            WasteCategory::Glass => "Glass",
            WasteCategory::PaperCardboard => "Paper/Cardboard",
            WasteCategory::Other => "Other",
        }
    }

    /// Match a form label, ignoring surrounding whitespace and case.
    pub fn from_label(label: &str) -> Option<WasteCategory> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Hotspot Priority
// =============================================================================

/// Severity of a reported pollution hotspot, least to most urgent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum HotspotPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl HotspotPriority {
    pub const ALL: &'static [HotspotPriority] = &[
        HotspotPriority::Low,
        HotspotPriority::Medium,
        HotspotPriority::High,
        HotspotPriority::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HotspotPriority::Low => "LOW",
            HotspotPriority::Medium => "MEDIUM",
            HotspotPriority::High => "HIGH",
            HotspotPriority::Critical => "CRITICAL",
        }
    }

    /// Lenient parse: missing or unrecognized values fall back to `Medium`.
    pub fn parse(value: Option<&str>) -> HotspotPriority {
        let Some(value) = value.map(str::trim) else {
            return HotspotPriority::default();
        };
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

impl fmt::Display for HotspotPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Identities
// =============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WasteEntryId(pub u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HotspotId(pub u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for WasteEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A logged waste collection.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: WasteEntryId,
    pub category: WasteCategory,
    pub location_label: String,
    pub coordinate: Option<Coordinate>,
    /// Opaque reference to an uploaded photo (URL or storage key).
    pub photo: Option<String>,
    pub created_on: EntryDate,
    /// Set by the moderation collaborator; always false for new entries.
    pub verified: bool,
}

/// A reported pollution hotspot.
#[derive(Debug, Clone, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct HotspotReport {
    pub id: HotspotId,
    pub title: String,
    pub location_label: String,
    pub description: Option<String>,
    pub coordinate: Coordinate,
    pub priority: HotspotPriority,
    /// Number of merged duplicate reports. Starts at 1; only the repository
    /// collaborator increments it.
    pub report_count: u32,
}

/// The user joined a cleanup event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct EventJoin {
    pub event_id: EventId,
    pub joined_on: EntryDate,
}

// =============================================================================
// Submissions (unvalidated input)
// =============================================================================

/// Raw waste-entry form input, validated by `ActivityLedger::add_waste_entry`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteSubmission {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location_label: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Raw hotspot form input, validated by `ActivityLedger::add_hotspot_report`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotspotSubmission {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location_label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub priority: Option<String>,
}
