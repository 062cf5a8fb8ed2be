use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::geo::EntryDate;

use super::types::{
    EventId, EventJoin, HotspotId, HotspotReport, HotspotSubmission, WasteCategory, WasteEntry,
    WasteEntryId, WasteSubmission,
};
use super::validation::{optional_coordinate, require_text, Field, ValidationError};

// =============================================================================
// Activity Ledger Resource
// =============================================================================

/// Append-only record of one user's waste entries, hotspot reports and event
/// joins. Records are kept in insertion order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ActivityLedger {
    waste: Vec<WasteEntry>,
    hotspots: Vec<HotspotReport>,
    joins: Vec<EventJoin>,
    last_waste_id: u64,
    last_hotspot_id: u64,
}

impl ActivityLedger {
    /// Rebuild a ledger from records supplied by the repository. New ids
    /// continue after the highest loaded id.
    pub fn from_records(
        waste: Vec<WasteEntry>,
        hotspots: Vec<HotspotReport>,
        joins: Vec<EventJoin>,
    ) -> Self {
        let last_waste_id = waste.iter().map(|e| e.id.0).max().unwrap_or(0);
        let last_hotspot_id = hotspots.iter().map(|h| h.id.0).max().unwrap_or(0);
        Self {
            waste,
            hotspots,
            joins,
            last_waste_id,
            last_hotspot_id,
        }
    }

    /// Validate and append a waste entry dated `today`.
    pub fn add_waste_entry(
        &mut self,
        submission: &WasteSubmission,
        today: EntryDate,
    ) -> Result<WasteEntry, ValidationError> {
        let category_label = require_text(&submission.category, Field::Category)?;
        let category = WasteCategory::from_label(&category_label)
            .ok_or(ValidationError::UnknownCategory(category_label))?;
        let location_label = require_text(&submission.location_label, Field::LocationLabel)?;
        let coordinate = optional_coordinate(submission.latitude, submission.longitude)?;

        self.last_waste_id += 1;
        let entry = WasteEntry {
            id: WasteEntryId(self.last_waste_id),
            category,
            location_label,
            coordinate,
            photo: submission.photo.clone().filter(|p| !p.trim().is_empty()),
            created_on: today,
            verified: false,
        };
        self.waste.push(entry.clone());
        Ok(entry)
    }

    /// Validate and append a hotspot report. Unknown or missing priorities
    /// become `Medium`.
    pub fn add_hotspot_report(
        &mut self,
        submission: &HotspotSubmission,
    ) -> Result<HotspotReport, ValidationError> {
        let title = require_text(&submission.title, Field::Title)?;
        let location_label = require_text(&submission.location_label, Field::LocationLabel)?;
        let coordinate = optional_coordinate(submission.latitude, submission.longitude)?
            .ok_or(ValidationError::MissingField(Field::Coordinate))?;

        self.last_hotspot_id += 1;
        let report = HotspotReport {
            id: HotspotId(self.last_hotspot_id),
            title,
            location_label,
            description: submission
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            coordinate,
            priority: super::HotspotPriority::parse(submission.priority.as_deref()),
            report_count: 1,
        };
        self.hotspots.push(report.clone());
        Ok(report)
    }

    /// Append an event join. Capacity and duplicate checks belong to the
    /// event board, which is the only caller.
    pub(crate) fn record_event_join(&mut self, event_id: EventId, today: EntryDate) -> EventJoin {
        let join = EventJoin {
            event_id,
            joined_on: today,
        };
        self.joins.push(join);
        join
    }

    pub fn has_joined(&self, event_id: EventId) -> bool {
        self.joins.iter().any(|j| j.event_id == event_id)
    }

    pub fn waste_count(&self) -> usize {
        self.waste.len()
    }

    pub fn hotspot_count(&self) -> usize {
        self.hotspots.len()
    }

    pub fn event_join_count(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waste.is_empty() && self.hotspots.is_empty() && self.joins.is_empty()
    }

    /// Snapshot of every waste entry.
    pub fn all_entries(&self) -> Vec<WasteEntry> {
        self.waste.clone()
    }

    /// Snapshot of every hotspot report.
    pub fn all_hotspots(&self) -> Vec<HotspotReport> {
        self.hotspots.clone()
    }

    pub fn all_joins(&self) -> Vec<EventJoin> {
        self.joins.clone()
    }

    /// Borrowed view for callers that only read within the current frame.
    pub fn entries(&self) -> &[WasteEntry] {
        &self.waste
    }

    pub fn hotspots(&self) -> &[HotspotReport] {
        &self.hotspots
    }

    pub fn waste_entry(&self, id: WasteEntryId) -> Option<&WasteEntry> {
        self.waste.iter().find(|e| e.id == id)
    }

    pub fn hotspot(&self, id: HotspotId) -> Option<&HotspotReport> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}
