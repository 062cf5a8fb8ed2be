use serde::{Deserialize, Serialize};

use crate::geo::EntryDate;
use crate::ledger::{EventId, HotspotSubmission, WasteSubmission};
use crate::progression::ActionKind;

/// Everything a session can ask the tracker to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackerAction {
    SubmitWaste(WasteSubmission),
    ReportHotspot(HotspotSubmission),
    JoinEvent {
        event_id: EventId,
    },
    PostEvent {
        title: String,
        location_label: String,
        date: EntryDate,
        #[serde(default)]
        max_participants: Option<u32>,
    },
    /// Both absent means the position is unavailable.
    UpdateLocation {
        #[serde(default)]
        latitude: Option<f64>,
        #[serde(default)]
        longitude: Option<f64>,
    },
    Rename {
        name: String,
    },
    SetDate {
        date: EntryDate,
    },
}

impl TrackerAction {
    /// The progression kind this action feeds once accepted, if any.
    pub fn progression_kind(&self) -> Option<ActionKind> {
        match self {
            TrackerAction::SubmitWaste(_) => Some(ActionKind::WasteEntry),
            TrackerAction::ReportHotspot(_) => Some(ActionKind::HotspotReport),
            TrackerAction::JoinEvent { .. } => Some(ActionKind::EventJoin),
            TrackerAction::PostEvent { .. }
            | TrackerAction::UpdateLocation { .. }
            | TrackerAction::Rename { .. }
            | TrackerAction::SetDate { .. } => None,
        }
    }

    /// Short name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            TrackerAction::SubmitWaste(_) => "submit_waste",
            TrackerAction::ReportHotspot(_) => "report_hotspot",
            TrackerAction::JoinEvent { .. } => "join_event",
            TrackerAction::PostEvent { .. } => "post_event",
            TrackerAction::UpdateLocation { .. } => "update_location",
            TrackerAction::Rename { .. } => "rename",
            TrackerAction::SetDate { .. } => "set_date",
        }
    }
}
