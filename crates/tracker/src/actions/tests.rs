use super::*;
use crate::cleanup_events::JoinError;
use crate::geo::EntryDate;
use crate::ledger::{EventId, Field, ValidationError, WasteSubmission};
use crate::progression::{Achievement, ActionKind};

#[test]
fn test_tracker_action_serialization() {
    let action = TrackerAction::SubmitWaste(WasteSubmission {
        category: "Glass".into(),
        location_label: "Tengboche".into(),
        latitude: Some(27.836),
        longitude: Some(86.764),
        photo: None,
    });
    let json = serde_json::to_string(&action).unwrap();
    let decoded: TrackerAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);

    let action = TrackerAction::PostEvent {
        title: "Trail sweep".into(),
        location_label: "Lukla".into(),
        date: EntryDate::from_ymd(2025, 11, 2).unwrap(),
        max_participants: Some(20),
    };
    let json = serde_json::to_string(&action).unwrap();
    assert!(json.contains("\"date\":\"2025-11-02\""));
    let decoded: TrackerAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);
}

#[test]
fn test_script_style_json_parses() {
    let script = r#"[
        {"type": "submit_waste", "category": "Batteries", "location_label": "Dingboche"},
        {"type": "report_hotspot", "title": "Burn pit", "location_label": "Lobuche",
         "latitude": 27.95, "longitude": 86.81, "priority": "high"},
        {"type": "join_event", "event_id": 1},
        {"type": "update_location"},
        {"type": "set_date", "date": "2025-10-05"}
    ]"#;
    let actions: Vec<TrackerAction> = serde_json::from_str(script).unwrap();
    assert_eq!(actions.len(), 5);
    assert_eq!(
        actions[0].progression_kind(),
        Some(ActionKind::WasteEntry)
    );
    assert_eq!(
        actions[2],
        TrackerAction::JoinEvent {
            event_id: EventId(1)
        }
    );
    assert_eq!(
        actions[3],
        TrackerAction::UpdateLocation {
            latitude: None,
            longitude: None
        }
    );
    assert_eq!(actions[4].progression_kind(), None);
}

#[test]
fn test_action_result_serialization() {
    let res = ActionResult::Progressed {
        points_awarded: 25,
        unlocked: vec![Achievement::FirstCleanup],
    };
    let json = serde_json::to_string(&res).unwrap();
    let decoded: ActionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(res, decoded);

    let res = ActionResult::Error(ActionError::Validation(ValidationError::MissingField(
        Field::Category,
    )));
    let json = serde_json::to_string(&res).unwrap();
    let decoded: ActionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(res, decoded);
    assert!(!decoded.is_success());
}

#[test]
fn test_action_error_wraps_sources() {
    let err: ActionError = JoinError::EventFull(EventId(4)).into();
    assert_eq!(err.to_string(), "could not join: event 4 is full");
    assert!(std::error::Error::source(&err).is_some());

    let err: ActionError = ValidationError::MissingField(Field::Title).into();
    assert!(err.to_string().contains("title"));
}
