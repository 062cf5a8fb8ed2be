//! Action executor system: drains the [`ActionQueue`] each update, validates
//! every action at the ledger or event board, feeds accepted contributions to
//! the progression engine and records results in the [`ActionResultLog`].

use std::borrow::Cow;

use bevy::prelude::*;

use crate::cleanup_events::EventBoard;
use crate::geo::EntryDate;
use crate::ledger::{
    optional_coordinate, ActivityLedger, Field, ValidationError, WasteSubmission,
};
use crate::map_projection::CurrentLocation;
use crate::notifications::{AchievementNotification, AchievementUnlocked};
use crate::progression::{self, ActionKind, UserProgress};
use crate::session::SessionDate;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, TrackerAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
#[allow(clippy::too_many_arguments)]
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut today: ResMut<SessionDate>,
    mut ledger: ResMut<ActivityLedger>,
    mut board: ResMut<EventBoard>,
    mut progress: ResMut<UserProgress>,
    mut location: ResMut<CurrentLocation>,
    mut notifications: ResMut<AchievementNotification>,
    mut unlocked_events: EventWriter<AchievementUnlocked>,
) {
    if queue.is_empty() {
        return;
    }

    for queued in queue.drain() {
        let outcome = execute_single(
            &queued.action,
            &mut today,
            &mut ledger,
            &mut board,
            &mut progress,
            &mut location,
        );

        let result = match outcome {
            Ok(Outcome::Accepted(kind)) => {
                let update = progression::apply(&progress, kind);
                for &achievement in &update.newly_unlocked {
                    info!(
                        "Achievement unlocked: {} {} ({} points)",
                        achievement.icon(),
                        achievement.name(),
                        update.next.points()
                    );
                    notifications.push(achievement);
                    unlocked_events.send(AchievementUnlocked {
                        achievement,
                        points: update.next.points(),
                        rank: update.next.rank(),
                    });
                }
                let result = ActionResult::Progressed {
                    points_awarded: update.points_awarded,
                    unlocked: update.newly_unlocked.iter().copied().collect(),
                };
                *progress = update.next;
                result
            }
            Ok(Outcome::Done) => ActionResult::Success,
            Ok(Outcome::Warning(message)) => ActionResult::SuccessWithWarning(message),
            Err(error) => {
                warn!(
                    "Action #{} {} rejected: {}",
                    queued.seq,
                    queued.action.label(),
                    error
                );
                ActionResult::Error(error)
            }
        };
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// A waste form without a position is stamped with the user's current
/// location, if one is known.
fn with_current_location<'a>(
    submission: &'a WasteSubmission,
    location: &CurrentLocation,
) -> Cow<'a, WasteSubmission> {
    match (submission.latitude, submission.longitude, location.0) {
        (None, None, Some(here)) => Cow::Owned(WasteSubmission {
            latitude: Some(here.latitude),
            longitude: Some(here.longitude),
            ..submission.clone()
        }),
        _ => Cow::Borrowed(submission),
    }
}

enum Outcome {
    /// Recorded in the ledger; progression must follow.
    Accepted(ActionKind),
    Done,
    Warning(String),
}

fn execute_single(
    action: &TrackerAction,
    today: &mut SessionDate,
    ledger: &mut ActivityLedger,
    board: &mut EventBoard,
    progress: &mut UserProgress,
    location: &mut CurrentLocation,
) -> Result<Outcome, ActionError> {
    match action {
        TrackerAction::SubmitWaste(submission) => {
            let submission = with_current_location(submission, location);
            ledger.add_waste_entry(&submission, today.0)?;
            Ok(Outcome::Accepted(ActionKind::WasteEntry))
        }
        TrackerAction::ReportHotspot(submission) => {
            ledger.add_hotspot_report(submission)?;
            Ok(Outcome::Accepted(ActionKind::HotspotReport))
        }
        TrackerAction::JoinEvent { event_id } => {
            board.join(*event_id, ledger, today.0)?;
            Ok(Outcome::Accepted(ActionKind::EventJoin))
        }
        TrackerAction::PostEvent {
            title,
            location_label,
            date,
            max_participants,
        } => execute_post_event(title, location_label, *date, *max_participants, board),
        TrackerAction::UpdateLocation {
            latitude,
            longitude,
        } => {
            let next = optional_coordinate(*latitude, *longitude)?;
            if location.0 != next {
                location.0 = next;
            }
            Ok(Outcome::Done)
        }
        TrackerAction::Rename { name } => {
            if progress.rename(name) {
                Ok(Outcome::Done)
            } else {
                Ok(Outcome::Warning(format!(
                    "display name unchanged: {:?}",
                    progress.display_name()
                )))
            }
        }
        TrackerAction::SetDate { date } => {
            today.0 = *date;
            Ok(Outcome::Done)
        }
    }
}

fn execute_post_event(
    title: &str,
    location_label: &str,
    date: EntryDate,
    max_participants: Option<u32>,
    board: &mut EventBoard,
) -> Result<Outcome, ActionError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingField(Field::Title).into());
    }
    let location_label = location_label.trim();
    if location_label.is_empty() {
        return Err(ValidationError::MissingField(Field::LocationLabel).into());
    }
    if max_participants == Some(0) {
        return Err(ActionError::InvalidParameter(
            "max_participants must be at least 1".to_string(),
        ));
    }
    let id = board.post(title, location_label, date, max_participants);
    debug!("Posted cleanup event {} on {}", id, date);
    Ok(Outcome::Done)
}
