//! Community cleanup events and the join flow that feeds `EventJoin` actions
//! into the ledger.

use std::fmt;

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::geo::EntryDate;
use crate::ledger::{ActivityLedger, EventId, EventJoin};
use crate::Saveable;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub id: EventId,
    pub title: String,
    pub location_label: String,
    pub date: EntryDate,
    pub participants: u32,
    /// `None` means unlimited.
    pub max_participants: Option<u32>,
}

impl CleanupEvent {
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.participants >= max)
    }

    /// Open places, or `None` when the event is unlimited.
    pub fn spots_left(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participants))
    }
}

/// Why a join was refused. A refused join never awards points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinError {
    UnknownEvent(EventId),
    EventFull(EventId),
    AlreadyJoined(EventId),
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::UnknownEvent(id) => write!(f, "event {id} not found"),
            JoinError::EventFull(id) => write!(f, "event {id} is full"),
            JoinError::AlreadyJoined(id) => write!(f, "already registered for event {id}"),
        }
    }
}

impl std::error::Error for JoinError {}

// =============================================================================
// Event Board Resource
// =============================================================================

/// Every cleanup event the session knows about, in posting order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct EventBoard {
    events: Vec<CleanupEvent>,
    last_id: u64,
}

impl EventBoard {
    /// Post a new event with no participants yet.
    pub fn post(
        &mut self,
        title: impl Into<String>,
        location_label: impl Into<String>,
        date: EntryDate,
        max_participants: Option<u32>,
    ) -> EventId {
        self.last_id += 1;
        let id = EventId(self.last_id);
        self.events.push(CleanupEvent {
            id,
            title: title.into(),
            location_label: location_label.into(),
            date,
            participants: 0,
            max_participants,
        });
        id
    }

    pub fn get(&self, id: EventId) -> Option<&CleanupEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events(&self) -> &[CleanupEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events dated on or after `from`, earliest first.
    pub fn upcoming(&self, from: EntryDate) -> Vec<&CleanupEvent> {
        let mut upcoming: Vec<&CleanupEvent> =
            self.events.iter().filter(|e| e.date >= from).collect();
        upcoming.sort_by_key(|e| e.date);
        upcoming
    }

    /// Register the user for an event and record the join in the ledger.
    pub fn join(
        &mut self,
        event_id: EventId,
        ledger: &mut ActivityLedger,
        today: EntryDate,
    ) -> Result<EventJoin, JoinError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(JoinError::UnknownEvent(event_id))?;
        if event.is_full() {
            return Err(JoinError::EventFull(event_id));
        }
        if ledger.has_joined(event_id) {
            return Err(JoinError::AlreadyJoined(event_id));
        }

        event.participants = event.participants.saturating_add(1);
        Ok(ledger.record_event_join(event_id, today))
    }
}

impl Saveable for EventBoard {
    const SAVE_KEY: &'static str = "event_board";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.events.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
