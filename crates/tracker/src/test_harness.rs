//! # TestSession: headless harness for tracker integration tests
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `TrackerPlugin` behind a fluent
//! builder. Queue actions, call `tick()`, then assert on resources.

use bevy::app::App;
use bevy::prelude::*;

use crate::actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, TrackerAction};
use crate::cleanup_events::EventBoard;
use crate::geo::{Coordinate, EntryDate};
use crate::ledger::{ActivityLedger, EventId, HotspotSubmission, WasteSubmission};
use crate::map_projection::{CurrentLocation, MapProjection};
use crate::notifications::{AchievementNotification, AchievementUnlocked};
use crate::progression::UserProgress;
use crate::session::SessionDate;
use crate::TrackerPlugin;

/// A headless Bevy App wrapping `TrackerPlugin`.
pub struct TestSession {
    app: App,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Fresh session dated 2025-10-01 with nothing recorded.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(TrackerPlugin);
        if let Some(date) = EntryDate::from_ymd(2025, 10, 1) {
            app.insert_resource(SessionDate(date));
        }
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern: consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_date(mut self, date: EntryDate) -> Self {
        self.app.insert_resource(SessionDate(date));
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        let coordinate = Coordinate::new(latitude, longitude).ok();
        self.app.insert_resource(CurrentLocation(coordinate));
        self
    }

    pub fn with_progress(mut self, progress: UserProgress) -> Self {
        self.app.insert_resource(progress);
        self
    }

    /// Post an event directly on the board, bypassing the action queue.
    pub fn with_event(mut self, title: &str, max_participants: Option<u32>) -> Self {
        let date = self.app.world().resource::<SessionDate>().0;
        self.app
            .world_mut()
            .resource_mut::<EventBoard>()
            .post(title, "Trailhead", date, max_participants);
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn queue(&mut self, action: TrackerAction) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::User, action);
        self
    }

    /// Queue a waste entry with a coordinate.
    pub fn submit_waste(&mut self, category: &str, latitude: f64, longitude: f64) -> &mut Self {
        self.queue(TrackerAction::SubmitWaste(WasteSubmission {
            category: category.to_string(),
            location_label: "Trail".to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            photo: None,
        }))
    }

    pub fn report_hotspot(&mut self, title: &str, latitude: f64, longitude: f64) -> &mut Self {
        self.queue(TrackerAction::ReportHotspot(HotspotSubmission {
            title: title.to_string(),
            location_label: "Trail".to_string(),
            description: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
            priority: None,
        }))
    }

    pub fn join_event(&mut self, event_id: u64) -> &mut Self {
        self.queue(TrackerAction::JoinEvent {
            event_id: EventId(event_id),
        })
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Run `n` frames of the `Update` schedule.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn progress(&self) -> &UserProgress {
        self.resource::<UserProgress>()
    }

    pub fn ledger(&self) -> &ActivityLedger {
        self.resource::<ActivityLedger>()
    }

    pub fn projection(&self) -> &MapProjection {
        self.resource::<MapProjection>()
    }

    pub fn last_result(&self) -> Option<&ActionResult> {
        self.resource::<ActionResultLog>().last().map(|(_, r)| r)
    }

    /// Drain the pending notification queue.
    pub fn take_notifications(&mut self) -> Vec<crate::progression::Achievement> {
        self.app
            .world_mut()
            .resource_mut::<AchievementNotification>()
            .take()
    }

    /// Every `AchievementUnlocked` event still buffered.
    pub fn unlocked_events(&self) -> Vec<AchievementUnlocked> {
        let events = self.resource::<Events<AchievementUnlocked>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).copied().collect()
    }
}
