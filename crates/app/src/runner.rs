use std::fmt;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use serde::Serialize;

use rendering::{MapMarkerEntity, RenderingPlugin};
use tracker::actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, TrackerAction};
use tracker::geo::EntryDate;
use tracker::map_projection::MapProjection;
use tracker::progression::{ProgressSummary, UserProgress};
use tracker::session::SessionDate;
use tracker::TrackerPlugin;

use crate::session_script::ScriptError;

#[derive(Debug)]
pub enum RunError {
    Usage(String),
    Script(ScriptError),
    Snapshot(save::SaveError),
    Io(std::io::Error),
    Output(serde_json::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Usage(msg) => write!(f, "{msg}"),
            RunError::Script(e) => write!(f, "{e}"),
            RunError::Snapshot(e) => write!(f, "snapshot error: {e}"),
            RunError::Io(e) => write!(f, "I/O error: {e}"),
            RunError::Output(e) => write!(f, "cannot write report: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Usage(_) => None,
            RunError::Script(e) => Some(e),
            RunError::Snapshot(e) => Some(e),
            RunError::Io(e) => Some(e),
            RunError::Output(e) => Some(e),
        }
    }
}

impl From<ScriptError> for RunError {
    fn from(e: ScriptError) -> Self {
        RunError::Script(e)
    }
}

impl From<save::SaveError> for RunError {
    fn from(e: save::SaveError) -> Self {
        RunError::Snapshot(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Output(e)
    }
}

/// Outcome of one scripted action.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: &'static str,
    pub result: ActionResult,
}

/// What the runner prints when the script is done.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
    pub summary: ProgressSummary,
    pub map: MapProjection,
    pub rendered_markers: usize,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.result.is_success()).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
    /// Install `LogPlugin`. Only one per process may do so.
    pub logging: bool,
    pub date: Option<EntryDate>,
}

/// A headless tracker session: `MinimalPlugins` + `TrackerPlugin` +
/// `RenderingPlugin`, stepped one frame per action.
pub struct SessionRunner {
    app: App,
}

impl SessionRunner {
    pub fn new(options: RunnerOptions) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if options.logging {
            app.add_plugins(LogPlugin::default());
        }
        app.add_plugins((TrackerPlugin, RenderingPlugin));
        if let Some(date) = options.date {
            app.insert_resource(SessionDate(date));
        }
        app.update();
        Self { app }
    }

    /// Replace the session state with a previously taken snapshot.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), save::SaveError> {
        save::restore_world(self.app.world_mut(), bytes)?;
        self.app.update();
        Ok(())
    }

    pub fn snapshot(&self) -> Result<Vec<u8>, save::SaveError> {
        save::snapshot_world(self.app.world())
    }

    /// Run each action in its own frame, so every result is read back before
    /// the next action is queued.
    pub fn run(&mut self, actions: Vec<TrackerAction>) -> Vec<StepReport> {
        let total = actions.len();
        let mut steps = Vec::with_capacity(total);
        for (index, action) in actions.into_iter().enumerate() {
            let label = action.label();
            self.app
                .world_mut()
                .resource_mut::<ActionQueue>()
                .push(ActionSource::Script, action);
            self.app.update();

            let result = self
                .app
                .world()
                .resource::<ActionResultLog>()
                .last()
                .map(|(_, r)| r.clone())
                .unwrap_or(ActionResult::Success);
            steps.push(StepReport {
                step: index + 1,
                action: label,
                result,
            });
        }
        info!(
            "Script finished: {} action(s), {} rejected",
            total,
            steps.iter().filter(|s| !s.result.is_success()).count()
        );
        steps
    }

    pub fn report(&mut self, steps: Vec<StepReport>) -> RunReport {
        let world = self.app.world_mut();
        let rendered_markers = world.query::<&MapMarkerEntity>().iter(world).count();
        RunReport {
            steps,
            summary: ProgressSummary::of(world.resource::<UserProgress>()),
            map: world.resource::<MapProjection>().clone(),
            rendered_markers,
        }
    }
}
