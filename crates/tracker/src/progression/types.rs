use std::collections::BTreeSet;
use std::fmt;

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::tables::compute_rank;

// =============================================================================
// Action Kind
// =============================================================================

/// What the user did. Anything the engine does not recognize deserializes to
/// `Unknown`, which awards nothing and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    WasteEntry,
    HotspotReport,
    EventJoin,
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Rank
// =============================================================================

/// Rank tiers, lowest first. Ordering follows the point thresholds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
pub enum Rank {
    Beginner,
    GreenRookie,
    NatureHelper,
    EcoWarrior,
    TrailProtector,
    MountainGuardian,
}

impl Rank {
    pub const ALL: &'static [Rank] = &[
        Rank::Beginner,
        Rank::GreenRookie,
        Rank::NatureHelper,
        Rank::EcoWarrior,
        Rank::TrailProtector,
        Rank::MountainGuardian,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Beginner => "Beginner",
            Rank::GreenRookie => "Green Rookie",
            Rank::NatureHelper => "Nature Helper",
            Rank::EcoWarrior => "Eco Warrior",
            Rank::TrailProtector => "Trail Protector",
            Rank::MountainGuardian => "Mountain Guardian",
        }
    }

    /// Points needed to hold this rank.
    pub fn min_points(self) -> u32 {
        match self {
            Rank::Beginner => 0,
            Rank::GreenRookie => 50,
            Rank::NatureHelper => 100,
            Rank::EcoWarrior => 200,
            Rank::TrailProtector => 500,
            Rank::MountainGuardian => 1000,
        }
    }

    pub fn from_points(points: u32) -> Rank {
        compute_rank(points)
    }

    /// The next tier up, or `None` at the top.
    pub fn next(self) -> Option<Rank> {
        let idx = Self::ALL.iter().position(|&r| r == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Achievement Definition
// =============================================================================

/// Milestones a trekker can unlock. Declaration order is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
pub enum Achievement {
    FirstCleanup,     // 1 waste entry
    WasteWarrior,     // 5 waste entries
    CommunityBuilder, // 2 cleanup events
    MountainGuardian, // 10 waste entries and 3 hotspots
    HotspotHunter,    // 5 hotspots
    PointsMaster,     // 500 points
}

impl Achievement {
    /// All achievement variants for iteration.
    pub const ALL: &'static [Achievement] = &[
        Achievement::FirstCleanup,
        Achievement::WasteWarrior,
        Achievement::CommunityBuilder,
        Achievement::MountainGuardian,
        Achievement::HotspotHunter,
        Achievement::PointsMaster,
    ];

    /// Stable identifier, shared with the notification and profile collaborators.
    pub fn id(self) -> &'static str {
        self.name()
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstCleanup => "First Cleanup",
            Achievement::WasteWarrior => "Waste Warrior",
            Achievement::CommunityBuilder => "Community Builder",
            Achievement::MountainGuardian => "Mountain Guardian",
            Achievement::HotspotHunter => "Hotspot Hunter",
            Achievement::PointsMaster => "Points Master",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::FirstCleanup => "🏆",
            Achievement::WasteWarrior => "♻️",
            Achievement::CommunityBuilder => "👥",
            Achievement::MountainGuardian => "🏔️",
            Achievement::HotspotHunter => "🎯",
            Achievement::PointsMaster => "⭐",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstCleanup => "Log your first waste collection",
            Achievement::WasteWarrior => "Become a dedicated waste collector",
            Achievement::CommunityBuilder => "Join community cleanup events",
            Achievement::MountainGuardian => "Protect the mountains actively",
            Achievement::HotspotHunter => "Report multiple pollution hotspots",
            Achievement::PointsMaster => "Accumulate significant points",
        }
    }

    /// What the user must do, as shown on the profile screen.
    pub fn requirement(self) -> &'static str {
        match self {
            Achievement::FirstCleanup => "Collect 1 waste item",
            Achievement::WasteWarrior => "Collect 5 waste items",
            Achievement::CommunityBuilder => "Join 2 cleanup events",
            Achievement::MountainGuardian => "Collect 10 items & report 3 hotspots",
            Achievement::HotspotHunter => "Report 5 hotspots",
            Achievement::PointsMaster => "Earn 500 points",
        }
    }

    /// The unlock predicate, evaluated against the current counters only.
    pub fn is_met(self, progress: &UserProgress) -> bool {
        match self {
            Achievement::FirstCleanup => progress.waste_collected >= 1,
            Achievement::WasteWarrior => progress.waste_collected >= 5,
            Achievement::CommunityBuilder => progress.cleanup_events >= 2,
            Achievement::MountainGuardian => {
                progress.waste_collected >= 10 && progress.hotspots_reported >= 3
            }
            Achievement::HotspotHunter => progress.hotspots_reported >= 5,
            Achievement::PointsMaster => progress.points >= 500,
        }
    }

    pub fn from_id(id: &str) -> Option<Achievement> {
        Self::ALL.iter().copied().find(|a| a.id() == id)
    }

    /// Total number of achievements.
    pub fn total_count() -> usize {
        Self::ALL.len()
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// User Progress Resource
// =============================================================================

/// Points, activity counters and unlocked achievements for one user.
///
/// Fields are private: counters and points change only through
/// [`apply`](super::apply), and the unlocked set only ever grows. The rank is
/// not stored; [`UserProgress::rank`] derives it from points on every call.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct UserProgress {
    display_name: String,
    points: u32,
    waste_collected: u32,
    hotspots_reported: u32,
    cleanup_events: u32,
    unlocked: BTreeSet<Achievement>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl UserProgress {
    pub const DEFAULT_NAME: &'static str = "Trekker";

    /// Fresh progress: zero points, nothing unlocked.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            points: 0,
            waste_collected: 0,
            hotspots_reported: 0,
            cleanup_events: 0,
            unlocked: BTreeSet::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn rank(&self) -> Rank {
        compute_rank(self.points)
    }

    pub fn waste_collected(&self) -> u32 {
        self.waste_collected
    }

    pub fn hotspots_reported(&self) -> u32 {
        self.hotspots_reported
    }

    pub fn cleanup_events(&self) -> u32 {
        self.cleanup_events
    }

    pub fn unlocked(&self) -> &BTreeSet<Achievement> {
        &self.unlocked
    }

    /// Returns true if the given achievement is unlocked.
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    /// Returns the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Change the display name. Blank input keeps the current name; returns
    /// whether the name changed.
    pub fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.display_name {
            return false;
        }
        self.display_name = name.to_string();
        true
    }

    /// Bump the counter for `kind` and add `award` points.
    pub(crate) fn record(&mut self, kind: ActionKind, award: u32) {
        match kind {
            ActionKind::WasteEntry => self.waste_collected = self.waste_collected.saturating_add(1),
            ActionKind::HotspotReport => {
                self.hotspots_reported = self.hotspots_reported.saturating_add(1)
            }
            ActionKind::EventJoin => self.cleanup_events = self.cleanup_events.saturating_add(1),
            ActionKind::Unknown => return,
        }
        self.points = self.points.saturating_add(award);
    }

    /// Union `newly` into the unlocked set. Never removes anything.
    pub(crate) fn grant(&mut self, newly: &BTreeSet<Achievement>) {
        self.unlocked.extend(newly.iter().copied());
    }
}
