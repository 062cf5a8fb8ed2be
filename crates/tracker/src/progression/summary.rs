//! Read-only views of progress for the profile screen.

use serde::{Deserialize, Serialize};

use super::types::{Achievement, Rank, UserProgress};

// =============================================================================
// Rank Progress
// =============================================================================

/// Where a point total sits between the current rank and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub current: Rank,
    pub next: Option<Rank>,
    /// Points still needed for `next`; 0 at the top rank.
    pub points_to_next: u32,
    /// Progress toward `next` as a fraction (0.0 to 1.0). 1.0 at the top rank.
    pub fraction: f32,
}

impl RankProgress {
    pub fn for_points(points: u32) -> Self {
        let current = Rank::from_points(points);
        let Some(next) = current.next() else {
            return Self {
                current,
                next: None,
                points_to_next: 0,
                fraction: 1.0,
            };
        };
        let floor = current.min_points();
        let ceiling = next.min_points();
        let range = ceiling.saturating_sub(floor);
        let fraction = if range == 0 {
            1.0
        } else {
            (points.saturating_sub(floor) as f32 / range as f32).clamp(0.0, 1.0)
        };
        Self {
            current,
            next: Some(next),
            points_to_next: ceiling.saturating_sub(points),
            fraction,
        }
    }
}

// =============================================================================
// Profile Summary
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub id: String,
    pub icon: String,
    pub description: String,
    pub requirement: String,
    pub unlocked: bool,
}

/// Everything the profile screen shows, derived from a `UserProgress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub display_name: String,
    pub points: u32,
    pub rank: String,
    pub rank_progress: RankProgress,
    pub waste_collected: u32,
    pub hotspots_reported: u32,
    pub cleanup_events: u32,
    pub achievements: Vec<AchievementStatus>,
}

impl ProgressSummary {
    pub fn of(progress: &UserProgress) -> Self {
        Self {
            display_name: progress.display_name().to_string(),
            points: progress.points(),
            rank: progress.rank().label().to_string(),
            rank_progress: RankProgress::for_points(progress.points()),
            waste_collected: progress.waste_collected(),
            hotspots_reported: progress.hotspots_reported(),
            cleanup_events: progress.cleanup_events(),
            achievements: Achievement::ALL
                .iter()
                .map(|&a| AchievementStatus {
                    id: a.id().to_string(),
                    icon: a.icon().to_string(),
                    description: a.description().to_string(),
                    requirement: a.requirement().to_string(),
                    unlocked: progress.is_unlocked(a),
                })
                .collect(),
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}
