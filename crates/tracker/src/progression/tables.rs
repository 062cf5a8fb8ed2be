//! Static point-award and rank-threshold tables.

use super::types::{ActionKind, Rank};

/// Points awarded per action kind. Kinds not listed award nothing.
pub const POINT_AWARDS: &[(ActionKind, u32)] = &[
    (ActionKind::WasteEntry, 25),
    (ActionKind::HotspotReport, 25),
    (ActionKind::EventJoin, 50),
];

/// Rank thresholds, highest first. The first entry whose minimum is met wins.
pub const RANK_THRESHOLDS: &[(u32, Rank)] = &[
    (1000, Rank::MountainGuardian),
    (500, Rank::TrailProtector),
    (200, Rank::EcoWarrior),
    (100, Rank::NatureHelper),
    (50, Rank::GreenRookie),
];

/// Look up the award for an action kind; unknown kinds award 0.
pub fn award_for(kind: ActionKind) -> u32 {
    POINT_AWARDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|&(_, points)| points)
        .unwrap_or(0)
}

/// Rank for a point total.
pub fn compute_rank(points: u32) -> Rank {
    RANK_THRESHOLDS
        .iter()
        .find(|&&(min, _)| points >= min)
        .map(|&(_, rank)| rank)
        .unwrap_or(Rank::Beginner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_table() {
        assert_eq!(award_for(ActionKind::WasteEntry), 25);
        assert_eq!(award_for(ActionKind::HotspotReport), 25);
        assert_eq!(award_for(ActionKind::EventJoin), 50);
        assert_eq!(award_for(ActionKind::Unknown), 0);
    }

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(compute_rank(0), Rank::Beginner);
        assert_eq!(compute_rank(49), Rank::Beginner);
        assert_eq!(compute_rank(50), Rank::GreenRookie);
        assert_eq!(compute_rank(99), Rank::GreenRookie);
        assert_eq!(compute_rank(100), Rank::NatureHelper);
        assert_eq!(compute_rank(200), Rank::EcoWarrior);
        assert_eq!(compute_rank(499), Rank::EcoWarrior);
        assert_eq!(compute_rank(500), Rank::TrailProtector);
        assert_eq!(compute_rank(999), Rank::TrailProtector);
        assert_eq!(compute_rank(1000), Rank::MountainGuardian);
        assert_eq!(compute_rank(u32::MAX), Rank::MountainGuardian);
    }

    #[test]
    fn test_thresholds_agree_with_rank_minimums() {
        for &(min, rank) in RANK_THRESHOLDS {
            assert_eq!(rank.min_points(), min, "{rank}");
        }
        assert_eq!(Rank::Beginner.min_points(), 0);
    }

    #[test]
    fn test_rank_non_decreasing_in_points() {
        let mut previous = compute_rank(0);
        for points in 0..=1_200u32 {
            let rank = compute_rank(points);
            assert!(rank >= previous, "rank dropped at {points} points");
            previous = rank;
        }
    }
}
