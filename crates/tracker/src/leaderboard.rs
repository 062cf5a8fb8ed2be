//! Points leaderboard across users.

use serde::{Deserialize, Serialize};

use crate::progression::{Rank, UserProgress};

/// One user as supplied by the repository collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    pub user_id: String,
    pub display_name: String,
    pub points: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

impl Contender {
    /// The local session's own row.
    pub fn current(user_id: impl Into<String>, progress: &UserProgress) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: progress.display_name().to_string(),
            points: progress.points(),
            is_current_user: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based.
    pub position: usize,
    pub user_id: String,
    pub display_name: String,
    pub points: u32,
    pub rank: Rank,
    pub is_current_user: bool,
}

/// Highest points first, ties keep their input order, at most `limit` rows.
pub fn standings(contenders: &[Contender], limit: usize) -> Vec<Standing> {
    let mut sorted: Vec<&Contender> = contenders.iter().collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));
    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, c)| Standing {
            position: index + 1,
            user_id: c.user_id.clone(),
            display_name: c.display_name.clone(),
            points: c.points,
            rank: Rank::from_points(c.points),
            is_current_user: c.is_current_user,
        })
        .collect()
}

/// Position of the current user, if they made the cut.
pub fn current_position(standings: &[Standing]) -> Option<usize> {
    standings
        .iter()
        .find(|s| s.is_current_user)
        .map(|s| s.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEADERBOARD_LIMIT;

    fn contender(id: &str, points: u32) -> Contender {
        Contender {
            user_id: id.to_string(),
            display_name: id.to_uppercase(),
            points,
            is_current_user: false,
        }
    }

    #[test]
    fn test_sorted_by_points_with_positions() {
        let rows = standings(
            &[contender("a", 120), contender("b", 900), contender("c", 40)],
            LEADERBOARD_LIMIT,
        );
        let ids: Vec<&str> = rows.iter().map(|s| s.user_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].rank, Rank::TrailProtector);
        assert_eq!(rows[2].position, 3);
        assert_eq!(rows[2].rank, Rank::Beginner);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = standings(
            &[contender("first", 50), contender("second", 50)],
            LEADERBOARD_LIMIT,
        );
        assert_eq!(rows[0].user_id, "first");
        assert_eq!(rows[1].user_id, "second");
    }

    #[test]
    fn test_limit_applies() {
        let many: Vec<Contender> = (0..80).map(|i| contender(&format!("u{i}"), i * 10)).collect();
        let rows = standings(&many, LEADERBOARD_LIMIT);
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0].points, 790);
        assert_eq!(rows[49].position, 50);
    }

    #[test]
    fn test_current_user_marked() {
        let mut progress = UserProgress::new("Mingma");
        progress.rename("Mingma Sherpa");
        let me = Contender::current("me", &progress);
        let rows = standings(&[contender("x", 10), me], LEADERBOARD_LIMIT);
        assert_eq!(current_position(&rows), Some(2));
        assert_eq!(rows[1].display_name, "Mingma Sherpa");
    }
}
