//! The progression reducer: `(previous progress, action) -> (next progress, unlocks)`.

use std::collections::BTreeSet;

use super::tables::award_for;
use super::types::{Achievement, ActionKind, UserProgress};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub next: UserProgress,
    /// Achievements that crossed from locked to unlocked on this action.
    pub newly_unlocked: BTreeSet<Achievement>,
    pub points_awarded: u32,
}

/// Apply one action to `previous`. Never fails: unknown kinds return an
/// unchanged copy with nothing unlocked.
pub fn apply(previous: &UserProgress, kind: ActionKind) -> ProgressUpdate {
    if kind == ActionKind::Unknown {
        return ProgressUpdate {
            next: previous.clone(),
            newly_unlocked: BTreeSet::new(),
            points_awarded: 0,
        };
    }

    let award = award_for(kind);
    let mut next = previous.clone();
    next.record(kind, award);

    let newly_unlocked = newly_crossed(previous, &next);
    next.grant(&newly_unlocked);

    ProgressUpdate {
        next,
        newly_unlocked,
        points_awarded: award,
    }
}

/// Achievements whose predicate holds on `next`, did not hold on `previous`,
/// and are not already in `previous`'s unlocked set.
pub fn newly_crossed(previous: &UserProgress, next: &UserProgress) -> BTreeSet<Achievement> {
    Achievement::ALL
        .iter()
        .copied()
        .filter(|&a| a.is_met(next) && !a.is_met(previous) && !previous.is_unlocked(a))
        .collect()
}

// =============================================================================
// Replay
// =============================================================================

/// One unlock observed during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockRecord {
    /// Zero-based index of the action that triggered the unlock.
    pub step: usize,
    pub achievement: Achievement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub progress: UserProgress,
    pub unlocks: Vec<UnlockRecord>,
}

/// Fold `apply` over a sequence of actions starting from `initial`.
pub fn replay<I>(initial: UserProgress, kinds: I) -> Replay
where
    I: IntoIterator<Item = ActionKind>,
{
    let mut progress = initial;
    let mut unlocks = Vec::new();
    for (step, kind) in kinds.into_iter().enumerate() {
        let update = apply(&progress, kind);
        unlocks.extend(
            update
                .newly_unlocked
                .iter()
                .map(|&achievement| UnlockRecord { step, achievement }),
        );
        progress = update.next;
    }
    Replay { progress, unlocks }
}
