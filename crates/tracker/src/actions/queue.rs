use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::TrackerAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    User,
    Script,
    Replay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Monotonic per queue; the executor applies actions in this order.
    pub seq: u64,
    pub source: ActionSource,
    pub action: TrackerAction,
}

/// Single FIFO of pending actions. One system drains it, so progression
/// updates are applied one at a time against the latest state.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
    next_seq: u64,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: TrackerAction) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(QueuedAction {
            seq,
            source,
            action,
        });
        seq
    }

    pub fn extend<I>(&mut self, source: ActionSource, actions: I)
    where
        I: IntoIterator<Item = TrackerAction>,
    {
        for action in actions {
            self.push(source, action);
        }
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EventId;

    #[test]
    fn push_and_drain_preserves_fifo() {
        let mut queue = ActionQueue::default();
        queue.push(
            ActionSource::User,
            TrackerAction::Rename {
                name: "Lhakpa".into(),
            },
        );
        queue.push(
            ActionSource::Script,
            TrackerAction::JoinEvent {
                event_id: EventId(3),
            },
        );

        assert_eq!(queue.len(), 2);
        let drained = queue.drain();
        assert!(queue.is_empty());

        assert_eq!(drained[0].seq, 0);
        assert_eq!(drained[0].source, ActionSource::User);
        assert_eq!(drained[1].seq, 1);
        assert_eq!(
            drained[1].action,
            TrackerAction::JoinEvent {
                event_id: EventId(3)
            }
        );
    }

    #[test]
    fn sequence_continues_after_drain() {
        let mut queue = ActionQueue::default();
        queue.push(ActionSource::User, TrackerAction::Rename { name: "a".into() });
        queue.drain();
        let seq = queue.push(ActionSource::User, TrackerAction::Rename { name: "b".into() });
        assert_eq!(seq, 1);
    }
}
