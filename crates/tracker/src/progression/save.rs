//! Saveable implementation for UserProgress.
//!
//! Persists points, counters, display name and the unlocked set so that a
//! restored session never re-announces an achievement.

use super::types::UserProgress;
use crate::Saveable;

impl Saveable for UserProgress {
    const SAVE_KEY: &'static str = "user_progress";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if *self == UserProgress::default() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
