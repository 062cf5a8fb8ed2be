//! Saveable implementation for ActivityLedger.

use super::activity::ActivityLedger;
use crate::Saveable;

impl Saveable for ActivityLedger {
    const SAVE_KEY: &'static str = "activity_ledger";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
