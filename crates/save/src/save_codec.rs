// ---------------------------------------------------------------------------
// Payload encoding: the keyed extension map produced by SaveableRegistry
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

use bitcode::{Decode, Encode};

use crate::save_error::SaveError;

/// Snapshot payload: one bitcode blob per registered `Saveable`, keyed by its
/// `SAVE_KEY`. Keys unknown to the loading build are ignored on restore.
#[derive(Encode, Decode, Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotPayload {
    pub extensions: BTreeMap<String, Vec<u8>>,
}

impl SnapshotPayload {
    pub fn new(extensions: BTreeMap<String, Vec<u8>>) -> Self {
        Self { extensions }
    }

    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SaveError> {
        Ok(bitcode::decode(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_preserves_keys_and_bytes() {
        let mut extensions = BTreeMap::new();
        extensions.insert("activity_ledger".to_string(), vec![1, 2, 3]);
        extensions.insert("user_progress".to_string(), vec![]);
        let payload = SnapshotPayload::new(extensions);

        let decoded = SnapshotPayload::decode(&payload.encode()).unwrap();
        assert_eq!(decoded, payload);
        assert_eq!(decoded.extensions["activity_ledger"], vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert!(matches!(
            SnapshotPayload::decode(&[]),
            Err(SaveError::Decode(_))
        ));
    }
}
