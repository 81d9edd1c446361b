//! In-memory store for tests and embedders that manage their own
//! persistence. Blobs are held as JSON strings so loads and saves exercise
//! the same serialization path as the file store.

use std::collections::HashMap;
use std::sync::Mutex;

use kaizen_core::UserState;

use crate::{migrate, StateStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_blobs<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut guard = self
            .blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl StateStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<UserState>, StoreError> {
        let blob = self.with_blobs(|blobs| blobs.get(user_id).cloned());
        let Some(json) = blob else { return Ok(None) };
        let mut state: UserState =
            serde_json::from_str(&json).map_err(|source| StoreError::Decode {
                user_id: user_id.to_string(),
                source,
            })?;
        migrate::normalize_loaded(&mut state);
        Ok(Some(state))
    }

    fn save(&self, user_id: &str, state: &UserState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state).map_err(|source| StoreError::Encode {
            user_id: user_id.to_string(),
            source,
        })?;
        self.with_blobs(|blobs| {
            blobs.insert(user_id.to_string(), json);
        });
        Ok(())
    }
}
