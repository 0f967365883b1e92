//! In-memory slot store for tests and ephemeral workspaces.

use super::{SlotStore, StoreResult};
use std::collections::BTreeMap;

/// Volatile slot store backed by a plain map.
///
/// Behaviorally identical to [`super::JsonFileStore`] except nothing
/// survives the process. The in-memory analogue keeps repository and
/// workspace tests free of filesystem setup.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
