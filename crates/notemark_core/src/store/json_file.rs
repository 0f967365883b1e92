//! File-backed slot store.
//!
//! # Responsibility
//! - Map each slot name to one JSON file under a base directory.
//! - Keep slot writes synchronous: content is on disk when the call
//!   returns.
//!
//! # Invariants
//! - Slot names map to `<dir>/<KEY>.json`; callers use the fixed slot
//!   constants, so names are never user-controlled paths.

use super::{SlotStore, StoreResult};
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable slot store writing one JSON file per slot.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!(
            "event=store_open module=store status=ok dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for JsonFileStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_slot(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        fs::write(self.slot_path(key), payload)?;
        Ok(())
    }
}
