//! Named-slot persistence boundary.
//!
//! # Responsibility
//! - Define the [`SlotStore`] contract: durable get/set of serialized
//!   payloads keyed by slot name.
//! - Provide the collection read/write helpers used by repositories,
//!   including the corrupt-payload fallback policy.
//!
//! # Invariants
//! - Reads never fail the caller: absent or unparseable slot content
//!   degrades to the empty collection and is logged, not surfaced.
//! - Writes overwrite the whole slot and complete before returning.
//! - Slots are independent; there is no cross-slot transaction.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Slot name holding the persisted note collection.
pub const NOTES_SLOT: &str = "NOTES";
/// Slot name holding the persisted tag collection.
pub const TAGS_SLOT: &str = "TAGS";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport error for slot persistence.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io failure: {err}"),
            Self::Serde(err) => write!(f, "slot encode failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Durable key-value binding for serialized collections.
///
/// Implementations own the encoding-at-rest (file layout, in-memory
/// map); the JSON payload shape is decided by the helpers below.
pub trait SlotStore {
    /// Returns the raw payload for `key`, or `None` when the slot has
    /// never been written.
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the slot named `key` with `payload`.
    ///
    /// Must be durable from the caller's point of view when it returns.
    fn write_slot(&mut self, key: &str, payload: &str) -> StoreResult<()>;
}

/// Reads one collection slot, falling back to empty on any failure.
///
/// Absent slot, unreadable slot and malformed JSON all degrade to an
/// empty collection. The fallback is logged and never surfaced as an
/// error; first write repairs the slot.
pub fn read_collection<T: DeserializeOwned>(store: &dyn SlotStore, key: &str) -> Vec<T> {
    let payload = match store.read_slot(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=slot_read module=store status=fallback slot={key} error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(err) => {
            warn!("event=slot_parse module=store status=fallback slot={key} error={err}");
            Vec::new()
        }
    }
}

/// Serializes and writes one collection slot.
pub fn write_collection<T: Serialize>(
    store: &mut dyn SlotStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let payload = serde_json::to_string_pretty(items)?;
    store.write_slot(key, &payload)
}
