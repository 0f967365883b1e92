//! Global tag collection and its mutation API.
//!
//! # Responsibility
//! - Own the ordered tag collection loaded from the `TAGS` slot.
//! - Provide create/rename/delete with persist-on-mutate semantics.
//!
//! # Invariants
//! - Labels are stored verbatim: no trimming, no case folding, no
//!   uniqueness constraint.
//! - Deleting a tag does not rewrite note references; the hydration
//!   join drops dangling ids lazily.

use crate::model::tag::{Tag, TagId};
use crate::store::{read_collection, write_collection, SlotStore, StoreResult, TAGS_SLOT};
use log::{debug, info};

/// Owner of the persisted tag collection.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    /// Loads the registry from the `TAGS` slot.
    ///
    /// Absent or corrupt slot content yields an empty registry.
    pub fn load(store: &dyn SlotStore) -> Self {
        let tags = read_collection(store, TAGS_SLOT);
        Self { tags }
    }

    /// Returns every tag in creation order.
    pub fn all(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up one tag by id.
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Creates a tag with a fresh id, persists, and returns it.
    ///
    /// Always succeeds apart from storage failure; duplicate labels are
    /// allowed.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn create(&mut self, store: &mut dyn SlotStore, label: &str) -> StoreResult<Tag> {
        let tag = Tag::new(label);
        self.tags.push(tag.clone());
        self.persist(store)?;
        info!("event=tag_create module=repo status=ok id={}", tag.id);
        Ok(tag)
    }

    /// Replaces the label of the tag with matching id.
    ///
    /// Silent no-op when the id is unknown.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn rename(&mut self, store: &mut dyn SlotStore, id: TagId, label: &str) -> StoreResult<()> {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                tag.label = label.to_string();
                info!("event=tag_rename module=repo status=ok id={id}");
            }
            None => debug!("event=tag_rename module=repo status=noop id={id}"),
        }
        self.persist(store)
    }

    /// Removes the tag with matching id.
    ///
    /// Silent no-op when the id is unknown. Note references to the
    /// deleted id stay in place and are dropped at hydration time.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn delete(&mut self, store: &mut dyn SlotStore, id: TagId) -> StoreResult<()> {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        if self.tags.len() == before {
            debug!("event=tag_delete module=repo status=noop id={id}");
        } else {
            info!("event=tag_delete module=repo status=ok id={id}");
        }
        self.persist(store)
    }

    fn persist(&self, store: &mut dyn SlotStore) -> StoreResult<()> {
        write_collection(store, TAGS_SLOT, &self.tags)
    }
}
