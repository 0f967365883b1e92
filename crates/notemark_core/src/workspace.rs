//! Application-state controller over one slot store.
//!
//! # Responsibility
//! - Own the tag registry and note repository bound to one store.
//! - Expose the full mutation surface and the derived hydrated view.
//! - Memoize hydration behind explicit version counters on the two
//!   source collections.
//!
//! # Invariants
//! - Every mutation bumps the owning collection's version, so a stale
//!   hydrated view can never be served after a change.
//! - Hydration itself stays a pure join; the cache only decides when
//!   to recompute it.
//! - Single-writer: callers drive the workspace from one event loop,
//!   so no internal locking exists.

use crate::model::note::{Note, NoteData, NoteId};
use crate::model::tag::{Tag, TagId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::tag_registry::TagRegistry;
use crate::store::{SlotStore, StoreResult};

struct HydratedCache {
    notes_version: u64,
    tags_version: u64,
    notes: Vec<Note>,
}

/// Single owner of all note-taking state for one store.
pub struct Workspace {
    store: Box<dyn SlotStore>,
    tags: TagRegistry,
    notes: NoteRepository,
    notes_version: u64,
    tags_version: u64,
    cache: Option<HydratedCache>,
}

impl Workspace {
    /// Opens a workspace over `store`, loading both collections.
    ///
    /// Corrupt or absent slots load as empty collections.
    pub fn open(store: Box<dyn SlotStore>) -> Self {
        let tags = TagRegistry::load(store.as_ref());
        let notes = NoteRepository::load(store.as_ref());
        Self {
            store,
            tags,
            notes,
            notes_version: 0,
            tags_version: 0,
            cache: None,
        }
    }

    /// Returns every tag in creation order.
    pub fn tags(&self) -> &[Tag] {
        self.tags.all()
    }

    /// Creates a tag, persists, and returns it.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn create_tag(&mut self, label: &str) -> StoreResult<Tag> {
        let tag = self.tags.create(self.store.as_mut(), label)?;
        self.tags_version += 1;
        Ok(tag)
    }

    /// Renames a tag; silent no-op for unknown ids.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn rename_tag(&mut self, id: TagId, label: &str) -> StoreResult<()> {
        self.tags.rename(self.store.as_mut(), id, label)?;
        self.tags_version += 1;
        Ok(())
    }

    /// Deletes a tag; silent no-op for unknown ids.
    ///
    /// Notes still referencing the id keep it; hydration drops it.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn delete_tag(&mut self, id: TagId) -> StoreResult<()> {
        self.tags.delete(self.store.as_mut(), id)?;
        self.tags_version += 1;
        Ok(())
    }

    /// Creates a note from staged fields, persists, and returns its id.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn create_note(&mut self, data: NoteData) -> StoreResult<NoteId> {
        let id = self.notes.create(self.store.as_mut(), data)?;
        self.notes_version += 1;
        Ok(id)
    }

    /// Replaces every field of one note; silent no-op for unknown ids.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn update_note(&mut self, id: NoteId, data: NoteData) -> StoreResult<()> {
        self.notes.update(self.store.as_mut(), id, data)?;
        self.notes_version += 1;
        Ok(())
    }

    /// Deletes one note; silent no-op for unknown ids.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<()> {
        self.notes.delete(self.store.as_mut(), id)?;
        self.notes_version += 1;
        Ok(())
    }

    /// Returns the hydrated view of every note, in collection order.
    ///
    /// Recomputes the join only when a collection changed since the
    /// last call; otherwise serves the cached value.
    pub fn hydrated_notes(&mut self) -> &[Note] {
        let stale = match &self.cache {
            Some(cache) => {
                cache.notes_version != self.notes_version || cache.tags_version != self.tags_version
            }
            None => true,
        };
        if stale {
            self.cache = Some(HydratedCache {
                notes_version: self.notes_version,
                tags_version: self.tags_version,
                notes: self.notes.hydrate(&self.tags),
            });
        }
        match &self.cache {
            Some(cache) => &cache.notes,
            None => &[],
        }
    }

    /// Returns the hydrated form of one note, if it exists.
    pub fn find_note(&mut self, id: NoteId) -> Option<Note> {
        self.hydrated_notes()
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }
}
