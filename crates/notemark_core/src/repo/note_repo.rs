//! Note collection, mutation API and the hydration join.
//!
//! # Responsibility
//! - Own the ordered note collection loaded from the `NOTES` slot.
//! - Provide create/update/delete with persist-on-mutate semantics.
//! - Produce the hydrated view by joining note tag references against
//!   a tag registry snapshot.
//!
//! # Invariants
//! - `update` is whole-record replacement; no field survives from the
//!   prior version.
//! - Collection order is append order; update and delete never reorder
//!   surviving notes.
//! - `hydrate` is pure: no persistence, no mutation, deterministic for
//!   a given (notes, tags) pair.

use crate::model::note::{Note, NoteData, NoteId, RawNote};
use crate::repo::tag_registry::TagRegistry;
use crate::store::{read_collection, write_collection, SlotStore, StoreResult, NOTES_SLOT};
use log::{debug, info};

/// Owner of the persisted note collection.
#[derive(Debug, Default)]
pub struct NoteRepository {
    notes: Vec<RawNote>,
}

impl NoteRepository {
    /// Loads the repository from the `NOTES` slot.
    ///
    /// Absent or corrupt slot content yields an empty repository.
    pub fn load(store: &dyn SlotStore) -> Self {
        let notes = read_collection(store, NOTES_SLOT);
        Self { notes }
    }

    /// Returns every persisted note in append order.
    pub fn raw(&self) -> &[RawNote] {
        &self.notes
    }

    /// Looks up one persisted note by id.
    pub fn get(&self, id: NoteId) -> Option<&RawNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates a note with a fresh id, persists, and returns the id.
    ///
    /// Tag order in `data` is preserved as the stored `tag_ids` order.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn create(&mut self, store: &mut dyn SlotStore, data: NoteData) -> StoreResult<NoteId> {
        let note = RawNote::from_data(data);
        let id = note.id;
        self.notes.push(note);
        self.persist(store)?;
        info!("event=note_create module=repo status=ok id={id}");
        Ok(id)
    }

    /// Replaces every field of the note with matching id.
    ///
    /// Silent no-op when the id is unknown; a missing target never
    /// synthesizes a new note.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn update(
        &mut self,
        store: &mut dyn SlotStore,
        id: NoteId,
        data: NoteData,
    ) -> StoreResult<()> {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.replace_data(data);
                info!("event=note_update module=repo status=ok id={id}");
            }
            None => debug!("event=note_update module=repo status=noop id={id}"),
        }
        self.persist(store)
    }

    /// Removes the note with matching id.
    ///
    /// Silent no-op when the id is unknown; deletion is irreversible
    /// and leaves no tombstone.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn delete(&mut self, store: &mut dyn SlotStore, id: NoteId) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=repo status=noop id={id}");
        } else {
            info!("event=note_delete module=repo status=ok id={id}");
        }
        self.persist(store)
    }

    /// Joins every note against the given registry snapshot.
    ///
    /// Each note's `tag_ids` is mapped through the registry in its own
    /// order; ids with no matching tag are dropped silently. Note order
    /// matches the persisted collection.
    pub fn hydrate(&self, registry: &TagRegistry) -> Vec<Note> {
        self.notes
            .iter()
            .map(|note| hydrate_note(note, registry))
            .collect()
    }

    fn persist(&self, store: &mut dyn SlotStore) -> StoreResult<()> {
        write_collection(store, NOTES_SLOT, &self.notes)
    }
}

/// Resolves one persisted note against a registry snapshot.
pub fn hydrate_note(note: &RawNote, registry: &TagRegistry) -> Note {
    let tags = note
        .tag_ids
        .iter()
        .filter_map(|id| registry.get(*id).cloned())
        .collect();
    Note {
        id: note.id,
        title: note.title.clone(),
        teaser: note.teaser.clone(),
        markdown: note.markdown.clone(),
        tags,
    }
}
