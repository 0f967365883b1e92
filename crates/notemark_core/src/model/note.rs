//! Note domain model: persisted and hydrated shapes.
//!
//! # Responsibility
//! - Define `RawNote`, the shape written to the `NOTES` slot, which
//!   references tags by id only.
//! - Define `Note`, the derived shape with tag references resolved to
//!   full [`Tag`] values.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `tag_ids` may contain ids of tags that no longer exist; resolution
//!   drops them silently instead of failing.
//! - Updates replace title/teaser/markdown/tag_ids wholesale; there is
//!   no partial-field patch operation.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Full field bundle accepted by note create/update operations.
///
/// Carries resolved tags rather than ids so callers can stage tags they
/// just created without an extra lookup round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteData {
    pub title: String,
    /// Optional short summary shown on list cards. May be empty.
    pub teaser: String,
    /// Raw markdown source.
    pub markdown: String,
    /// Tags in the order the caller selected them.
    pub tags: Vec<Tag>,
}

/// Persisted note shape stored in the `NOTES` slot.
///
/// The serialized field name `tagIds` is part of the slot format and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNote {
    pub id: NoteId,
    pub title: String,
    pub teaser: String,
    pub markdown: String,
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<TagId>,
}

impl RawNote {
    /// Builds a persisted note from staged field values with a fresh ID.
    ///
    /// Tag order is preserved as given by the caller.
    pub fn from_data(data: NoteData) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            teaser: data.teaser,
            markdown: data.markdown,
            tag_ids: data.tags.into_iter().map(|tag| tag.id).collect(),
        }
    }

    /// Replaces every user-editable field from staged values.
    ///
    /// The note keeps its identity; everything else is overwritten, so
    /// no stale field can survive an update.
    pub fn replace_data(&mut self, data: NoteData) {
        self.title = data.title;
        self.teaser = data.teaser;
        self.markdown = data.markdown;
        self.tag_ids = data.tags.into_iter().map(|tag| tag.id).collect();
    }
}

/// Hydrated note: `tag_ids` resolved into full tags.
///
/// Pure derived state. Recomputed from the current note and tag
/// collections; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub teaser: String,
    pub markdown: String,
    /// Resolved tags in `tag_ids` order, with dangling ids dropped.
    pub tags: Vec<Tag>,
}
