//! Title/tag filter over hydrated notes.
//!
//! # Invariants
//! - Filtering is pure and stable: input order is preserved, inputs
//!   are never mutated, and equal inputs give equal output.
//! - Title matching is case-insensitive substring; the empty query
//!   matches everything.
//! - Tag matching uses AND semantics: every selected tag must appear
//!   among the note's resolved tags; the empty selection matches
//!   everything.

use crate::model::note::Note;
use crate::model::tag::Tag;

/// Filter criteria for the note list view.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Substring matched against note titles, case-insensitively.
    pub title_query: String,
    /// Tags a note must carry, all of them, to pass.
    pub tags: Vec<Tag>,
}

impl NoteFilter {
    /// Creates a filter that matches every note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether one note passes both predicates.
    pub fn matches(&self, note: &Note) -> bool {
        let title_hit = self.title_query.is_empty()
            || note
                .title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase());

        let tags_hit = self
            .tags
            .iter()
            .all(|wanted| note.tags.iter().any(|tag| tag.id == wanted.id));

        title_hit && tags_hit
    }

    /// Narrows `notes` to those passing both predicates, in input order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}
