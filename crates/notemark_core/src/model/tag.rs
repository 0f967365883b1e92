//! Tag domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another tag.
//! - `label` carries no uniqueness constraint; duplicates and empty
//!   labels are allowed by design.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one tag.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TagId = Uuid;

/// User-visible label attached to notes by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable global ID used by note references and filters.
    pub id: TagId,
    /// Display string, editable at any time.
    pub label: String,
}

impl Tag {
    /// Creates a tag with a generated stable ID.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), label)
    }

    /// Creates a tag with a caller-provided stable ID.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn new_tags_get_distinct_ids() {
        let first = Tag::new("work");
        let second = Tag::new("work");
        assert_ne!(first.id, second.id);
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn serde_shape_is_id_and_label() {
        let tag = Tag::new("inbox");
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(value["label"], "inbox");
        assert!(value["id"].is_string());
    }
}
