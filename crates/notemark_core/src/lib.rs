//! Core domain logic for notemark, a local-first tagged markdown
//! note-taking app.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod mirror;
pub mod model;
pub mod repo;
pub mod search;
pub mod session;
pub mod store;
pub mod workspace;

pub use logging::{default_log_level, init_logging, logging_status};
pub use mirror::{MirrorError, MirrorPayload, NullMirror, RemoteMirror};
pub use model::note::{Note, NoteData, NoteId, RawNote};
pub use model::tag::{Tag, TagId};
pub use repo::note_repo::{hydrate_note, NoteRepository};
pub use repo::tag_registry::TagRegistry;
pub use search::filter::NoteFilter;
pub use session::form::{FormMode, FormSession, SessionError};
pub use store::{
    JsonFileStore, MemoryStore, SlotStore, StoreError, StoreResult, NOTES_SLOT, TAGS_SLOT,
};
pub use workspace::Workspace;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
