//! Optional remote mirror seam.
//!
//! # Responsibility
//! - Define the adapter contract for an external "also save remotely"
//!   action.
//! - Keep mirroring strictly fire-and-forget: the outcome is logged
//!   and reported back to the caller, never folded into core state.
//!
//! # Invariants
//! - A mirror failure never blocks or rolls back a local mutation.
//! - Core ships no network implementation; adapters live outside.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload accepted by a remote mirror adapter.
///
/// Field names follow the remote contract: the markdown source travels
/// as `body`, tags as plain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPayload {
    pub title: String,
    pub teaser: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl MirrorPayload {
    /// Builds the mirror payload from one hydrated note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            teaser: note.teaser.clone(),
            body: note.markdown.clone(),
            tags: note.tags.iter().map(|tag| tag.label.clone()).collect(),
        }
    }
}

/// Failure reported by a mirror adapter.
///
/// Shown to the user as a transient notice; local state is unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorError {
    pub message: String,
}

impl Display for MirrorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "remote mirror rejected note: {}", self.message)
    }
}

impl Error for MirrorError {}

/// Adapter contract for mirroring one note to an external service.
pub trait RemoteMirror {
    /// Sends one payload; returns confirmation or a rejection notice.
    fn save(&self, payload: &MirrorPayload) -> Result<(), MirrorError>;
}

/// Mirror adapter that acknowledges every payload without sending it.
///
/// Default wiring when no remote backend is configured.
#[derive(Debug, Default)]
pub struct NullMirror;

impl RemoteMirror for NullMirror {
    fn save(&self, payload: &MirrorPayload) -> Result<(), MirrorError> {
        log::debug!(
            "event=mirror_save module=mirror status=skipped title_len={}",
            payload.title.len()
        );
        Ok(())
    }
}
