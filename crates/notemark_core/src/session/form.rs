//! Note create/edit form session.
//!
//! # Responsibility
//! - Hold staged field values for one create or edit interaction.
//! - Validate required fields and commit staged values as a single
//!   whole-record create/update.
//!
//! # Invariants
//! - An edit session snapshots the note once at start; concurrent
//!   changes to the underlying note do not flow back in.
//! - Inline tag creation persists the tag immediately; cancelling the
//!   session does not remove it.
//! - A rejected submit mutates nothing; the session stays usable.

use crate::model::note::{Note, NoteData, NoteId};
use crate::model::tag::Tag;
use crate::store::StoreError;
use crate::workspace::Workspace;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submit failure for a form session.
#[derive(Debug)]
pub enum SessionError {
    /// Title is empty or whitespace-only.
    MissingTitle,
    /// Markdown body is empty or whitespace-only.
    MissingBody,
    /// Persistence failed while committing.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingBody => write!(f, "markdown body is required"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Commit target fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit creates a new note.
    Create,
    /// Submit replaces the note with this id.
    Edit(NoteId),
}

/// Staged editing state for one create or edit interaction.
///
/// Cancelling is dropping the session: staged fields vanish, already
/// committed inline tags stay.
#[derive(Debug, Clone)]
pub struct FormSession {
    mode: FormMode,
    pub title: String,
    pub teaser: String,
    pub markdown: String,
    /// Tags currently attached to the staged note, in selection order.
    pub selected_tags: Vec<Tag>,
}

impl FormSession {
    /// Starts a create session with all fields empty.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            teaser: String::new(),
            markdown: String::new(),
            selected_tags: Vec::new(),
        }
    }

    /// Starts an edit session pre-populated from one hydrated note.
    pub fn edit(note: &Note) -> Self {
        Self {
            mode: FormMode::Edit(note.id),
            title: note.title.clone(),
            teaser: note.teaser.clone(),
            markdown: note.markdown.clone(),
            selected_tags: note.tags.clone(),
        }
    }

    /// Returns the commit target chosen at session start.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Creates a tag globally and selects it in this session.
    ///
    /// The tag is persisted right away; it survives even if this
    /// session is later cancelled.
    ///
    /// # Errors
    /// Returns an error when the slot write fails.
    pub fn add_tag_inline(&mut self, workspace: &mut Workspace, label: &str) -> Result<Tag, StoreError> {
        let tag = workspace.create_tag(label)?;
        self.selected_tags.push(tag.clone());
        Ok(tag)
    }

    /// Validates required fields without committing.
    ///
    /// # Errors
    /// Returns the first missing required field. Teaser is optional.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.title.trim().is_empty() {
            return Err(SessionError::MissingTitle);
        }
        if self.markdown.trim().is_empty() {
            return Err(SessionError::MissingBody);
        }
        Ok(())
    }

    /// Commits staged values as one create or whole-record update.
    ///
    /// On success the session is over and the note's id is returned;
    /// callers navigate away and drop the session. On validation
    /// failure nothing is mutated and the session stays open.
    ///
    /// # Errors
    /// Returns a validation error for missing required fields, or a
    /// store error when the commit write fails.
    pub fn submit(&self, workspace: &mut Workspace) -> Result<NoteId, SessionError> {
        self.validate()?;
        let data = NoteData {
            title: self.title.clone(),
            teaser: self.teaser.clone(),
            markdown: self.markdown.clone(),
            tags: self.selected_tags.clone(),
        };
        match self.mode {
            FormMode::Create => Ok(workspace.create_note(data)?),
            FormMode::Edit(id) => {
                workspace.update_note(id, data)?;
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormMode, FormSession, SessionError};

    #[test]
    fn create_session_starts_empty() {
        let session = FormSession::create();
        assert_eq!(session.mode(), FormMode::Create);
        assert!(session.title.is_empty());
        assert!(session.selected_tags.is_empty());
    }

    #[test]
    fn validate_requires_title_then_body() {
        let mut session = FormSession::create();
        assert!(matches!(
            session.validate(),
            Err(SessionError::MissingTitle)
        ));

        session.title = "  \t ".to_string();
        assert!(matches!(
            session.validate(),
            Err(SessionError::MissingTitle)
        ));

        session.title = "Plan".to_string();
        assert!(matches!(session.validate(), Err(SessionError::MissingBody)));

        session.markdown = "# Q1".to_string();
        assert!(session.validate().is_ok());
    }
}
