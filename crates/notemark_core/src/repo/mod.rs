//! Collection ownership layer.
//!
//! # Responsibility
//! - Own the in-memory note and tag collections and their mutation
//!   APIs.
//! - Re-persist the owning slot after every mutation, before returning
//!   to the caller.
//!
//! # Invariants
//! - Mutations targeting an absent id are silent no-ops, never errors.
//! - The tag registry owns the `TAGS` slot; the note repository owns
//!   the `NOTES` slot; neither writes the other's slot.

pub mod note_repo;
pub mod tag_registry;
