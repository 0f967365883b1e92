//! Transient editing sessions.
//!
//! # Responsibility
//! - Stage note field edits outside the persisted collections until an
//!   explicit submit.
//!
//! # See also
//! - `crate::workspace` for the commit targets.

pub mod form;
