//! Domain model for tagged markdown notes.
//!
//! # Responsibility
//! - Define the persisted shapes (`Tag`, `RawNote`) and the derived
//!   hydrated shape (`Note`) used by core business logic.
//! - Keep serialization names stable against the persisted slot format.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - `Note` is derived state only and is never written back to storage.

pub mod note;
pub mod tag;
