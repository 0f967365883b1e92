//! List-view filtering entry points.
//!
//! # Responsibility
//! - Expose pure predicate-based narrowing over hydrated notes.
//! - Keep filter semantics (case folding, tag AND) inside core.

pub mod filter;
