//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notemark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notemark_core::store::MemoryStore;
use notemark_core::Workspace;

fn main() {
    let mut workspace = Workspace::open(Box::new(MemoryStore::new()));
    let note_count = workspace.hydrated_notes().len();
    let tag_count = workspace.tags().len();
    println!("notemark_core version={}", notemark_core::core_version());
    println!("notemark_core empty_workspace notes={note_count} tags={tag_count}");
}
