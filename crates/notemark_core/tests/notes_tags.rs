use notemark_core::store::{JsonFileStore, MemoryStore};
use notemark_core::{NoteData, NoteFilter, Tag, Workspace};
use uuid::Uuid;

fn memory_workspace() -> Workspace {
    Workspace::open(Box::new(MemoryStore::new()))
}

fn note_data(title: &str, teaser: &str, markdown: &str, tags: Vec<Tag>) -> NoteData {
    NoteData {
        title: title.to_string(),
        teaser: teaser.to_string(),
        markdown: markdown.to_string(),
        tags,
    }
}

#[test]
fn create_update_delete_roundtrip() {
    let mut ws = memory_workspace();
    let tag = ws.create_tag("work").unwrap();
    let id = ws
        .create_note(note_data("Plan", "", "# Q1", vec![tag.clone()]))
        .unwrap();

    let created = ws.find_note(id).unwrap();
    assert_eq!(created.title, "Plan");
    assert_eq!(created.tags, vec![tag]);

    ws.update_note(id, note_data("Plan v2", "teaser", "# Q2", Vec::new()))
        .unwrap();
    let updated = ws.find_note(id).unwrap();
    assert_eq!(updated.title, "Plan v2");
    assert_eq!(updated.teaser, "teaser");
    assert_eq!(updated.markdown, "# Q2");
    assert!(updated.tags.is_empty());

    ws.delete_note(id).unwrap();
    assert!(ws.find_note(id).is_none());
}

#[test]
fn update_is_total_replacement_not_a_merge() {
    let mut ws = memory_workspace();
    let keep = ws.create_tag("keep").unwrap();
    let dropped = ws.create_tag("drop").unwrap();
    let id = ws
        .create_note(note_data(
            "old",
            "old teaser",
            "old body",
            vec![keep.clone(), dropped],
        ))
        .unwrap();

    ws.update_note(id, note_data("new", "", "new body", vec![keep.clone()]))
        .unwrap();

    let note = ws.find_note(id).unwrap();
    assert_eq!(note.title, "new");
    assert_eq!(note.teaser, "");
    assert_eq!(note.markdown, "new body");
    assert_eq!(note.tags, vec![keep]);
}

#[test]
fn mutations_on_unknown_ids_are_silent_noops() {
    let mut ws = memory_workspace();
    let id = ws.create_note(note_data("only", "", "body", Vec::new())).unwrap();

    ws.update_note(Uuid::new_v4(), note_data("ghost", "", "x", Vec::new()))
        .unwrap();
    ws.delete_note(Uuid::new_v4()).unwrap();
    ws.rename_tag(Uuid::new_v4(), "ghost").unwrap();
    ws.delete_tag(Uuid::new_v4()).unwrap();

    assert_eq!(ws.hydrated_notes().len(), 1);
    assert_eq!(ws.find_note(id).unwrap().title, "only");
    assert!(ws.tags().is_empty());
}

#[test]
fn delete_note_twice_is_idempotent() {
    let mut ws = memory_workspace();
    let id = ws.create_note(note_data("gone", "", "x", Vec::new())).unwrap();
    ws.delete_note(id).unwrap();
    ws.delete_note(id).unwrap();
    assert!(ws.hydrated_notes().is_empty());
}

#[test]
fn tag_delete_leaves_note_reference_until_note_update() {
    // Scenario: note tagged "work", tag deleted, hydration drops the
    // dangling reference while the stored id stays behind.
    let mut ws = memory_workspace();
    let work = ws.create_tag("work").unwrap();
    let id = ws
        .create_note(note_data("Plan", "", "# Q1", vec![work.clone()]))
        .unwrap();

    let filter = NoteFilter {
        title_query: "plan".to_string(),
        tags: Vec::new(),
    };
    assert_eq!(filter.apply(ws.hydrated_notes()).len(), 1);

    ws.delete_tag(work.id).unwrap();
    let hydrated = ws.find_note(id).unwrap();
    assert!(hydrated.tags.is_empty());

    // Filtering by the deleted tag no longer matches anything.
    let by_deleted = NoteFilter {
        title_query: String::new(),
        tags: vec![work],
    };
    assert!(by_deleted.apply(ws.hydrated_notes()).is_empty());
}

#[test]
fn workspace_state_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let (tag, note_id) = {
        let store = JsonFileStore::open(dir.path()).unwrap();
        let mut ws = Workspace::open(Box::new(store));
        let tag = ws.create_tag("persisted").unwrap();
        let id = ws
            .create_note(note_data("kept", "t", "body", vec![tag.clone()]))
            .unwrap();
        (tag, id)
    };

    let store = JsonFileStore::open(dir.path()).unwrap();
    let mut ws = Workspace::open(Box::new(store));
    assert_eq!(ws.tags(), &[tag.clone()]);
    let note = ws.find_note(note_id).unwrap();
    assert_eq!(note.title, "kept");
    assert_eq!(note.tags, vec![tag]);
}

#[test]
fn rename_tag_flows_into_hydrated_notes() {
    let mut ws = memory_workspace();
    let tag = ws.create_tag("drafts").unwrap();
    let id = ws
        .create_note(note_data("n", "", "b", vec![tag.clone()]))
        .unwrap();

    ws.rename_tag(tag.id, "archive").unwrap();
    let note = ws.find_note(id).unwrap();
    assert_eq!(note.tags[0].label, "archive");
    assert_eq!(note.tags[0].id, tag.id);
}
