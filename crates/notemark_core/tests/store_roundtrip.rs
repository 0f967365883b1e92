use notemark_core::store::{read_collection, write_collection, JsonFileStore, SlotStore};
use notemark_core::{NoteData, RawNote, Tag, NOTES_SLOT, TAGS_SLOT};

fn sample_notes(tags: &[Tag]) -> Vec<RawNote> {
    vec![
        RawNote::from_data(NoteData {
            title: "Plan".to_string(),
            teaser: "Q1 overview".to_string(),
            markdown: "# Q1\n\n- goals".to_string(),
            tags: tags.to_vec(),
        }),
        RawNote::from_data(NoteData {
            title: "Journal".to_string(),
            teaser: String::new(),
            markdown: "free text".to_string(),
            tags: Vec::new(),
        }),
    ]
}

#[test]
fn collections_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let tags = vec![Tag::new("work"), Tag::new("work")];
    let notes = sample_notes(&tags);

    {
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        write_collection(&mut store, TAGS_SLOT, &tags).unwrap();
        write_collection(&mut store, NOTES_SLOT, &notes).unwrap();
    }

    let store = JsonFileStore::open(dir.path()).unwrap();
    let loaded_tags: Vec<Tag> = read_collection(&store, TAGS_SLOT);
    let loaded_notes: Vec<RawNote> = read_collection(&store, NOTES_SLOT);
    assert_eq!(loaded_tags, tags);
    assert_eq!(loaded_notes, notes);
}

#[test]
fn write_overwrites_prior_slot_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path()).unwrap();

    let first = vec![Tag::new("a")];
    let second = vec![Tag::new("b"), Tag::new("c")];
    write_collection(&mut store, TAGS_SLOT, &first).unwrap();
    write_collection(&mut store, TAGS_SLOT, &second).unwrap();

    let loaded: Vec<Tag> = read_collection(&store, TAGS_SLOT);
    assert_eq!(loaded, second);
}

#[test]
fn corrupt_slot_file_reads_as_empty_and_heals_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path()).unwrap();
    store.write_slot(NOTES_SLOT, "[{\"id\": truncated").unwrap();

    let loaded: Vec<RawNote> = read_collection(&store, NOTES_SLOT);
    assert!(loaded.is_empty());

    let notes = sample_notes(&[]);
    write_collection(&mut store, NOTES_SLOT, &notes).unwrap();
    let healed: Vec<RawNote> = read_collection(&store, NOTES_SLOT);
    assert_eq!(healed, notes);
}

#[test]
fn slots_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path()).unwrap();
    store.write_slot(TAGS_SLOT, "garbage").unwrap();

    let notes = sample_notes(&[]);
    write_collection(&mut store, NOTES_SLOT, &notes).unwrap();

    let loaded_notes: Vec<RawNote> = read_collection(&store, NOTES_SLOT);
    let loaded_tags: Vec<Tag> = read_collection(&store, TAGS_SLOT);
    assert_eq!(loaded_notes, notes);
    assert!(loaded_tags.is_empty());
}
