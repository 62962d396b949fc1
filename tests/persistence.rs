mod common;

use common::{t0, temp_data_file, Harness};
use vibenotes::model::{NotePatch, ViewMode};
use vibenotes::storage::{
    JsonFileStorage, MemoryStorage, PersistOptions, Persistence, StateStorage, STORAGE_VERSION,
};
use vibenotes::store::{NotesState, NotesStore};

fn populated() -> Harness {
    let mut h = Harness::new();
    let work = h.store.create_folder("Work", Some("#3b82f6"));
    let note = h.store.create_note(Some(&work.id));
    h.tick(30);
    h.store
        .update_note(&note.id, NotePatch::title("Plan").with_content("- [ ] ship"));
    h.store.create_note(None);
    h.store.set_active_folder(Some(&work.id));
    h.store.set_search_query("plan");
    h.store.set_view_mode(ViewMode::Edit);
    h.store.toggle_dark_mode();
    h
}

#[test]
fn load_after_save_round_trips_every_field() {
    let h = populated();
    let reopened = Persistence::new(h.storage.clone()).load();
    assert_eq!(&reopened, h.store.state());
}

#[test]
fn snapshot_uses_the_documented_envelope() {
    let h = populated();
    let json = h.stored_json();

    assert_eq!(json["version"], STORAGE_VERSION);
    let state = &json["state"];
    for key in [
        "notes",
        "folders",
        "activeNoteId",
        "activeFolderId",
        "searchQuery",
        "viewMode",
        "darkMode",
    ] {
        assert!(state.get(key).is_some(), "missing {}", key);
    }
    let note = &state["notes"][1];
    assert_eq!(note["title"], "Plan");
    assert!(note.get("folderId").is_some());
    assert!(note.get("createdAt").is_some());
    assert!(note.get("updatedAt").is_some());
    assert_eq!(state["folders"][0]["color"], "#3b82f6");
    assert_eq!(state["darkMode"], false);
}

#[test]
fn missing_storage_yields_defaults() {
    let state = Persistence::new(MemoryStorage::new()).load();
    assert_eq!(state, NotesState::default());
    assert!(state.dark_mode);
    assert_eq!(state.view_mode, ViewMode::Split);
}

#[test]
fn malformed_storage_yields_defaults() {
    for raw in ["", "not json", "[1,2,3]", r#"{"state":{"notes":"oops"},"version":0}"#] {
        let state = Persistence::new(MemoryStorage::with_contents(raw)).load();
        assert_eq!(state, NotesState::default(), "input: {:?}", raw);
    }
}

#[test]
fn store_opens_on_malformed_storage_and_overwrites_it() {
    let storage = MemoryStorage::with_contents("{ truncated");
    let mut h = Harness::with_storage(storage);
    assert!(h.store.state().notes.is_empty());

    h.store.create_note(None);
    assert_eq!(h.stored_json()["state"]["notes"].as_array().map(Vec::len), Some(1));
}

#[test]
fn load_repairs_dangling_references() {
    let raw = format!(
        r#"{{"state":{{
            "notes":[{{"id":"n1","title":"t","content":"c","folderId":"gone",
                       "createdAt":"{ts}","updatedAt":"{ts}"}}],
            "folders":[],
            "activeNoteId":"ghost",
            "activeFolderId":"gone",
            "searchQuery":"",
            "viewMode":"preview",
            "darkMode":true
        }},"version":0}}"#,
        ts = t0().to_rfc3339()
    );
    let state = Persistence::new(MemoryStorage::with_contents(raw)).load();

    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].folder_id, None);
    assert_eq!(state.active_note_id, None);
    assert_eq!(state.active_folder_id, None);
    assert_eq!(state.view_mode, ViewMode::Preview);
}

#[test]
fn disabled_fields_are_not_restored() {
    let storage = MemoryStorage::new();
    let options = PersistOptions {
        search_query: false,
        active_folder: false,
    };
    let mut h = Harness::with_options(storage.clone(), options);
    let work = h.store.create_folder("Work", None);
    h.store.set_active_folder(Some(&work.id));
    h.store.set_search_query("draft");

    let reopened = Harness::with_options(storage, options);
    assert_eq!(reopened.store.state().search_query, "");
    assert_eq!(reopened.store.state().active_folder_id, None);
    assert_eq!(reopened.store.state().folders.len(), 1);
}

#[test]
fn file_storage_reads_nothing_before_first_write() {
    let (_dir, path) = temp_data_file();
    let storage = JsonFileStorage::new(&path);
    assert!(storage.read().unwrap().is_none());
}

#[test]
fn file_storage_creates_parent_dirs_and_leaves_no_temp_file() {
    let (_dir, path) = temp_data_file();
    let storage = JsonFileStorage::new(&path);

    storage.write("{\"a\":1}").unwrap();
    storage.write("{\"a\":2}").unwrap();

    assert_eq!(storage.read().unwrap().as_deref(), Some("{\"a\":2}"));
    let leftovers: Vec<String> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "leftover temp files: {:?}", leftovers);
}

#[test]
fn store_state_survives_a_restart_on_disk() {
    let (_dir, path) = temp_data_file();
    let mut store = NotesStore::open(Persistence::new(JsonFileStorage::new(&path)));
    let folder = store.create_folder("Ideas", None);
    let note = store.create_note(Some(&folder.id));
    store.update_note(&note.id, NotePatch::content("remember this"));
    let expected = store.state().clone();
    drop(store);

    let reopened = NotesStore::open(Persistence::new(JsonFileStorage::new(&path)));
    assert_eq!(reopened.state(), &expected);
}

#[test]
fn failed_writes_keep_memory_state_and_report() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory where the snapshot file should be makes the rename fail.
    let path = dir.path().join("blocked.json");
    std::fs::create_dir_all(&path).unwrap();

    let mut store = NotesStore::open(Persistence::new(JsonFileStorage::new(&path)));
    let note = store.create_note(None);

    assert!(store.state().note(&note.id).is_some());
    assert!(store.last_persist_error().is_some());
}
