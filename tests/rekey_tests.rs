// tests/rekey_tests.rs
mod common;

use ciphernote::consts::ROOT_ID;
use ciphernote::{NotebookStore, StoreError};
use common::{TestNotebook, PASSWORD};

const NEW_PASSWORD: &str = "NewPass!1";

#[test]
fn change_password_full_scenario() {
    let mut nb = TestNotebook::create();
    let finance = nb.store.insert_folder("Finance", ROOT_ID).unwrap();
    let note_id = nb.store.insert_note("balance: 100", finance).unwrap();

    assert!(nb.store.change_password(NEW_PASSWORD).unwrap());

    // data is readable straight away under the swapped-in cipher
    assert_eq!(nb.store.list_folders(ROOT_ID).unwrap()[0].name, "Finance");

    // and after a cold reopen, only the new password verifies
    let (dir, path) = nb.into_path();
    let mut store = NotebookStore::open(&path).unwrap();
    assert!(!store.verify_password(PASSWORD).unwrap());
    assert!(store.verify_password(NEW_PASSWORD).unwrap());
    let note = store.note_by_folder(finance).unwrap().expect("note survives rekey");
    assert_eq!(note.id, note_id);
    assert_eq!(note.text, "balance: 100");
    drop(dir);
}

#[test]
fn change_password_on_an_empty_notebook() {
    let mut nb = TestNotebook::create();
    assert!(nb.store.change_password(NEW_PASSWORD).unwrap());
    let (dir, path) = nb.into_path();
    let mut store = NotebookStore::open(&path).unwrap();
    assert!(store.verify_password(NEW_PASSWORD).unwrap());
    drop(dir);
}

#[test]
fn change_password_requires_verification() {
    let (dir, path) = TestNotebook::create().into_path();
    let mut store = NotebookStore::open(&path).unwrap();
    assert!(matches!(
        store.change_password(NEW_PASSWORD),
        Err(StoreError::NotAuthenticated)
    ));
    drop(dir);
}

#[test]
fn unacceptable_new_password_reports_false_and_changes_nothing() {
    let mut nb = TestNotebook::create();
    nb.store.insert_folder("kept", ROOT_ID).unwrap();
    // pads past AES-256, so the new cipher cannot be built
    assert!(!nb.store.change_password(&"x".repeat(40)).unwrap());
    assert_eq!(nb.store.list_folders(ROOT_ID).unwrap()[0].name, "kept");
}

#[test]
fn failed_rekey_rolls_back_completely() {
    let mut nb = TestNotebook::create();
    let folder = nb.store.insert_folder("Finance", ROOT_ID).unwrap();
    nb.store.insert_note("balance: 100", folder).unwrap();

    // Corrupt a note body out-of-band: the folders pass re-encrypts first,
    // then the notes pass hits this row and the whole transaction unwinds.
    let conn = rusqlite::Connection::open(nb.db_path()).unwrap();
    conn.execute(
        "INSERT INTO notes (note_id, body, folder_id, created_at, last_edited_at)
         VALUES (1, 'zz-not-hex', 999, '', '')",
        [],
    )
    .unwrap();
    drop(conn);

    assert!(!nb.store.change_password(NEW_PASSWORD).unwrap());

    // everything still reads under the original key
    assert_eq!(nb.store.list_folders(ROOT_ID).unwrap()[0].name, "Finance");
    assert_eq!(
        nb.store.note_by_folder(folder).unwrap().unwrap().text,
        "balance: 100"
    );

    // and a cold reopen agrees: old password in force, new one rejected
    let (dir, path) = nb.into_path();
    let mut store = NotebookStore::open(&path).unwrap();
    assert!(store.verify_password(PASSWORD).unwrap());
    assert!(!store.verify_password(NEW_PASSWORD).unwrap());
    drop(dir);
}
