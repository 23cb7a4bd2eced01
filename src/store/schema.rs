// src/store/schema.rs
//! Table creation and first-run seeding

use rusqlite::{params, Connection};

use crate::cipher::Cipher;
use crate::consts::{DB_VERSION, SAMPLE_TEXT, SYS_ROW_SAMPLE, SYS_ROW_VERSION};
use crate::error::StoreError;

/// Create the three tables when absent and seed the two sysinfo rows.
///
/// Both inserts are existence-guarded, so running this against a populated
/// file changes nothing; in particular, the sample row keeps whatever key
/// it was first written under.
///
/// `parent_id` carries no referential constraint; the folder forest is the
/// caller's to keep consistent.
pub(crate) fn initialize(conn: &Connection, cipher: &Cipher) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS folders (
            folder_id  INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            parent_id  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notes (
            note_id         INTEGER PRIMARY KEY,
            body            TEXT NOT NULL,
            folder_id       INTEGER NOT NULL,
            created_at      TEXT,
            last_edited_at  TEXT
        );

        CREATE TABLE IF NOT EXISTS sysinfo (
            item_id    INTEGER PRIMARY KEY,
            item_value TEXT NOT NULL
        );
        "#,
    )
    .map_err(StoreError::StorageWrite)?;

    conn.execute(
        "INSERT INTO sysinfo (item_id, item_value)
         SELECT ?1, ?2 WHERE NOT EXISTS (SELECT 1 FROM sysinfo WHERE item_id = ?1)",
        params![SYS_ROW_VERSION, DB_VERSION],
    )
    .map_err(StoreError::StorageWrite)?;

    conn.execute(
        "INSERT INTO sysinfo (item_id, item_value)
         SELECT ?1, ?2 WHERE NOT EXISTS (SELECT 1 FROM sysinfo WHERE item_id = ?1)",
        params![SYS_ROW_SAMPLE, cipher.encrypt(SAMPLE_TEXT)],
    )
    .map_err(StoreError::StorageWrite)?;

    Ok(())
}
