// src/store/notes.rs
//! Note rows — the single text document attached to a folder

use log::error;
use rusqlite::params;

use super::{new_record_id, timestamp_now, NotebookStore};
use crate::error::StoreError;

/// A note with its audit timestamps (`YYYY-MM-DD HH:MM:SS`, local time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub text: String,
    pub created_at: String,
    pub last_edited_at: String,
}

impl NotebookStore {
    /// Insert a note under `folder_id`, stamping both timestamps with the
    /// current time, and return its generated id.
    pub fn insert_note(&self, text: &str, folder_id: u64) -> Result<u64, StoreError> {
        let cipher = self.cipher()?;
        let id = new_record_id();
        let now = timestamp_now();
        self.conn
            .execute(
                "INSERT INTO notes (note_id, body, folder_id, created_at, last_edited_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                params![id, cipher.encrypt(text), folder_id, now],
            )
            .map_err(StoreError::StorageWrite)?;
        Ok(id)
    }

    /// The note attached to `folder_id`, if any.
    ///
    /// A folder is expected to hold at most one note. When more than one
    /// row matches, the inconsistency is logged and masked as `None` so a
    /// damaged tree stays browsable.
    pub fn note_by_folder(&self, folder_id: u64) -> Result<Option<Note>, StoreError> {
        let cipher = self.cipher()?;
        let mut stmt = self.conn.prepare(
            "SELECT note_id, body, created_at, last_edited_at FROM notes WHERE folder_id = ?1",
        )?;
        let mut rows: Vec<(u64, String, String, String)> = stmt
            .query_map([folder_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<rusqlite::Result<_>>()?;
        match rows.len() {
            0 => Ok(None),
            1 => {
                let (id, body, created_at, last_edited_at) = rows.remove(0);
                Ok(Some(Note {
                    id,
                    text: cipher.decrypt(&body)?,
                    created_at,
                    last_edited_at,
                }))
            }
            n => {
                error!("{n} notes attached to folder {folder_id}, expected at most one");
                Ok(None)
            }
        }
    }

    /// Replace a note's text and restamp `last_edited_at`; `created_at`
    /// stays as it was.
    pub fn update_note_text(&self, id: u64, text: &str) -> Result<(), StoreError> {
        let cipher = self.cipher()?;
        self.conn
            .execute(
                "UPDATE notes SET body = ?1, last_edited_at = ?2 WHERE note_id = ?3",
                params![cipher.encrypt(text), timestamp_now(), id],
            )
            .map_err(StoreError::StorageWrite)?;
        Ok(())
    }
}
