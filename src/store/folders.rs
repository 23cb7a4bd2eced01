// src/store/folders.rs
//! Folder rows — a forest of named categories rooted at the implicit id 0

use log::debug;
use rusqlite::params;

use super::{new_record_id, NotebookStore};
use crate::error::StoreError;

/// A category node. `parent_id` 0 marks a top-level folder; the root itself
/// has no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: u64,
    pub name: String,
    pub parent_id: u64,
}

impl NotebookStore {
    /// Insert a folder under `parent_id` and return its generated id.
    pub fn insert_folder(&self, name: &str, parent_id: u64) -> Result<u64, StoreError> {
        let cipher = self.cipher()?;
        let id = new_record_id();
        self.conn
            .execute(
                "INSERT INTO folders (folder_id, name, parent_id) VALUES (?1, ?2, ?3)",
                params![id, cipher.encrypt(name), parent_id],
            )
            .map_err(StoreError::StorageWrite)?;
        Ok(id)
    }

    /// Folders directly under `parent_id`, sorted ascending by decrypted
    /// name (case-sensitive byte order); equal names fall back to ascending
    /// id.
    pub fn list_folders(&self, parent_id: u64) -> Result<Vec<Folder>, StoreError> {
        let cipher = self.cipher()?;
        let mut stmt = self
            .conn
            .prepare("SELECT folder_id, name, parent_id FROM folders WHERE parent_id = ?1")?;
        let rows: Vec<(u64, String, u64)> = stmt
            .query_map([parent_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<rusqlite::Result<_>>()?;
        let mut folders = Vec::with_capacity(rows.len());
        for (id, stored_name, parent) in rows {
            folders.push(Folder {
                id,
                name: cipher.decrypt(&stored_name)?,
                parent_id: parent,
            });
        }
        folders.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        debug!("{} folder(s) under {parent_id}", folders.len());
        Ok(folders)
    }

    /// Overwrite a folder's name.
    pub fn rename_folder(&self, id: u64, name: &str) -> Result<(), StoreError> {
        let cipher = self.cipher()?;
        self.conn
            .execute(
                "UPDATE folders SET name = ?1 WHERE folder_id = ?2",
                params![cipher.encrypt(name), id],
            )
            .map_err(StoreError::StorageWrite)?;
        Ok(())
    }

    /// Move a folder under a new parent. No cycle check happens here; the
    /// caller owns the tree shape.
    pub fn reparent_folder(&self, id: u64, new_parent_id: u64) -> Result<(), StoreError> {
        self.cipher()?;
        self.conn
            .execute(
                "UPDATE folders SET parent_id = ?1 WHERE folder_id = ?2",
                params![new_parent_id, id],
            )
            .map_err(StoreError::StorageWrite)?;
        Ok(())
    }

    /// Delete a folder row together with its directly attached notes.
    ///
    /// Child folders and their notes stay behind as orphans; nothing walks
    /// the subtree. Long-standing quirk, kept for compatibility.
    pub fn delete_folder(&self, id: u64) -> Result<(), StoreError> {
        self.cipher()?;
        self.conn
            .execute("DELETE FROM folders WHERE folder_id = ?1", [id])
            .map_err(StoreError::StorageWrite)?;
        self.conn
            .execute("DELETE FROM notes WHERE folder_id = ?1", [id])
            .map_err(StoreError::StorageWrite)?;
        Ok(())
    }
}
