// src/store/rekey.rs
//! Password rotation — bulk re-encryption under a single transaction

use log::{info, warn};
use rusqlite::{params, Transaction};

use super::{KeyState, NotebookStore};
use crate::cipher::Cipher;
use crate::consts::{SAMPLE_TEXT, SYS_ROW_SAMPLE};
use crate::error::StoreError;

impl NotebookStore {
    /// Re-encrypt every stored field under `new_password`.
    ///
    /// All rewrites ride one transaction: folder names, note bodies, then
    /// the sample row. The active cipher switches only after the commit
    /// lands, so a failure anywhere (an undecryptable row, a write error,
    /// the commit itself) rolls back and reports `Ok(false)` with the old
    /// key still in force. The file is never left straddling two keys.
    pub fn change_password(&mut self, new_password: &str) -> Result<bool, StoreError> {
        let old = self.cipher()?.clone();
        match self.rekey_all(&old, new_password) {
            Ok(cipher) => {
                self.key = KeyState::Unlocked(cipher);
                info!("master password changed");
                Ok(true)
            }
            Err(err) => {
                warn!("password change aborted, keeping current key: {err}");
                Ok(false)
            }
        }
    }

    fn rekey_all(&mut self, old: &Cipher, new_password: &str) -> Result<Cipher, StoreError> {
        let new = Cipher::new(new_password)?;
        let tx = self.conn.transaction().map_err(StoreError::StorageWrite)?;
        reencrypt_column(&tx, "folders", "folder_id", "name", old, &new)?;
        reencrypt_column(&tx, "notes", "note_id", "body", old, &new)?;
        tx.execute(
            "UPDATE sysinfo SET item_value = ?1 WHERE item_id = ?2",
            params![new.encrypt(SAMPLE_TEXT), SYS_ROW_SAMPLE],
        )
        .map_err(StoreError::StorageWrite)?;
        tx.commit().map_err(StoreError::StorageWrite)?;
        Ok(new)
    }
}

/// Rewrite one encrypted column row by row: decrypt under the old key,
/// encrypt under the new. Runs entirely inside the caller's transaction.
fn reencrypt_column(
    tx: &Transaction<'_>,
    table: &str,
    id_column: &str,
    column: &str,
    old: &Cipher,
    new: &Cipher,
) -> Result<(), StoreError> {
    let mut stmt = tx.prepare(&format!("SELECT {id_column}, {column} FROM {table}"))?;
    let rows: Vec<(u64, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<_>>()?;
    drop(stmt);
    for (id, stored) in rows {
        let plain = old.decrypt(&stored)?;
        tx.execute(
            &format!("UPDATE {table} SET {column} = ?1 WHERE {id_column} = ?2"),
            params![new.encrypt(&plain), id],
        )
        .map_err(StoreError::StorageWrite)?;
    }
    Ok(())
}
