// src/store/mod.rs
//! Notebook record store — schema, password lifecycle, folder/note CRUD
//!
//! The store owns the SQLite connection and the active field cipher; no
//! other component ever holds key material. Every user-visible text column
//! passes through the cipher on its way in and out. A store starts locked
//! after [`NotebookStore::open`] and unlocks when [`verify_password`]
//! accepts a candidate, or starts unlocked straight from
//! [`NotebookStore::create`].
//!
//! One store instance, one connection, strictly synchronous calls. When two
//! processes open the same file, SQLite's own locking is the only
//! protection; nothing here adds application-level coordination.
//!
//! [`verify_password`]: NotebookStore::verify_password

mod folders;
mod ids;
mod notes;
mod rekey;
mod schema;

pub use folders::Folder;
pub use ids::new_record_id;
pub use notes::Note;

use std::fs;
use std::path::Path;

use chrono::Local;
use log::{debug, info};
use rusqlite::Connection;

use crate::cipher::Cipher;
use crate::consts::{ROOT_ID, SAMPLE_TEXT, SYS_ROW_SAMPLE, SYS_ROW_VERSION, TIMESTAMP_FORMAT};
use crate::error::StoreError;

/// Password lifecycle of a store: no key at all, or the cipher that
/// decrypted the sample row. The cipher swaps only on successful
/// verification or a committed rekey, never piecemeal.
enum KeyState {
    Locked,
    Unlocked(Cipher),
}

/// An encrypted notebook database.
pub struct NotebookStore {
    conn: Connection,
    key: KeyState,
}

impl NotebookStore {
    /// Create (or re-open) a notebook at `path`, keyed with `password`.
    ///
    /// Tables and the two sysinfo rows are created only when absent. On an
    /// existing file the stored sample row is left as it was, so a store
    /// created over someone else's notebook ends up holding a key that does
    /// not match its data. `open` + `verify_password` is the path for
    /// existing files.
    pub fn create<P: AsRef<Path>>(path: P, password: &str) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = fs::create_dir_all(parent);
        }
        let conn = Connection::open(&path).map_err(StoreError::Connection)?;
        let cipher = Cipher::new(password)?;
        schema::initialize(&conn, &cipher)?;
        info!("notebook ready at {}", path.as_ref().display());
        Ok(Self {
            conn,
            key: KeyState::Unlocked(cipher),
        })
    }

    /// Open a notebook file; the store stays locked until
    /// [`verify_password`](Self::verify_password) succeeds.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(&path).map_err(StoreError::Connection)?;
        debug!("notebook opened at {}", path.as_ref().display());
        Ok(Self {
            conn,
            key: KeyState::Locked,
        })
    }

    /// Check `password` against the encrypted sample row.
    ///
    /// A wrong password and undecryptable sample ciphertext both come back
    /// as `Ok(false)`; the caller cannot tell them apart, and that is the
    /// contract. Only a missing or duplicated sample row escalates, as
    /// [`StoreError::Integrity`]. On success the trial cipher becomes the
    /// active one.
    pub fn verify_password(&mut self, password: &str) -> Result<bool, StoreError> {
        let stored = self.sysinfo_value(SYS_ROW_SAMPLE, "sample")?;
        let trial = match Cipher::new(password) {
            Ok(cipher) => cipher,
            Err(err) => {
                debug!("candidate password rejected at key derivation: {err}");
                return Ok(false);
            }
        };
        match trial.decrypt(&stored) {
            Ok(text) if text == SAMPLE_TEXT => {
                self.key = KeyState::Unlocked(trial);
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(err) => {
                debug!("candidate password rejected: {err}");
                Ok(false)
            }
        }
    }

    /// Whether a password has been verified on this store.
    pub fn is_unlocked(&self) -> bool {
        matches!(self.key, KeyState::Unlocked(_))
    }

    /// Schema version string written when the notebook was created.
    /// Readable without a verified password; the row is plain text.
    pub fn schema_version(&self) -> Result<String, StoreError> {
        self.sysinfo_value(SYS_ROW_VERSION, "version")
    }

    /// Populate the notebook with a small demonstration tree: a handful of
    /// top-level categories, a nested branch, and one note.
    pub fn seed_demo_data(&self) -> Result<(), StoreError> {
        let websites = self.insert_folder("Websites", ROOT_ID)?;
        for name in ["Music", "Movies"] {
            self.insert_folder(name, websites)?;
        }
        let rnd = self.insert_folder("R&D", websites)?;
        for name in ["C language", "javascript"] {
            self.insert_folder(name, rnd)?;
        }
        let python = self.insert_folder("python", rnd)?;
        let cuisine = self.insert_folder("Cuisine", websites)?;
        for name in ["Chinese cuisine", "Canadien cuisine"] {
            self.insert_folder(name, cuisine)?;
        }
        let finance = self.insert_folder("Finance", ROOT_ID)?;
        for name in ["Banks", "Stocks"] {
            self.insert_folder(name, finance)?;
        }
        self.insert_folder("Reading", ROOT_ID)?;
        self.insert_folder("Social", ROOT_ID)?;
        self.insert_note(
            "A list comprehension is eager while a generator expression is lazy.",
            python,
        )?;
        info!("demo data seeded");
        Ok(())
    }

    /// Active cipher, or `NotAuthenticated` before verification.
    fn cipher(&self) -> Result<&Cipher, StoreError> {
        match &self.key {
            KeyState::Unlocked(cipher) => Ok(cipher),
            KeyState::Locked => Err(StoreError::NotAuthenticated),
        }
    }

    /// The single sysinfo row with `item_id`, or an `Integrity` error when
    /// it is missing or duplicated.
    fn sysinfo_value(&self, item_id: u64, what: &str) -> Result<String, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT item_value FROM sysinfo WHERE item_id = ?1")?;
        let mut rows: Vec<String> = stmt
            .query_map([item_id], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;
        if rows.len() != 1 {
            return Err(StoreError::Integrity(format!(
                "expected one {what} row, found {}",
                rows.len()
            )));
        }
        Ok(rows.remove(0))
    }
}

/// Current local time at second precision, `YYYY-MM-DD HH:MM:SS`.
fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
