// src/lib.rs
//! ciphernote — a field-encrypted notebook store
//!
//! Folders and notes live in a local SQLite file; every user-visible text
//! field is AES-encrypted before it is written and decrypted as it is read.
//! A fixed sample text, stored encrypted, stands in for the password check,
//! and changing the master password re-encrypts the whole file in one
//! transaction.
//!
//! The cipher reproduces a legacy scheme for compatibility with existing
//! notebook files: ECB mode by default, `'*'`-padded key derivation, NUL
//! block padding, hex-encoded ciphertext. None of that is modern practice;
//! a redesign should derive keys with a real KDF and use an authenticated
//! mode with per-record nonces. Treat the protection here as keeping honest
//! people honest, not as a hard security boundary.

pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod store;

// Re-export everything callers need at the crate root
pub use cipher::{Cipher, CipherMode};
pub use config::load as load_config;
pub use error::{CipherError, StoreError};
pub use store::{new_record_id, Folder, Note, NotebookStore};
