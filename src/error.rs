// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures of the field cipher itself.
///
/// Construction fails only when the padded key exceeds the supported AES
/// sizes; everything else concerns ciphertext on its way back out of the
/// database.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("password pads to a {0}-byte key, beyond the supported AES sizes")]
    KeyLength(usize),

    #[error("ciphertext is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("ciphertext is {0} bytes, not a positive multiple of the AES block size")]
    BlockAlignment(usize),

    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Failures of the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open notebook database: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("operation requires a verified password")]
    NotAuthenticated,

    #[error("stored ciphertext could not be decrypted: {0}")]
    Decryption(#[from] CipherError),

    #[error("system table is in an unexpected shape: {0}")]
    Integrity(String),

    #[error("database write failed: {0}")]
    StorageWrite(#[source] rusqlite::Error),

    #[error("database query failed: {0}")]
    Sql(#[from] rusqlite::Error),
}
