// src/consts.rs
//! Shared constants — schema identity and cipher parameters

/// AES block size in bytes; field values are padded to this granularity.
pub const BLOCK_SIZE: usize = 16;

/// Schema version written to the sysinfo table when a notebook is created.
pub const DB_VERSION: &str = "1.0";

/// Known plaintext whose encrypted form is stored in the sysinfo table.
/// Decrypting it back to this exact string is the sole password check.
// Changing this value locks out every previously created notebook file.
pub const SAMPLE_TEXT: &str = "PasswordNotebookByJared@202212";

/// Reserved parent id of top-level folders; no row ever carries this id.
pub const ROOT_ID: u64 = 0;

/// sysinfo row holding the schema version string (plain text).
pub(crate) const SYS_ROW_VERSION: u64 = 1;

/// sysinfo row holding the encrypted sample text.
pub(crate) const SYS_ROW_SAMPLE: u64 = 2;

/// Second-precision timestamp format used for note audit columns.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
