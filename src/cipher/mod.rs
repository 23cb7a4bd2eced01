// src/cipher/mod.rs
//! Field cipher — password-keyed AES over hex-encoded text
//!
//! Everything the store persists goes through this wrapper: UTF-8 text in,
//! lowercase hex out, and back. The encoding is fixed by the files already
//! out in the world (ECB mode by default, `'*'`-padded key derivation,
//! trailing-NUL block padding) and must stay bit-exact so old notebooks
//! keep opening. CBC is supported for callers that hold the cipher in
//! memory; its IV is drawn at construction and never persisted, so CBC
//! ciphertext does not survive the instance that produced it.

mod key;

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use aes::{Aes128, Aes256};
use rand::Rng;

use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;
use key::{derive_key, DerivedKey};

/// Block cipher mode. ECB needs no IV and is the storage default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherMode {
    #[default]
    Ecb,
    Cbc,
}

/// A keyed cipher, cheap to clone and safe to reuse. A fresh AES context
/// is constructed for every call; encryption and decryption never share
/// one.
#[derive(Clone)]
pub struct Cipher {
    key: DerivedKey,
    mode: CipherMode,
    iv: [u8; BLOCK_SIZE],
}

impl Cipher {
    /// ECB-mode cipher, the storage default.
    pub fn new(password: &str) -> Result<Self, CipherError> {
        Self::with_mode(password, CipherMode::Ecb)
    }

    /// Cipher with an explicit mode. CBC draws a random IV here and keeps
    /// it for the lifetime of this value (clones included).
    pub fn with_mode(password: &str, mode: CipherMode) -> Result<Self, CipherError> {
        let key = derive_key(password)?;
        let iv: [u8; BLOCK_SIZE] = rand::rng().random();
        Ok(Self { key, mode, iv })
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Encrypt UTF-8 text to lowercase hex.
    ///
    /// The input is NUL-padded to a whole number of blocks (at least one),
    /// so plaintext must not carry trailing NULs of its own; they do not
    /// survive the round trip.
    pub fn encrypt(&self, plain_text: &str) -> String {
        let padded = pad_blocks(plain_text.as_bytes());
        let bytes = match (&self.key, self.mode) {
            (DerivedKey::Aes128(key), CipherMode::Ecb) => ecb::Encryptor::<Aes128>::new(key.into())
                .encrypt_padded_vec_mut::<NoPadding>(&padded),
            (DerivedKey::Aes128(key), CipherMode::Cbc) => {
                cbc::Encryptor::<Aes128>::new(key.into(), (&self.iv).into())
                    .encrypt_padded_vec_mut::<NoPadding>(&padded)
            }
            (DerivedKey::Aes256(key), CipherMode::Ecb) => ecb::Encryptor::<Aes256>::new(key.into())
                .encrypt_padded_vec_mut::<NoPadding>(&padded),
            (DerivedKey::Aes256(key), CipherMode::Cbc) => {
                cbc::Encryptor::<Aes256>::new(key.into(), (&self.iv).into())
                    .encrypt_padded_vec_mut::<NoPadding>(&padded)
            }
        };
        hex::encode(bytes)
    }

    /// Decrypt lowercase hex back to UTF-8 text, stripping the NUL padding.
    pub fn decrypt(&self, cipher_hex: &str) -> Result<String, CipherError> {
        let bytes = hex::decode(cipher_hex)?;
        if bytes.is_empty() || bytes.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::BlockAlignment(bytes.len()));
        }
        let plain = match (&self.key, self.mode) {
            (DerivedKey::Aes128(key), CipherMode::Ecb) => ecb::Decryptor::<Aes128>::new(key.into())
                .decrypt_padded_vec_mut::<NoPadding>(&bytes),
            (DerivedKey::Aes128(key), CipherMode::Cbc) => {
                cbc::Decryptor::<Aes128>::new(key.into(), (&self.iv).into())
                    .decrypt_padded_vec_mut::<NoPadding>(&bytes)
            }
            (DerivedKey::Aes256(key), CipherMode::Ecb) => ecb::Decryptor::<Aes256>::new(key.into())
                .decrypt_padded_vec_mut::<NoPadding>(&bytes),
            (DerivedKey::Aes256(key), CipherMode::Cbc) => {
                cbc::Decryptor::<Aes256>::new(key.into(), (&self.iv).into())
                    .decrypt_padded_vec_mut::<NoPadding>(&bytes)
            }
        }
        .map_err(|_| CipherError::BlockAlignment(bytes.len()))?;
        let end = plain.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(std::str::from_utf8(&plain[..end])?.to_owned())
    }
}

/// Extend to a whole number of AES blocks with trailing NULs; empty input
/// becomes one full padding block so ciphertext is never empty.
fn pad_blocks(bytes: &[u8]) -> Vec<u8> {
    let mut padded = bytes.to_vec();
    let fill = match padded.len() % BLOCK_SIZE {
        0 if !padded.is_empty() => 0,
        rem => BLOCK_SIZE - rem,
    };
    padded.resize(padded.len() + fill, 0);
    padded
}
