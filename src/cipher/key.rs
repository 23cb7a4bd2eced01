// src/cipher/key.rs
//! Password-to-key derivation for the field cipher

use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;

/// Password-derived AES key.
///
/// The scheme is legacy-compatible, not a KDF: a password of exactly 16
/// bytes keys AES-128 verbatim; any other length is extended with `'*'`
/// bytes to the next multiple of 16. Passwords under 16 bytes therefore key
/// AES-128, 17 to 31 bytes key AES-256, and anything padding past 32 bytes
/// is rejected rather than truncated.
#[derive(Clone)]
pub(crate) enum DerivedKey {
    Aes128([u8; 16]),
    Aes256([u8; 32]),
}

pub(crate) fn derive_key(password: &str) -> Result<DerivedKey, CipherError> {
    let mut bytes = password.as_bytes().to_vec();
    if bytes.len() != BLOCK_SIZE {
        let fill = BLOCK_SIZE - bytes.len() % BLOCK_SIZE;
        bytes.resize(bytes.len() + fill, b'*');
    }
    match bytes.len() {
        16 => {
            let mut key = [0u8; 16];
            key.copy_from_slice(&bytes);
            Ok(DerivedKey::Aes128(key))
        }
        32 => {
            let mut key = [0u8; 32];
            key.copy_from_slice(&bytes);
            Ok(DerivedKey::Aes256(key))
        }
        n => Err(CipherError::KeyLength(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_key, DerivedKey};

    #[test]
    fn sixteen_byte_passwords_are_used_verbatim() {
        match derive_key("0123456789abcdef").unwrap() {
            DerivedKey::Aes128(key) => assert_eq!(&key, b"0123456789abcdef"),
            DerivedKey::Aes256(_) => panic!("expected a 128-bit key"),
        }
    }

    #[test]
    fn short_passwords_pad_with_stars() {
        match derive_key("HiJared@2022").unwrap() {
            DerivedKey::Aes128(key) => assert_eq!(&key, b"HiJared@2022****"),
            DerivedKey::Aes256(_) => panic!("expected a 128-bit key"),
        }
    }

    #[test]
    fn empty_password_pads_to_a_full_block() {
        match derive_key("").unwrap() {
            DerivedKey::Aes128(key) => assert_eq!(&key, &[b'*'; 16]),
            DerivedKey::Aes256(_) => panic!("expected a 128-bit key"),
        }
    }

    #[test]
    fn mid_length_passwords_pad_to_aes256() {
        match derive_key("seventeen chars!!").unwrap() {
            DerivedKey::Aes256(key) => {
                assert!(key.starts_with(b"seventeen chars!!"));
                assert!(key.ends_with(&[b'*'; 15]));
            }
            DerivedKey::Aes128(_) => panic!("expected a 256-bit key"),
        }
    }

    #[test]
    fn past_aes256_is_rejected() {
        // 32 bytes is not the 16-byte special case, so the legacy scheme
        // still appends a full pad block and lands on an unsupported size
        assert!(derive_key(&"q".repeat(32)).is_err());
        assert!(derive_key(&"q".repeat(33)).is_err());
    }
}
