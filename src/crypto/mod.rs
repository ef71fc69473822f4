//! Symmetric cipher boundary.
//!
//! The query layer treats encryption as a black box: bytes in, bytes out,
//! both directions capable of failing. Key material is supplied at
//! construction time by the caller; the crate neither selects keys nor
//! persists them.

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{ChaCha20, Key, Nonce};

/// Failure at the cipher boundary. Key, nonce, and keystream errors all
/// collapse into this one reported kind.
#[derive(Debug, thiserror::Error)]
#[error("cipher operation failed: {0}")]
pub struct CipherError(pub String);

/// A symmetric cipher with a plain bytes-to-bytes contract.
pub trait SymmetricCipher {
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// ChaCha20 stream cipher over a caller-supplied key and nonce.
///
/// Encryption and decryption are the same keystream XOR, so both
/// directions share one code path.
pub struct ChaCha20Cipher {
    key: [u8; 32],
    nonce: [u8; 12],
}

impl ChaCha20Cipher {
    /// Validates key and nonce lengths up front so the per-call paths
    /// cannot fail on malformed key material.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; 32] = key
            .try_into()
            .map_err(|_| CipherError(format!("key must be 32 bytes, got {}", key.len())))?;
        let nonce: [u8; 12] = nonce
            .try_into()
            .map_err(|_| CipherError(format!("nonce must be 12 bytes, got {}", nonce.len())))?;

        Ok(Self { key, nonce })
    }

    fn apply_keystream(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut cipher = ChaCha20::new(
            Key::from_slice(&self.key),
            Nonce::from_slice(&self.nonce),
        );
        let mut buffer = data.to_vec();
        cipher
            .try_apply_keystream(&mut buffer)
            .map_err(|err| CipherError(err.to_string()))?;

        Ok(buffer)
    }
}

impl SymmetricCipher for ChaCha20Cipher {
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(plain)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.apply_keystream(ciphertext)
    }
}
