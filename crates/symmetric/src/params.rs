//! Self-describing cipher result record
//!
//! A [`CipherParams`] carries a ciphertext together with everything needed
//! to decrypt and serialize it. Every field is optional; producers fill in
//! what they know and [`mix_in`](CipherParams::mix_in) merges records. The
//! `Debug` rendering redacts key material.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

use wcrypt_algorithms::{BlockMode, Padding, WordArray};

use crate::error::Result;
use crate::format::CipherFormat;

/// Cipher output plus the metadata needed to decrypt and serialize it
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CipherParams {
    /// The encrypted data
    pub ciphertext: Option<WordArray>,
    /// The raw key the data was encrypted under
    pub key: Option<WordArray>,
    /// The initialization vector
    pub iv: Option<WordArray>,
    /// The key-derivation salt, for password-based operation
    pub salt: Option<WordArray>,
    /// Name of the cipher algorithm
    pub algorithm: Option<&'static str>,
    /// Block mode the data was encrypted with
    pub mode: Option<BlockMode>,
    /// Padding scheme the data was encrypted with
    pub padding: Option<Padding>,
    /// Block size in words
    pub block_words: Option<usize>,
    /// Formatter the record is serialized with
    pub format: Option<CipherFormat>,
}

impl CipherParams {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every field that is set on `other` into this record,
    /// overwriting
    pub fn mix_in(&mut self, other: &CipherParams) {
        if other.ciphertext.is_some() {
            self.ciphertext = other.ciphertext.clone();
        }
        if other.key.is_some() {
            self.key = other.key.clone();
        }
        if other.iv.is_some() {
            self.iv = other.iv.clone();
        }
        if other.salt.is_some() {
            self.salt = other.salt.clone();
        }
        if other.algorithm.is_some() {
            self.algorithm = other.algorithm;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.padding.is_some() {
            self.padding = other.padding;
        }
        if other.block_words.is_some() {
            self.block_words = other.block_words;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
    }

    /// Serializes the record with its attached formatter (OpenSSL when none
    /// is attached)
    pub fn encode(&self) -> Result<String> {
        self.format.unwrap_or_default().stringify(self)
    }
}

impl fmt::Debug for CipherParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherParams")
            .field("ciphertext", &self.ciphertext)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("iv", &self.iv)
            .field("salt", &self.salt)
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode.map(BlockMode::name))
            .field("padding", &self.padding.map(Padding::name))
            .field("block_words", &self.block_words)
            .field("format", &self.format)
            .finish()
    }
}
