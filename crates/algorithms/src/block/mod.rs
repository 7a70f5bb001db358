//! Block cipher implementations
//!
//! Block ciphers in this crate are defined over 32-bit big-endian words: a
//! keyed cipher transforms one block of words in place. Modes of operation
//! chain those single-block transforms over longer data.

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in 32-bit words
    const KEY_WORDS: usize;

    /// Block size in 32-bit words
    const BLOCK_WORDS: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for keyed block ciphers transforming single blocks of words in place
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Creates a keyed cipher instance
    ///
    /// The key must be exactly [`CipherAlgorithm::KEY_WORDS`] words.
    fn new(key: &[u32]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u32]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u32]) -> Result<()>;

    /// Returns the key size in words
    fn key_words() -> usize {
        Self::Algorithm::KEY_WORDS
    }

    /// Returns the block size in words
    fn block_words() -> usize {
        Self::Algorithm::BLOCK_WORDS
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
