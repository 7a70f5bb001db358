//! AES algorithm handles
//!
//! Marker types binding the AES primitives to the buffered block processor.
//! The handle names follow the key size; all share the 128-bit block.

use wcrypt_algorithms::block::aes;

use crate::block_cipher::BlockCipherProcessor;
use crate::config::CipherConfig;
use crate::error::Result;
use crate::processor::SymmetricCipher;
use wcrypt_algorithms::WordArray;

/// AES-128 handle
pub enum Aes128 {}

impl SymmetricCipher for Aes128 {
    type Encryptor = BlockCipherProcessor<aes::Aes128>;
    type Decryptor = BlockCipherProcessor<aes::Aes128>;

    const KEY_WORDS: usize = 4;
    const IV_WORDS: usize = 4;

    fn name() -> &'static str {
        "AES-128"
    }

    fn encryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Encryptor> {
        BlockCipherProcessor::encryptor(key, cfg)
    }

    fn decryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Decryptor> {
        BlockCipherProcessor::decryptor(key, cfg)
    }
}

/// AES-192 handle
pub enum Aes192 {}

impl SymmetricCipher for Aes192 {
    type Encryptor = BlockCipherProcessor<aes::Aes192>;
    type Decryptor = BlockCipherProcessor<aes::Aes192>;

    const KEY_WORDS: usize = 6;
    const IV_WORDS: usize = 4;

    fn name() -> &'static str {
        "AES-192"
    }

    fn encryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Encryptor> {
        BlockCipherProcessor::encryptor(key, cfg)
    }

    fn decryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Decryptor> {
        BlockCipherProcessor::decryptor(key, cfg)
    }
}

/// AES-256 handle
pub enum Aes256 {}

impl SymmetricCipher for Aes256 {
    type Encryptor = BlockCipherProcessor<aes::Aes256>;
    type Decryptor = BlockCipherProcessor<aes::Aes256>;

    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 4;

    fn name() -> &'static str {
        "AES-256"
    }

    fn encryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Encryptor> {
        BlockCipherProcessor::encryptor(key, cfg)
    }

    fn decryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Decryptor> {
        BlockCipherProcessor::decryptor(key, cfg)
    }
}
