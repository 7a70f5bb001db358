//! Stateless encrypt/decrypt over raw keys
//!
//! These free functions compose an algorithm handle with the serializable
//! layer: encryption returns a fully populated [`CipherParams`] record,
//! decryption consumes one (or parses a string through the configured
//! format first).

use wcrypt_algorithms::WordArray;

use crate::config::SerializableConfig;
use crate::error::{Error, Result};
use crate::params::CipherParams;
use crate::processor::{CipherProcessor, SymmetricCipher};

/// Encrypts a message under a raw key, returning a self-describing record
pub fn encrypt<A: SymmetricCipher>(
    message: &WordArray,
    key: &WordArray,
    cfg: &SerializableConfig,
) -> Result<CipherParams> {
    let mut processor = A::encryptor(key, &cfg.cipher)?;
    let ciphertext = processor.finalize(Some(message))?;
    Ok(CipherParams {
        block_words: Some(processor.block_words()),
        ciphertext: Some(ciphertext),
        key: Some(key.clone()),
        iv: cfg.cipher.iv.clone(),
        algorithm: Some(A::name()),
        mode: Some(cfg.cipher.mode),
        padding: Some(cfg.cipher.padding),
        format: Some(cfg.format),
        salt: None,
    })
}

/// Decrypts a params record under a raw key
pub fn decrypt<A: SymmetricCipher>(
    params: &CipherParams,
    key: &WordArray,
    cfg: &SerializableConfig,
) -> Result<WordArray> {
    let ciphertext = params
        .ciphertext
        .as_ref()
        .ok_or_else(|| Error::format("cipher params", "missing ciphertext"))?;
    let mut processor = A::decryptor(key, &cfg.cipher)?;
    processor.finalize(Some(ciphertext))
}

/// Parses a serialized ciphertext with the configured format, then decrypts
/// it under a raw key
pub fn decrypt_str<A: SymmetricCipher>(
    text: &str,
    key: &WordArray,
    cfg: &SerializableConfig,
) -> Result<WordArray> {
    let params = cfg.format.parse(text)?;
    decrypt::<A>(&params, key, cfg)
}
