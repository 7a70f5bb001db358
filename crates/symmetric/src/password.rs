//! Password-based encrypt/decrypt
//!
//! Wraps the serializable layer with key derivation: encryption derives
//! key, IV and a fresh salt from the password, encrypts, and attaches the
//! derivation results to the record so the OpenSSL formatter can embed the
//! salt; decryption recovers the salt and re-derives the same material.
//! A record without a salt is handled like `openssl enc -nosalt` output.

use wcrypt_algorithms::WordArray;

use crate::config::PasswordConfig;
use crate::error::{Error, Result};
use crate::params::CipherParams;
use crate::processor::SymmetricCipher;
use crate::serializable;

/// Encrypts a message under a password, returning a self-describing record
/// carrying the salt
pub fn encrypt<A: SymmetricCipher>(
    message: &WordArray,
    password: &[u8],
    cfg: &PasswordConfig,
) -> Result<CipherParams> {
    let derived = cfg.kdf.execute(password, A::KEY_WORDS, A::IV_WORDS)?;
    let key = derived
        .key
        .as_ref()
        .ok_or_else(|| Error::Kdf {
            context: "derivation result",
            details: "no key material".into(),
        })?;

    let mut scfg = cfg.serializable.clone();
    scfg.cipher.iv = derived.iv.clone();

    let mut sealed = serializable::encrypt::<A>(message, key, &scfg)?;
    sealed.mix_in(&derived);
    Ok(sealed)
}

/// Decrypts a params record under a password, re-deriving from its salt
pub fn decrypt<A: SymmetricCipher>(
    params: &CipherParams,
    password: &[u8],
    cfg: &PasswordConfig,
) -> Result<WordArray> {
    let no_salt = WordArray::new();
    let salt = params.salt.as_ref().unwrap_or(&no_salt);
    let derived = cfg
        .kdf
        .execute_with_salt(password, A::KEY_WORDS, A::IV_WORDS, salt)?;
    let key = derived
        .key
        .as_ref()
        .ok_or_else(|| Error::Kdf {
            context: "derivation result",
            details: "no key material".into(),
        })?;

    let mut scfg = cfg.serializable.clone();
    scfg.cipher.iv = derived.iv.clone();

    serializable::decrypt::<A>(params, key, &scfg)
}

/// Parses a serialized ciphertext with the configured format, then decrypts
/// it under a password
pub fn decrypt_str<A: SymmetricCipher>(
    text: &str,
    password: &[u8],
    cfg: &PasswordConfig,
) -> Result<WordArray> {
    let params = cfg.serializable.format.parse(text)?;
    decrypt::<A>(&params, password, cfg)
}
