//! Typed configuration for each pipeline layer
//!
//! Each layer recognizes its own options and passes the rest through by
//! composition: [`PasswordConfig`] wraps a [`SerializableConfig`] which
//! wraps a [`CipherConfig`]. Defaults follow the OpenSSL-compatible
//! pipeline: CBC mode, PKCS#7 padding, OpenSSL wire format, MD5-based
//! `EVP_BytesToKey` derivation.

use wcrypt_algorithms::{BlockMode, Padding, WordArray};

use crate::format::CipherFormat;
use crate::kdf::Kdf;

/// Options recognized by the cipher processors
#[derive(Debug, Clone, Default)]
pub struct CipherConfig {
    /// Initial chaining value for the block mode; required by every mode
    /// except ECB, with length equal to the block size. Stream ciphers
    /// ignore it.
    pub iv: Option<WordArray>,
    /// Block mode handle. Stream ciphers ignore it.
    pub mode: BlockMode,
    /// Final-block padding strategy. Stream ciphers ignore it.
    pub padding: Padding,
}

/// Options recognized by the serializable cipher layer
#[derive(Debug, Clone, Default)]
pub struct SerializableConfig {
    /// Processor options, passed through
    pub cipher: CipherConfig,
    /// Formatter used to parse string ciphertexts and recorded on results
    pub format: CipherFormat,
}

/// Options recognized by the password-based cipher layer
#[derive(Debug, Clone, Default)]
pub struct PasswordConfig {
    /// Serializable-layer options, passed through
    pub serializable: SerializableConfig,
    /// Password-to-key derivation handle
    pub kdf: Kdf,
}
