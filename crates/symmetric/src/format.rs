//! Ciphertext serialization formats
//!
//! A [`CipherFormat`] turns a [`CipherParams`] record into text and back.
//! The OpenSSL format is the compatibility-critical default: the base64 of
//! `"Salted__" || salt || ciphertext` when a salt is present, or of the
//! bare ciphertext when not, exactly what `openssl enc -a` emits.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use wcrypt_algorithms::encoding::{Base64, Encoder, Hex};
use wcrypt_algorithms::WordArray;

use crate::error::{Error, Result};
use crate::params::CipherParams;

/// The 8-byte ASCII magic that marks a salted OpenSSL payload
pub const SALTED_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length the OpenSSL format carries, in bytes
pub const OPENSSL_SALT_BYTES: usize = 8;

/// Serialization format for cipher params records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CipherFormat {
    /// OpenSSL `Salted__` layout, base64-wrapped
    #[default]
    OpenSsl,
    /// Bare ciphertext as hex; carries no salt
    Hex,
}

impl CipherFormat {
    /// Returns the conventional name of the format
    pub fn name(self) -> &'static str {
        match self {
            CipherFormat::OpenSsl => "OpenSSL",
            CipherFormat::Hex => "hex",
        }
    }

    /// Serializes a params record to text
    ///
    /// Requires `ciphertext` to be present; the OpenSSL layout additionally
    /// requires any salt to be exactly [`OPENSSL_SALT_BYTES`] long.
    pub fn stringify(self, params: &CipherParams) -> Result<String> {
        let ciphertext = params
            .ciphertext
            .as_ref()
            .ok_or_else(|| Error::format("cipher params", "missing ciphertext"))?;
        match self {
            CipherFormat::OpenSsl => {
                let mut raw = WordArray::new();
                if let Some(salt) = &params.salt {
                    if salt.sig_bytes() != OPENSSL_SALT_BYTES {
                        return Err(Error::format("OpenSSL salt", "must be exactly 8 bytes"));
                    }
                    raw.concat(&WordArray::from_bytes(SALTED_MAGIC));
                    raw.concat(salt);
                }
                raw.concat(ciphertext);
                Ok(Base64::stringify(&raw))
            }
            CipherFormat::Hex => Ok(Hex::stringify(ciphertext)),
        }
    }

    /// Parses text into a params record carrying the ciphertext and, for
    /// salted OpenSSL payloads, the salt
    pub fn parse(self, text: &str) -> Result<CipherParams> {
        let data = match self {
            CipherFormat::OpenSsl => Base64::parse(text)?,
            CipherFormat::Hex => Hex::parse(text)?,
        };
        let mut params = CipherParams {
            format: Some(self),
            ..CipherParams::default()
        };
        if self == CipherFormat::OpenSsl {
            let bytes = data.to_bytes();
            if bytes.starts_with(SALTED_MAGIC) {
                if bytes.len() < SALTED_MAGIC.len() + OPENSSL_SALT_BYTES {
                    return Err(Error::format(
                        "OpenSSL payload",
                        "truncated before the end of the salt",
                    ));
                }
                params.salt = Some(WordArray::from_bytes(&bytes[8..16]));
                params.ciphertext = Some(WordArray::from_bytes(&bytes[16..]));
                return Ok(params);
            }
        }
        params.ciphertext = Some(data);
        Ok(params)
    }
}
