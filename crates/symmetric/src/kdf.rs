//! Password-to-key derivation handles
//!
//! A [`Kdf`] turns a password into key material, an IV and a salt packaged
//! as a [`CipherParams`] record. The default is the OpenSSL
//! `EVP_BytesToKey` scheme over MD5 with a single iteration and a fresh
//! 8-byte salt, which is what `openssl enc` password mode expects.

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use wcrypt_algorithms::kdf::EvpKdf;
use wcrypt_algorithms::{Md5, WordArray};

use crate::error::{Error, Result};
use crate::format::OPENSSL_SALT_BYTES;
use crate::params::CipherParams;

/// Key derivation handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kdf {
    /// OpenSSL `EVP_BytesToKey` over MD5
    OpenSsl {
        /// Hash iterations per derived block (OpenSSL uses 1)
        iterations: u32,
    },
}

impl Default for Kdf {
    fn default() -> Self {
        Kdf::OpenSsl { iterations: 1 }
    }
}

impl Kdf {
    /// Derives key and IV material with a fresh random salt
    ///
    /// The salt is [`OPENSSL_SALT_BYTES`] bytes from the operating system's
    /// CSPRNG.
    pub fn execute(
        &self,
        password: &[u8],
        key_words: usize,
        iv_words: usize,
    ) -> Result<CipherParams> {
        self.execute_with_rng(password, key_words, iv_words, &mut OsRng)
    }

    /// Derives key and IV material with a fresh salt from the given RNG
    pub fn execute_with_rng<R: RngCore + CryptoRng>(
        &self,
        password: &[u8],
        key_words: usize,
        iv_words: usize,
        rng: &mut R,
    ) -> Result<CipherParams> {
        let salt = WordArray::random(rng, OPENSSL_SALT_BYTES);
        self.execute_with_salt(password, key_words, iv_words, &salt)
    }

    /// Derives key and IV material from an existing salt
    ///
    /// An empty salt derives without one, matching `openssl enc -nosalt`;
    /// the returned record then carries no salt field.
    pub fn execute_with_salt(
        &self,
        password: &[u8],
        key_words: usize,
        iv_words: usize,
        salt: &WordArray,
    ) -> Result<CipherParams> {
        if key_words == 0 {
            return Err(Error::Kdf {
                context: "key sizing",
                details: "cipher reports a zero-word key".into(),
            });
        }

        let out_len = (key_words + iv_words) * 4;
        let derived = match self {
            Kdf::OpenSsl { iterations } => {
                let kdf = EvpKdf::<Md5>::with_iterations(*iterations);
                Zeroizing::new(kdf.derive(password, &salt.to_bytes(), out_len).map_err(
                    |err| Error::Kdf {
                        context: "EVP_BytesToKey",
                        details: err.to_string().into(),
                    },
                )?)
            }
        };
        // A correct primitive always fills the request; anything less is fatal.
        if derived.len() < out_len {
            return Err(Error::Kdf {
                context: "EVP_BytesToKey",
                details: "derivation produced insufficient bytes".into(),
            });
        }

        Ok(CipherParams {
            key: Some(WordArray::from_bytes(&derived[..key_words * 4])),
            iv: if iv_words > 0 {
                Some(WordArray::from_bytes(&derived[key_words * 4..out_len]))
            } else {
                None
            },
            salt: if salt.is_empty() {
                None
            } else {
                Some(salt.clone())
            },
            ..CipherParams::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcrypt_algorithms::HashFunction;

    #[test]
    fn derivation_is_deterministic_for_a_fixed_salt() {
        let salt = WordArray::from_bytes(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let kdf = Kdf::default();
        let a = kdf.execute_with_salt(b"password", 8, 4, &salt).unwrap();
        let b = kdf.execute_with_salt(b"password", 8, 4, &salt).unwrap();
        assert_eq!(a.key, b.key);
        assert_eq!(a.iv, b.iv);
        assert_eq!(a.salt, Some(salt));
    }

    #[test]
    fn fresh_salts_differ() {
        let kdf = Kdf::default();
        let a = kdf.execute(b"password", 8, 4).unwrap();
        let b = kdf.execute(b"password", 8, 4).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn key_and_iv_split_the_derived_stream() {
        let salt = WordArray::from_bytes(&[9u8; 8]);
        let derived = Kdf::default()
            .execute_with_salt(b"pw", 4, 4, &salt)
            .unwrap();

        let kdf = EvpKdf::<Md5>::new();
        let raw = kdf.derive(b"pw", &salt.to_bytes(), 32).unwrap();
        assert_eq!(derived.key, Some(WordArray::from_bytes(&raw[..16])));
        assert_eq!(derived.iv, Some(WordArray::from_bytes(&raw[16..])));
    }

    #[test]
    fn empty_salt_is_the_nosalt_derivation() {
        let derived = Kdf::default()
            .execute_with_salt(b"password", 4, 0, &WordArray::new())
            .unwrap();
        assert_eq!(derived.salt, None);
        assert_eq!(derived.iv, None);
        assert_eq!(
            derived.key,
            Some(WordArray::from_bytes(&Md5::digest(b"password").unwrap()))
        );
    }

    #[test]
    fn zero_key_words_is_a_kdf_error() {
        let err = Kdf::default()
            .execute_with_salt(b"pw", 0, 4, &WordArray::new())
            .unwrap_err();
        assert!(matches!(err, Error::Kdf { .. }));
    }
}
