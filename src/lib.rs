//! # wcrypt
//!
//! A word-oriented symmetric cipher framework: buffered block processing,
//! block-mode chaining, padding, OpenSSL-compatible password-based key
//! derivation and a self-describing, serializable cipher-params record.
//!
//! This is a facade crate that re-exports the two member crates:
//!
//! - `wcrypt-algorithms`: the primitives (WordArray, encoders, MD5, AES,
//!   block modes, paddings, RC4, `EVP_BytesToKey`)
//! - `wcrypt-symmetric`: the pipeline (buffered processors, cipher params,
//!   formatters, serializable and password-based services)
//!
//! ## Quick start
//!
//! ```
//! use wcrypt::algorithms::WordArray;
//! use wcrypt::symmetric::{password, Aes256, PasswordConfig};
//!
//! let cfg = PasswordConfig::default();
//! let message = WordArray::from("meet me at the usual place");
//!
//! let sealed = wcrypt::symmetric::password::encrypt::<Aes256>(
//!     &message,
//!     b"Secret Passphrase",
//!     &cfg,
//! ).unwrap();
//! let text = sealed.encode().unwrap();
//!
//! let opened = password::decrypt_str::<Aes256>(&text, b"Secret Passphrase", &cfg).unwrap();
//! assert_eq!(opened, message);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use wcrypt_algorithms as algorithms;
pub use wcrypt_symmetric as symmetric;

// Convenience re-exports of the types most callers touch
pub use wcrypt_algorithms::{BlockMode, Padding, WordArray};
pub use wcrypt_symmetric::{
    Aes128, Aes192, Aes256, CipherFormat, CipherParams, CipherProcessor, Error, PasswordConfig,
    Rc4, Rc4Drop, Result, SerializableConfig, SymmetricCipher,
};
