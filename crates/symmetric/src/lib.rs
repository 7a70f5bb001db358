//! Buffered symmetric cipher processors for the wcrypt framework
//!
//! This crate turns the primitives of `wcrypt-algorithms` into a full
//! encryption pipeline:
//!
//! - [`BlockCipherProcessor`] and [`StreamCipherProcessor`] accumulate input
//!   of arbitrary length, drive a block mode over whole blocks and handle
//!   final-block padding;
//! - [`serializable`] wraps a cipher into stateless encrypt/decrypt
//!   operations producing a self-describing [`CipherParams`] record;
//! - [`password`] adds OpenSSL-compatible password-based operation
//!   (`EVP_BytesToKey` derivation, `Salted__` wire format).
//!
//! Processors are one-shot: one message per processor, ending in exactly one
//! [`finalize`](CipherProcessor::finalize) call. Handles (algorithms, modes,
//! paddings, formats, KDFs) are stateless values that may be shared freely.
//!
//! ```
//! use wcrypt_algorithms::WordArray;
//! use wcrypt_symmetric::{password, Aes256, PasswordConfig};
//!
//! let cfg = PasswordConfig::default();
//! let message = WordArray::from(&b"attack at dawn"[..]);
//! let sealed = password::encrypt::<Aes256>(&message, b"correct horse", &cfg).unwrap();
//! let text = sealed.encode().unwrap();
//!
//! let opened = password::decrypt_str::<Aes256>(&text, b"correct horse", &cfg).unwrap();
//! assert_eq!(opened, message);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Buffered processors
mod buffered;
pub mod processor;
pub use processor::{CipherProcessor, Direction, SymmetricCipher};

pub mod block_cipher;
pub mod stream_cipher;
pub use block_cipher::BlockCipherProcessor;
pub use stream_cipher::StreamCipherProcessor;

// Algorithm handles
pub mod aes;
pub mod rc4;
pub use aes::{Aes128, Aes192, Aes256};
pub use rc4::{Rc4, Rc4Drop};

// Configuration, params record and formats
pub mod config;
pub mod format;
pub mod params;
pub use config::{CipherConfig, PasswordConfig, SerializableConfig};
pub use format::CipherFormat;
pub use params::CipherParams;

// Key derivation and the stateless cipher services
pub mod kdf;
pub use kdf::Kdf;

pub mod password;
pub mod serializable;
