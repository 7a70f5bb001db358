//! Word-oriented cryptographic primitives for the wcrypt framework
//!
//! This crate provides the primitive layer consumed by `wcrypt-symmetric`:
//! the [`WordArray`](types::WordArray) container (byte data as big-endian
//! 32-bit words plus a significant-byte count), text encoders, the MD5 hash,
//! the AES block cipher, block modes of operation, padding schemes, the RC4
//! stream cipher and the OpenSSL `EVP_BytesToKey` derivation primitive.
//!
//! All primitives operate synchronously on in-memory data. Key material and
//! chaining state are zeroized on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Core data container and text encoders
pub mod encoding;
pub mod types;
pub use encoding::{Base64, Encoder, Hex, Latin1, Utf8};
pub use types::WordArray;

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Md5};

// Block cipher implementations, modes of operation and padding schemes
pub mod block;
pub mod padding;
pub use block::modes::{BlockMode, ModeState};
pub use block::{Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm};
pub use padding::Padding;

// Stream cipher implementations
pub mod stream;
pub use stream::{Rc4, StreamCipher};

// KDF implementations
pub mod kdf;
pub use kdf::EvpKdf;
