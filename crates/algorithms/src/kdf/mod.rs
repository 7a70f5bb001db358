//! Key derivation functions
//!
//! This module implements the OpenSSL `EVP_BytesToKey` iterated-hash
//! derivation used to turn a password and salt into cipher key material.

pub mod evpkdf;

// Re-exports
pub use evpkdf::EvpKdf;
