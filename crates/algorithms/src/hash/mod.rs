//! Hash functions
//!
//! The only digest this crate carries is MD5, because the OpenSSL
//! `EVP_BytesToKey` derivation is defined over it. The [`HashFunction`]
//! trait exists to keep that derivation generic over the digest, and its
//! incremental interface lets the derivation absorb the previous block,
//! the password and the salt without concatenating them first.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

pub mod md5;

// Re-exports
pub use md5::Md5;

/// Incremental digest over byte input
pub trait HashFunction {
    /// Fresh state for one digest computation
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Completes the computation and yields the digest bytes
    ///
    /// The state is spent afterwards; start a new instance for the next
    /// message.
    fn finalize(&mut self) -> Result<Vec<u8>>;

    /// Digest length in bytes
    fn output_size() -> usize;

    /// Absorbs one contiguous message and yields its digest
    fn digest(data: &[u8]) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
