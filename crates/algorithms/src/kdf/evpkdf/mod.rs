//! OpenSSL `EVP_BytesToKey` derivation
//!
//! Produces key material from a password and salt by iterated hashing:
//! each output block is `H^iterations(prev_block || password || salt)` (the
//! first block hashes password and salt alone), and blocks are concatenated
//! until the requested length is reached.
//!
//! With MD5 and one iteration this matches what `openssl enc` derives for
//! its legacy password mode. The construction is weak by modern standards;
//! it exists for interoperability, not as a password hash.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::marker::PhantomData;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::hash::{HashFunction, Md5};

/// `EVP_BytesToKey`-style iterated-hash derivation over a hash function
#[derive(Clone)]
pub struct EvpKdf<H: HashFunction = Md5> {
    iterations: u32,
    _hash: PhantomData<H>,
}

impl<H: HashFunction> EvpKdf<H> {
    /// Creates a derivation with a single hash iteration per block
    pub fn new() -> Self {
        Self {
            iterations: 1,
            _hash: PhantomData,
        }
    }

    /// Creates a derivation with the given iteration count per block
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            _hash: PhantomData,
        }
    }

    /// Returns the configured iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derives `out_len` bytes from the password and salt
    pub fn derive(&self, password: &[u8], salt: &[u8], out_len: usize) -> Result<Vec<u8>> {
        validate::require(out_len > 0, "output length", "must be at least one byte")?;
        validate::require(self.iterations > 0, "iterations", "must be at least one")?;
        validate::require(
            H::output_size() > 0,
            "hash output size",
            "must be at least one byte",
        )?;

        let mut out = Vec::with_capacity(out_len + H::output_size());
        let mut block: Vec<u8> = Vec::new();
        while out.len() < out_len {
            let mut hasher = H::new();
            if !block.is_empty() {
                hasher.update(&block)?;
            }
            hasher.update(password)?;
            hasher.update(salt)?;
            let next = hasher.finalize()?;
            block.zeroize();
            block = next;
            for _ in 1..self.iterations {
                let next = H::digest(&block)?;
                block.zeroize();
                block = next;
            }
            out.extend_from_slice(&block);
        }
        block.zeroize();
        out.truncate(out_len);
        Ok(out)
    }
}

impl<H: HashFunction> Default for EvpKdf<H> {
    fn default() -> Self {
        Self::new()
    }
}
