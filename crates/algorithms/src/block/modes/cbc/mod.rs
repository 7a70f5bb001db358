//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption; the first block is XORed with the initialization
//! vector. Decryption reverses the chain. This implementation follows NIST
//! SP 800-38A and zeroizes its chaining state on drop.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CBC encryption chaining state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CbcEncrypt {
    prev: Vec<u32>,
}

impl CbcEncrypt {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        Self { prev: iv }
    }

    /// Encrypts one block in place, chaining off the previous ciphertext
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("CBC block", block.len(), self.prev.len())?;
        for (word, prev) in block.iter_mut().zip(&self.prev) {
            *word ^= prev;
        }
        cipher.encrypt_block(block)?;
        self.prev.copy_from_slice(block);
        Ok(())
    }
}

/// CBC decryption chaining state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CbcDecrypt {
    prev: Vec<u32>,
    scratch: Vec<u32>,
}

impl CbcDecrypt {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        let scratch = vec![0u32; iv.len()];
        Self { prev: iv, scratch }
    }

    /// Decrypts one block in place, chaining off the previous ciphertext
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("CBC block", block.len(), self.prev.len())?;
        self.scratch.copy_from_slice(block);
        cipher.decrypt_block(block)?;
        for (word, prev) in block.iter_mut().zip(&self.prev) {
            *word ^= prev;
        }
        core::mem::swap(&mut self.prev, &mut self.scratch);
        Ok(())
    }
}
