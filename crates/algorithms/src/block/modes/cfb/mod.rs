//! Cipher Feedback (CFB) mode implementation, full-block variant
//!
//! Each keystream block is the encryption of the previous ciphertext block
//! (the IV for the first). Both directions use the cipher's forward
//! transform. Chaining state is zeroized on drop.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CFB encryption chaining state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CfbEncrypt {
    prev: Vec<u32>,
    keystream: Vec<u32>,
}

impl CfbEncrypt {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        let keystream = vec![0u32; iv.len()];
        Self {
            prev: iv,
            keystream,
        }
    }

    /// Encrypts one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("CFB block", block.len(), self.prev.len())?;
        self.keystream.copy_from_slice(&self.prev);
        cipher.encrypt_block(&mut self.keystream)?;
        for (word, ks) in block.iter_mut().zip(&self.keystream) {
            *word ^= ks;
        }
        self.prev.copy_from_slice(block);
        Ok(())
    }
}

/// CFB decryption chaining state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CfbDecrypt {
    prev: Vec<u32>,
    keystream: Vec<u32>,
}

impl CfbDecrypt {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        let keystream = vec![0u32; iv.len()];
        Self {
            prev: iv,
            keystream,
        }
    }

    /// Decrypts one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("CFB block", block.len(), self.prev.len())?;
        self.keystream.copy_from_slice(&self.prev);
        cipher.encrypt_block(&mut self.keystream)?;
        // The incoming ciphertext is the next feedback block; save it before
        // it is overwritten with plaintext.
        self.prev.copy_from_slice(block);
        for (word, ks) in block.iter_mut().zip(&self.keystream) {
            *word ^= ks;
        }
        Ok(())
    }
}
