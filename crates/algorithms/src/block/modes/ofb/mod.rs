//! Output Feedback (OFB) mode implementation
//!
//! The keystream is the iterated encryption of the IV, independent of the
//! data, so encryption and decryption are the same operation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// OFB keystream state, shared by both directions
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb {
    keystream: Vec<u32>,
}

impl Ofb {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        Self { keystream: iv }
    }

    /// Transforms one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("OFB block", block.len(), self.keystream.len())?;
        cipher.encrypt_block(&mut self.keystream)?;
        for (word, ks) in block.iter_mut().zip(&self.keystream) {
            *word ^= ks;
        }
        Ok(())
    }
}
