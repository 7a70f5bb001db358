//! Counter (CTR) mode implementation
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data,
//! so encryption and decryption are the same operation. The counter starts
//! at the IV and increments big-endian across the whole block with carry,
//! per NIST SP 800-38A.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CTR counter state, shared by both directions
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr {
    counter: Vec<u32>,
    keystream: Vec<u32>,
}

impl Ctr {
    pub(crate) fn new(iv: Vec<u32>) -> Self {
        let keystream = vec![0u32; iv.len()];
        Self {
            counter: iv,
            keystream,
        }
    }

    /// Transforms one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        validate::exact("CTR block", block.len(), self.counter.len())?;
        self.keystream.copy_from_slice(&self.counter);
        cipher.encrypt_block(&mut self.keystream)?;
        for (word, ks) in block.iter_mut().zip(&self.keystream) {
            *word ^= ks;
        }
        self.increment();
        Ok(())
    }

    // Big-endian increment with carry across the counter block.
    fn increment(&mut self) {
        for word in self.counter.iter_mut().rev() {
            *word = word.wrapping_add(1);
            if *word != 0 {
                break;
            }
        }
    }
}
