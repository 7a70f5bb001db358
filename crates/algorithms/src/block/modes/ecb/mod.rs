//! Electronic Codebook (ECB) mode implementation
//!
//! ECB applies the raw block cipher to each block independently. It leaks
//! block-level plaintext equality and is provided for interoperability only.

use crate::block::BlockCipher;
use crate::error::Result;

/// ECB encryption state (stateless)
#[derive(Clone, Copy)]
pub struct EcbEncrypt;

impl EcbEncrypt {
    /// Encrypts one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        cipher.encrypt_block(block)
    }
}

/// ECB decryption state (stateless)
#[derive(Clone, Copy)]
pub struct EcbDecrypt;

impl EcbDecrypt {
    /// Decrypts one block in place
    pub fn process_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) -> Result<()> {
        cipher.decrypt_block(block)
    }
}
