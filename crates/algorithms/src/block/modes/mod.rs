//! Block cipher modes of operation
//!
//! A [`BlockMode`] is the stateless handle naming a mode; its
//! [`encryptor`](BlockMode::encryptor) and [`decryptor`](BlockMode::decryptor)
//! factories produce a per-session [`ModeState`] that transforms one block of
//! words in place at a given offset, threading the chaining state internally.
//!
//! CBC, CFB, OFB and CTR require an initialization vector of exactly the
//! block size; ECB takes none and disregards any that is supplied.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::{CbcDecrypt, CbcEncrypt};
pub use cfb::{CfbDecrypt, CfbEncrypt};
pub use ctr::Ctr;
pub use ecb::{EcbDecrypt, EcbEncrypt};
pub use ofb::Ofb;

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockMode {
    /// Cipher block chaining (NIST SP 800-38A §6.2)
    #[default]
    Cbc,
    /// Electronic codebook (NIST SP 800-38A §6.1)
    Ecb,
    /// Full-block cipher feedback (NIST SP 800-38A §6.3)
    Cfb,
    /// Output feedback (NIST SP 800-38A §6.4)
    Ofb,
    /// Counter mode with a big-endian carrying counter (NIST SP 800-38A §6.5)
    Ctr,
}

impl BlockMode {
    /// Returns the conventional name of the mode
    pub fn name(self) -> &'static str {
        match self {
            BlockMode::Cbc => "CBC",
            BlockMode::Ecb => "ECB",
            BlockMode::Cfb => "CFB",
            BlockMode::Ofb => "OFB",
            BlockMode::Ctr => "CTR",
        }
    }

    /// Whether the mode requires an initialization vector
    pub fn requires_iv(self) -> bool {
        !matches!(self, BlockMode::Ecb)
    }

    /// Creates the per-session state for the encryption direction
    pub fn encryptor(self, iv: Option<&[u32]>, block_words: usize) -> Result<ModeState> {
        validate::require(block_words > 0, "block size", "must be at least one word")?;
        Ok(match self {
            BlockMode::Cbc => ModeState::CbcEncrypt(CbcEncrypt::new(take_iv(iv, block_words)?)),
            BlockMode::Ecb => ModeState::EcbEncrypt(EcbEncrypt),
            BlockMode::Cfb => ModeState::CfbEncrypt(CfbEncrypt::new(take_iv(iv, block_words)?)),
            BlockMode::Ofb => ModeState::Ofb(Ofb::new(take_iv(iv, block_words)?)),
            BlockMode::Ctr => ModeState::Ctr(Ctr::new(take_iv(iv, block_words)?)),
        })
    }

    /// Creates the per-session state for the decryption direction
    pub fn decryptor(self, iv: Option<&[u32]>, block_words: usize) -> Result<ModeState> {
        validate::require(block_words > 0, "block size", "must be at least one word")?;
        Ok(match self {
            BlockMode::Cbc => ModeState::CbcDecrypt(CbcDecrypt::new(take_iv(iv, block_words)?)),
            BlockMode::Ecb => ModeState::EcbDecrypt(EcbDecrypt),
            BlockMode::Cfb => ModeState::CfbDecrypt(CfbDecrypt::new(take_iv(iv, block_words)?)),
            BlockMode::Ofb => ModeState::Ofb(Ofb::new(take_iv(iv, block_words)?)),
            BlockMode::Ctr => ModeState::Ctr(Ctr::new(take_iv(iv, block_words)?)),
        })
    }
}

fn take_iv(iv: Option<&[u32]>, block_words: usize) -> Result<Vec<u32>> {
    let iv = iv.ok_or_else(|| Error::arg("iv", "mode requires an initialization vector"))?;
    validate::exact("initialization vector", iv.len(), block_words)?;
    Ok(iv.to_vec())
}

/// Per-session chaining state produced by a [`BlockMode`] factory
///
/// One variant per mode and direction where the directions differ.
pub enum ModeState {
    /// CBC encryption state
    CbcEncrypt(CbcEncrypt),
    /// CBC decryption state
    CbcDecrypt(CbcDecrypt),
    /// ECB encryption state
    EcbEncrypt(EcbEncrypt),
    /// ECB decryption state
    EcbDecrypt(EcbDecrypt),
    /// CFB encryption state
    CfbEncrypt(CfbEncrypt),
    /// CFB decryption state
    CfbDecrypt(CfbDecrypt),
    /// OFB state (both directions)
    Ofb(Ofb),
    /// CTR state (both directions)
    Ctr(Ctr),
}

impl ModeState {
    /// Transforms exactly one block in place at `words[offset..offset +
    /// block_words]`
    pub fn process_block<C: BlockCipher>(
        &mut self,
        cipher: &C,
        words: &mut [u32],
        offset: usize,
    ) -> Result<()> {
        let end = offset + C::block_words();
        validate::require(
            end <= words.len(),
            "block offset",
            "block extends past the end of the buffer",
        )?;
        let block = &mut words[offset..end];
        match self {
            ModeState::CbcEncrypt(state) => state.process_block(cipher, block),
            ModeState::CbcDecrypt(state) => state.process_block(cipher, block),
            ModeState::EcbEncrypt(state) => state.process_block(cipher, block),
            ModeState::EcbDecrypt(state) => state.process_block(cipher, block),
            ModeState::CfbEncrypt(state) => state.process_block(cipher, block),
            ModeState::CfbDecrypt(state) => state.process_block(cipher, block),
            ModeState::Ofb(state) => state.process_block(cipher, block),
            ModeState::Ctr(state) => state.process_block(cipher, block),
        }
    }
}
