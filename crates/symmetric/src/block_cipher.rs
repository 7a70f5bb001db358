//! Buffered block cipher processor
//!
//! Composes a keyed block cipher with a mode state and a padding strategy
//! behind the buffered pump. Encryption pads the pending data and flushes
//! at finalize; decryption holds one block back so the padded final block
//! is still buffered when finalize strips the padding.

use zeroize::Zeroize;

use wcrypt_algorithms::block::modes::ModeState;
use wcrypt_algorithms::{BlockCipher, Padding, WordArray};

use crate::buffered::BlockBuffer;
use crate::config::CipherConfig;
use crate::error::{Error, Result};
use crate::processor::{CipherProcessor, Direction};

/// Buffered processor driving a block cipher through a mode and padding
pub struct BlockCipherProcessor<C: BlockCipher> {
    cipher: C,
    mode: ModeState,
    padding: Padding,
    direction: Direction,
    buffer: BlockBuffer,
    finalized: bool,
}

impl<C: BlockCipher> BlockCipherProcessor<C> {
    /// Creates an encrypting processor
    pub fn encryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self> {
        Self::with_direction(Direction::Encrypt, key, cfg)
    }

    /// Creates a decrypting processor
    pub fn decryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self> {
        Self::with_direction(Direction::Decrypt, key, cfg)
    }

    fn with_direction(direction: Direction, key: &WordArray, cfg: &CipherConfig) -> Result<Self> {
        if key.sig_bytes() != C::key_words() * 4 {
            return Err(Error::config("key", "length does not match the algorithm"));
        }
        let cipher = C::new(&key.words()[..C::key_words()])?;

        let iv_words = cfg.iv.as_ref().map(|iv| {
            if iv.sig_bytes() != iv.words().len() * 4 {
                return Err(Error::config("iv", "length is not a whole number of words"));
            }
            Ok(iv.words())
        });
        let iv_words = match iv_words {
            Some(result) => Some(result?),
            None => None,
        };

        // Decryption keeps one block buffered so the padded final block is
        // still available at finalize.
        let (mode, min_buffer_blocks) = match direction {
            Direction::Encrypt => (cfg.mode.encryptor(iv_words, C::block_words())?, 0),
            Direction::Decrypt => (cfg.mode.decryptor(iv_words, C::block_words())?, 1),
        };

        Ok(Self {
            cipher,
            mode,
            padding: cfg.padding,
            direction,
            buffer: BlockBuffer::new(C::block_words(), min_buffer_blocks),
            finalized: false,
        })
    }

    fn check_live(&self, operation: &'static str) -> Result<()> {
        if self.finalized {
            return Err(Error::Usage {
                operation,
                details: "processor already finalized; create a new one per message",
            });
        }
        Ok(())
    }

    fn drain(&mut self, flush: bool) -> Result<WordArray> {
        let cipher = &self.cipher;
        let mode = &mut self.mode;
        let result = self
            .buffer
            .drain(flush, |words, offset| mode.process_block(cipher, words, offset));
        match result {
            Ok(out) => Ok(out),
            Err(err) => {
                // Poison the processor; partial output is discarded.
                self.finalized = true;
                Err(err.into())
            }
        }
    }

    fn finalize_inner(&mut self, tail: Option<&WordArray>) -> Result<WordArray> {
        let mut out = match tail {
            Some(tail) => self.process(tail)?,
            None => WordArray::new(),
        };
        let block_bytes = C::block_words() * 4;

        match self.direction {
            Direction::Encrypt => {
                self.padding.pad(self.buffer.data_mut(), C::block_words())?;
                let flushed = self.drain(true)?;
                out.concat(&flushed);
            }
            Direction::Decrypt => {
                if self.buffer.total_bytes() == 0 {
                    return Err(Error::format("ciphertext", "empty input"));
                }
                if self.buffer.pending_bytes() % block_bytes != 0 {
                    return Err(Error::format(
                        "ciphertext",
                        "length is not a multiple of the block size",
                    ));
                }
                let mut flushed = self.drain(true)?;
                if let Err(err) = self.padding.unpad(&mut flushed, C::block_words()) {
                    flushed.zeroize();
                    return Err(err.into());
                }
                out.concat(&flushed);
            }
        }
        Ok(out)
    }
}

impl<C: BlockCipher> CipherProcessor for BlockCipherProcessor<C> {
    fn process(&mut self, input: &WordArray) -> Result<WordArray> {
        self.check_live("process")?;
        self.buffer.append(input);
        self.drain(false)
    }

    fn finalize(&mut self, tail: Option<&WordArray>) -> Result<WordArray> {
        self.check_live("finalize")?;
        let result = self.finalize_inner(tail);
        self.finalized = true;
        result
    }

    fn block_words(&self) -> usize {
        C::block_words()
    }
}
