//! Buffered stream cipher processor
//!
//! Stream ciphers run through the same buffered pump as block ciphers with a
//! block size of one word and no padding: finalize simply flushes, and a
//! partial final word survives because the flush output is trimmed to the
//! pending byte count.

use wcrypt_algorithms::{StreamCipher, WordArray};

use crate::buffered::BlockBuffer;
use crate::error::{Error, Result};
use crate::processor::CipherProcessor;

/// Buffered processor driving a keystream cipher one word at a time
pub struct StreamCipherProcessor<C: StreamCipher> {
    cipher: C,
    buffer: BlockBuffer,
    finalized: bool,
}

impl<C: StreamCipher> StreamCipherProcessor<C> {
    /// Wraps a keyed stream cipher in a buffered processor
    ///
    /// Keystream application is an involution, so the same construction
    /// serves both directions.
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            buffer: BlockBuffer::new(1, 0),
            finalized: false,
        }
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
        let cipher = &mut self.cipher;
        let result = self
            .buffer
            .drain(flush, |words, offset| cipher.process_block(words, offset));
        match result {
            Ok(out) => Ok(out),
            Err(err) => {
                self.finalized = true;
                Err(err.into())
            }
        }
    }
}

impl<C: StreamCipher> CipherProcessor for StreamCipherProcessor<C> {
    fn process(&mut self, input: &WordArray) -> Result<WordArray> {
        self.check_live("process")?;
        self.buffer.append(input);
        self.drain(false)
    }

    fn finalize(&mut self, tail: Option<&WordArray>) -> Result<WordArray> {
        self.check_live("finalize")?;
        let mut out = match tail {
            Some(tail) => self.process(tail)?,
            None => WordArray::new(),
        };
        let flushed = self.drain(true);
        self.finalized = true;
        out.concat(&flushed?);
        Ok(out)
    }

    fn block_words(&self) -> usize {
        1
    }
}
