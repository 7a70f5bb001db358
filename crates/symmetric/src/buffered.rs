//! Buffered block assembly
//!
//! [`BlockBuffer`] is the pump shared by the block and stream processors: it
//! accumulates input of arbitrary length and releases it to a per-block
//! transform in whole blocks, in order, holding back a configurable tail.

use zeroize::Zeroize;

use wcrypt_algorithms::{Result as PrimitiveResult, WordArray};

/// Accumulates words and drains them through a per-block transform
pub(crate) struct BlockBuffer {
    data: WordArray,
    total_bytes: u64,
    block_words: usize,
    min_buffer_blocks: usize,
}

impl BlockBuffer {
    /// Creates a buffer for `block_words`-sized blocks, always retaining at
    /// least `min_buffer_blocks` whole blocks on non-flushing drains
    pub(crate) fn new(block_words: usize, min_buffer_blocks: usize) -> Self {
        Self {
            data: WordArray::new(),
            total_bytes: 0,
            block_words,
            min_buffer_blocks,
        }
    }

    /// Appends input to the pending data
    pub(crate) fn append(&mut self, input: &WordArray) {
        self.data.concat(input);
        self.total_bytes += input.sig_bytes() as u64;
    }

    /// Bytes not yet drained
    pub(crate) fn pending_bytes(&self) -> usize {
        self.data.sig_bytes()
    }

    /// Total bytes ever appended
    pub(crate) fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Mutable access to the pending data, for final-block padding
    pub(crate) fn data_mut(&mut self) -> &mut WordArray {
        &mut self.data
    }

    /// Runs `transform` over every ready block and splits the processed
    /// words off the head of the buffer.
    ///
    /// Without `flush`, a block is ready when it is complete and at least
    /// `min_buffer_blocks` whole blocks would remain buffered behind it.
    /// With `flush`, everything pending is released, rounding up to a whole
    /// block over the zeroed dead tail; the returned array's significant
    /// bytes never exceed the bytes actually pending.
    pub(crate) fn drain<F>(&mut self, flush: bool, mut transform: F) -> PrimitiveResult<WordArray>
    where
        F: FnMut(&mut [u32], usize) -> PrimitiveResult<()>,
    {
        let block_bytes = self.block_words * 4;
        let pending = self.data.sig_bytes();

        let n_blocks = if flush {
            // Zero the dead tail before it is ciphered as part of the last block.
            self.data.clamp();
            (pending + block_bytes - 1) / block_bytes
        } else {
            (pending / block_bytes).saturating_sub(self.min_buffer_blocks)
        };
        let n_words = n_blocks * self.block_words;
        if n_words == 0 {
            return Ok(WordArray::new());
        }
        let out_bytes = core::cmp::min(n_words * 4, pending);

        self.data.ensure_words(n_words);
        for offset in (0..n_words).step_by(self.block_words) {
            transform(self.data.words_mut(), offset)?;
        }
        self.data.drain_words(n_words, out_bytes)
    }
}

impl Drop for BlockBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
