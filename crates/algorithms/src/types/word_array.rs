//! Byte data as a sequence of big-endian 32-bit words
//!
//! A [`WordArray`] stores byte data packed into 32-bit words (big-endian byte
//! order within each word) together with a significant-byte count. The word
//! granularity is what block ciphers, modes and paddings in this crate are
//! defined over; the byte views convert at the boundary.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// A byte buffer represented as big-endian 32-bit words plus a
/// significant-byte count.
///
/// Invariant: `sig_bytes <= 4 * words.len()`, and the storage always covers
/// the significant bytes (`words.len() >= ceil(sig_bytes / 4)`). Bytes of the
/// last word beyond `sig_bytes` are don't-care until [`clamp`](Self::clamp)
/// zeroes them.
#[derive(Clone, Default, Zeroize)]
pub struct WordArray {
    words: Vec<u32>,
    sig_bytes: usize,
}

impl WordArray {
    /// Creates an empty word array
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a word array from words and an explicit significant-byte count
    ///
    /// Fails if `sig_bytes` exceeds the storage (`4 * words.len()`).
    pub fn from_words(words: Vec<u32>, sig_bytes: usize) -> Result<Self> {
        validate::at_most("word array significant bytes", sig_bytes, words.len() * 4)?;
        Ok(Self { words, sig_bytes })
    }

    /// Creates a word array from raw bytes, packing them big-endian
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = Vec::with_capacity((bytes.len() + 3) / 4);
        let mut chunks = bytes.chunks_exact(4);
        for chunk in &mut chunks {
            words.push(BigEndian::read_u32(chunk));
        }
        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut word = 0u32;
            for (i, &b) in tail.iter().enumerate() {
                word |= (b as u32) << (24 - 8 * i);
            }
            words.push(word);
        }
        Self {
            words,
            sig_bytes: bytes.len(),
        }
    }

    /// Creates a word array with `n_bytes` random bytes from the given RNG
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, n_bytes: usize) -> Self {
        let mut bytes = vec![0u8; n_bytes];
        rng.fill_bytes(&mut bytes);
        let out = Self::from_bytes(&bytes);
        bytes.zeroize();
        out
    }

    /// Returns the backing words
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the backing words mutably
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Returns the number of significant bytes
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// Returns true when no significant bytes are present
    pub fn is_empty(&self) -> bool {
        self.sig_bytes == 0
    }

    /// Returns the significant byte at `index`, or zero past the storage
    pub fn byte(&self, index: usize) -> u8 {
        match self.words.get(index / 4) {
            Some(word) => ((word >> (24 - 8 * (index % 4))) & 0xff) as u8,
            None => 0,
        }
    }

    /// Copies the significant bytes out as a byte vector
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.sig_bytes);
        for i in 0..self.sig_bytes {
            bytes.push(self.byte(i));
        }
        bytes
    }

    /// Zeroes the don't-care bytes past `sig_bytes` and trims the storage to
    /// the words the significant bytes occupy
    pub fn clamp(&mut self) {
        let full_words = self.sig_bytes / 4;
        let tail_bytes = self.sig_bytes % 4;
        if tail_bytes != 0 {
            if let Some(word) = self.words.get_mut(full_words) {
                *word &= 0xffff_ffffu32 << (32 - 8 * tail_bytes);
            }
        }
        self.words.truncate(full_words + (tail_bytes != 0) as usize);
    }

    /// Appends another word array's significant bytes to this one
    pub fn concat(&mut self, other: &WordArray) {
        self.clamp();
        if self.sig_bytes % 4 == 0 {
            // Word-aligned: splice the words straight in.
            self.words.extend_from_slice(&other.words);
            self.words
                .truncate(self.sig_bytes / 4 + (other.sig_bytes + 3) / 4);
            self.sig_bytes += other.sig_bytes;
        } else {
            for i in 0..other.sig_bytes {
                self.push_byte(other.byte(i));
            }
        }
    }

    /// Grows the array by `n_bytes` zero bytes
    pub fn extend_zero(&mut self, n_bytes: usize) {
        self.clamp();
        self.sig_bytes += n_bytes;
        self.ensure_words((self.sig_bytes + 3) / 4);
    }

    /// Zero-fills the storage so at least `n_words` words are present
    pub fn ensure_words(&mut self, n_words: usize) {
        if self.words.len() < n_words {
            self.words.resize(n_words, 0);
        }
    }

    /// Shrinks the significant-byte count to `n_bytes` (no-op when already
    /// at or below it)
    pub fn truncate(&mut self, n_bytes: usize) {
        if n_bytes < self.sig_bytes {
            self.sig_bytes = n_bytes;
            self.clamp();
        }
    }

    /// Splits off the first `n_words` words as a new array carrying
    /// `n_bytes` of the significant bytes
    ///
    /// The storage must already cover `n_words` words and `n_bytes` must not
    /// exceed the significant bytes present.
    pub fn drain_words(&mut self, n_words: usize, n_bytes: usize) -> Result<WordArray> {
        validate::at_most("drained words", n_words, self.words.len())?;
        validate::at_most("drained bytes", n_bytes, self.sig_bytes)?;
        let head: Vec<u32> = self.words.drain(..n_words).collect();
        self.sig_bytes -= n_bytes;
        Ok(WordArray {
            words: head,
            sig_bytes: n_bytes,
        })
    }

    // Appends one byte. The byte position must be zero, which holds after
    // clamp() for the partial tail word.
    fn push_byte(&mut self, byte: u8) {
        let i = self.sig_bytes;
        if i / 4 >= self.words.len() {
            self.words.push(0);
        }
        self.words[i / 4] |= (byte as u32) << (24 - 8 * (i % 4));
        self.sig_bytes += 1;
    }
}

impl PartialEq for WordArray {
    fn eq(&self, other: &Self) -> bool {
        if self.sig_bytes != other.sig_bytes {
            return false;
        }
        (0..self.sig_bytes).all(|i| self.byte(i) == other.byte(i))
    }
}

impl Eq for WordArray {}

impl From<&[u8]> for WordArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for WordArray {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

/// Hex rendering of the significant bytes
impl fmt::Display for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.sig_bytes {
            write!(f, "{:02x}", self.byte(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordArray({}, {} bytes)", self, self.sig_bytes)
    }
}
