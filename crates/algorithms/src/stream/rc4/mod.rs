//! RC4 stream cipher implementation
//!
//! RC4 is cryptographically broken (RFC 7465 prohibits it in TLS) and is
//! provided for compatibility with legacy data only. The keystream biases
//! in the first bytes can be mitigated by discarding a prefix of the
//! keystream (`RC4-drop`); [`Rc4::with_drop`] implements that variant.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use super::StreamCipher;
use crate::error::{validate, Result};

/// RC4 keystream state
#[derive(Clone, Zeroize)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Drop for Rc4 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Rc4 {
    /// Creates a keyed RC4 instance
    ///
    /// The key may be 1 to 256 bytes long.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::at_least("RC4 key", key.len(), 1)?;
        validate::at_most("RC4 key", key.len(), 256)?;

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j
                .wrapping_add(s[i])
                .wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }
        Ok(Self { s, i: 0, j: 0 })
    }

    /// Creates a keyed RC4 instance discarding the first `drop_bytes` bytes
    /// of keystream
    pub fn with_drop(key: &[u8], drop_bytes: usize) -> Result<Self> {
        let mut cipher = Self::new(key)?;
        for _ in 0..drop_bytes {
            cipher.next_byte();
        }
        Ok(cipher)
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        self.s[self.s[self.i as usize].wrapping_add(self.s[self.j as usize]) as usize]
    }
}

impl StreamCipher for Rc4 {
    fn process_block(&mut self, words: &mut [u32], offset: usize) -> Result<()> {
        validate::require(
            offset < words.len(),
            "block offset",
            "block extends past the end of the buffer",
        )?;
        let mut keystream = [0u8; 4];
        for byte in keystream.iter_mut() {
            *byte = self.next_byte();
        }
        words[offset] ^= BigEndian::read_u32(&keystream);
        keystream.zeroize();
        Ok(())
    }
}
