//! MD5 hash function implementation
//!
//! This module implements MD5 as specified in RFC 1321. MD5 is broken for
//! collision resistance and is provided solely because the OpenSSL
//! `EVP_BytesToKey` derivation is defined over it; do not use it where a
//! secure hash is required.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::HashFunction;

/// MD5 output size in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 block size in bytes
pub const MD5_BLOCK_SIZE: usize = 64;

// Round constants, floor(abs(sin(i + 1)) * 2^32)
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

// Per-round left-rotation amounts
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// MD5 hash function state
#[derive(Clone, Zeroize)]
pub struct Md5 {
    state: [u32; 4],
    buffer: [u8; MD5_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Md5 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Md5 {
    fn process_block(&mut self, block: &[u8]) {
        let mut m = [0u32; 16];
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            m[i] = LittleEndian::read_u32(chunk);
        }

        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..64 {
            let (f, g) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let tmp = d;
            d = c;
            c = b;
            b = b.wrapping_add(
                a.wrapping_add(f)
                    .wrapping_add(K[i])
                    .wrapping_add(m[g])
                    .rotate_left(S[i]),
            );
            a = tmp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }
}

impl HashFunction for Md5 {
    fn new() -> Self {
        Self {
            state: [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476],
            buffer: [0u8; MD5_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);

        let mut input = data;
        if self.buffer_idx > 0 {
            let take = core::cmp::min(MD5_BLOCK_SIZE - self.buffer_idx, input.len());
            self.buffer[self.buffer_idx..self.buffer_idx + take].copy_from_slice(&input[..take]);
            self.buffer_idx += take;
            input = &input[take..];
            if self.buffer_idx == MD5_BLOCK_SIZE {
                let block = self.buffer;
                self.process_block(&block);
                self.buffer_idx = 0;
            }
        }

        let mut blocks = input.chunks_exact(MD5_BLOCK_SIZE);
        for block in &mut blocks {
            self.process_block(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_idx = rest.len();
        Ok(())
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        let bit_len = self.total_bytes.wrapping_mul(8);

        // One 0x80 byte, zeros to 56 mod 64, then the bit length little-endian.
        let mut pad = [0u8; MD5_BLOCK_SIZE * 2];
        pad[0] = 0x80;
        let pad_len = if self.buffer_idx < 56 {
            56 - self.buffer_idx
        } else {
            120 - self.buffer_idx
        };
        let mut tail = [0u8; 8];
        LittleEndian::write_u64(&mut tail, bit_len);

        self.update(&pad[..pad_len])?;
        self.update(&tail)?;
        debug_assert_eq!(self.buffer_idx, 0);

        let mut digest = vec![0u8; MD5_OUTPUT_SIZE];
        for (i, word) in self.state.iter().enumerate() {
            LittleEndian::write_u32(&mut digest[4 * i..4 * i + 4], *word);
        }
        Ok(digest)
    }

    fn output_size() -> usize {
        MD5_OUTPUT_SIZE
    }
}

#[cfg(test)]
mod tests;
