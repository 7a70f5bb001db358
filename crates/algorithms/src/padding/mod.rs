//! Block cipher padding schemes
//!
//! A [`Padding`] handle extends data to a block-aligned length before
//! encryption and validates and strips that extension after decryption.
//! `pad` always leaves `sig_bytes` a multiple of the block size in bytes;
//! the deterministic schemes (PKCS#7, ANSI X9.23) verify their tail in
//! constant time during `unpad` and reject any inconsistency.

#[cfg(not(feature = "std"))]
use alloc::vec;

use rand::rngs::OsRng;
use rand::RngCore;
use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Error, Result};
use crate::types::WordArray;

/// Padding scheme for block ciphers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// Each pad byte carries the pad length (RFC 5652 §6.3)
    #[default]
    Pkcs7,
    /// Zero fill with the pad length in the final byte (ANSI X9.23)
    AnsiX923,
    /// Random fill with the pad length in the final byte (ISO 10126)
    Iso10126,
    /// A 0x80 marker byte followed by zero fill (ISO/IEC 9797-1 method 2)
    Iso97971,
    /// Zero fill, stripped greedily on unpad
    ZeroPadding,
    /// No padding; the data must already be block-aligned
    NoPadding,
}

impl Padding {
    /// Returns the conventional name of the scheme
    pub fn name(self) -> &'static str {
        match self {
            Padding::Pkcs7 => "PKCS#7",
            Padding::AnsiX923 => "ANSI X9.23",
            Padding::Iso10126 => "ISO 10126",
            Padding::Iso97971 => "ISO/IEC 9797-1",
            Padding::ZeroPadding => "zero padding",
            Padding::NoPadding => "no padding",
        }
    }

    /// Grows `data` so its significant bytes are a positive multiple of the
    /// block size
    pub fn pad(self, data: &mut WordArray, block_words: usize) -> Result<()> {
        let block_bytes = check_block_size(block_words)?;
        let n = block_bytes - data.sig_bytes() % block_bytes;
        match self {
            Padding::Pkcs7 => {
                data.concat(&WordArray::from_bytes(&vec![n as u8; n]));
            }
            Padding::AnsiX923 => {
                data.extend_zero(n - 1);
                data.concat(&WordArray::from_bytes(&[n as u8]));
            }
            Padding::Iso10126 => {
                let mut fill = vec![0u8; n];
                OsRng.fill_bytes(&mut fill);
                fill[n - 1] = n as u8;
                data.concat(&WordArray::from_bytes(&fill));
            }
            Padding::Iso97971 => {
                data.concat(&WordArray::from_bytes(&[0x80]));
                let rest = (block_bytes - data.sig_bytes() % block_bytes) % block_bytes;
                data.extend_zero(rest);
            }
            Padding::ZeroPadding => {
                data.extend_zero(n % block_bytes);
            }
            Padding::NoPadding => {
                validate::require(
                    data.sig_bytes() % block_bytes == 0,
                    "data length",
                    "must be block-aligned when no padding is used",
                )?;
            }
        }
        Ok(())
    }

    /// Validates and strips the padding, shrinking `data`
    pub fn unpad(self, data: &mut WordArray, block_words: usize) -> Result<()> {
        let block_bytes = check_block_size(block_words)?;
        match self {
            Padding::Pkcs7 => {
                let n = self.tail_length(data, block_bytes)?;
                let sig = data.sig_bytes();
                let mut ok = Choice::from(1u8);
                for i in sig - n..sig {
                    ok &= data.byte(i).ct_eq(&(n as u8));
                }
                if !bool::from(ok) {
                    return Err(Error::Padding {
                        scheme: self.name(),
                        details: "pad bytes do not match the pad length",
                    });
                }
                data.truncate(sig - n);
            }
            Padding::AnsiX923 => {
                let n = self.tail_length(data, block_bytes)?;
                let sig = data.sig_bytes();
                let mut ok = Choice::from(1u8);
                for i in sig - n..sig - 1 {
                    ok &= data.byte(i).ct_eq(&0);
                }
                if !bool::from(ok) {
                    return Err(Error::Padding {
                        scheme: self.name(),
                        details: "fill bytes are not zero",
                    });
                }
                data.truncate(sig - n);
            }
            Padding::Iso10126 => {
                // The fill is random; only the length byte can be checked.
                let n = self.tail_length(data, block_bytes)?;
                data.truncate(data.sig_bytes() - n);
            }
            Padding::Iso97971 => {
                strip_trailing_zeros(data);
                let sig = data.sig_bytes();
                if sig == 0 || data.byte(sig - 1) != 0x80 {
                    return Err(Error::Padding {
                        scheme: self.name(),
                        details: "missing 0x80 marker byte",
                    });
                }
                data.truncate(sig - 1);
            }
            Padding::ZeroPadding => {
                strip_trailing_zeros(data);
            }
            Padding::NoPadding => {}
        }
        Ok(())
    }

    // Reads and bounds-checks the pad length encoded in the final byte.
    fn tail_length(self, data: &WordArray, block_bytes: usize) -> Result<usize> {
        let sig = data.sig_bytes();
        if sig == 0 {
            return Err(Error::Padding {
                scheme: self.name(),
                details: "no data to unpad",
            });
        }
        let n = data.byte(sig - 1) as usize;
        if n == 0 || n > block_bytes || n > sig {
            return Err(Error::Padding {
                scheme: self.name(),
                details: "pad length byte out of range",
            });
        }
        Ok(n)
    }
}

fn check_block_size(block_words: usize) -> Result<usize> {
    validate::require(block_words > 0, "block size", "must be at least one word")?;
    let block_bytes = block_words * 4;
    // Pad lengths are encoded in one byte.
    validate::at_most("block size in bytes", block_bytes, 255)?;
    Ok(block_bytes)
}

fn strip_trailing_zeros(data: &mut WordArray) {
    let mut sig = data.sig_bytes();
    while sig > 0 && data.byte(sig - 1) == 0 {
        sig -= 1;
    }
    data.truncate(sig);
}

#[cfg(test)]
mod tests;
