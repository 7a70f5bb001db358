//! Text encoders for word arrays
//!
//! Encoders convert between [`WordArray`] byte content and textual
//! representations. Stringifying never fails; parsing rejects text that is
//! not valid for the encoding.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::types::WordArray;

/// Conversion between a word array and one textual representation
pub trait Encoder {
    /// Renders the significant bytes as text
    fn stringify(data: &WordArray) -> String;

    /// Parses text back into a word array
    fn parse(text: &str) -> Result<WordArray>;
}

/// Lowercase hexadecimal encoding
pub enum Hex {}

impl Encoder for Hex {
    fn stringify(data: &WordArray) -> String {
        hex::encode(data.to_bytes())
    }

    fn parse(text: &str) -> Result<WordArray> {
        let bytes = hex::decode(text).map_err(|_| Error::Encoding {
            encoding: "hex",
            details: "not a valid hex string",
        })?;
        Ok(WordArray::from_bytes(&bytes))
    }
}

/// Standard base64 encoding with padding
pub enum Base64 {}

impl Encoder for Base64 {
    fn stringify(data: &WordArray) -> String {
        BASE64.encode(data.to_bytes())
    }

    fn parse(text: &str) -> Result<WordArray> {
        let bytes = BASE64.decode(text).map_err(|_| Error::Encoding {
            encoding: "base64",
            details: "not a valid base64 string",
        })?;
        Ok(WordArray::from_bytes(&bytes))
    }
}

/// UTF-8 text
pub enum Utf8 {}

impl Encoder for Utf8 {
    fn stringify(data: &WordArray) -> String {
        String::from_utf8_lossy(&data.to_bytes()).into_owned()
    }

    fn parse(text: &str) -> Result<WordArray> {
        Ok(WordArray::from_bytes(text.as_bytes()))
    }
}

/// Latin-1 (ISO 8859-1) text, one byte per character
pub enum Latin1 {}

impl Encoder for Latin1 {
    fn stringify(data: &WordArray) -> String {
        data.to_bytes().iter().map(|&b| b as char).collect()
    }

    fn parse(text: &str) -> Result<WordArray> {
        let mut bytes = Vec::with_capacity(text.len());
        for c in text.chars() {
            if c as u32 > 0xff {
                return Err(Error::Encoding {
                    encoding: "latin1",
                    details: "character outside the Latin-1 range",
                });
            }
            bytes.push(c as u8);
        }
        Ok(WordArray::from_bytes(&bytes))
    }
}
