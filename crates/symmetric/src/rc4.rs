//! RC4 algorithm handles
//!
//! Stream handles binding RC4 to the buffered stream processor. The
//! processor's mode, padding and IV options do not apply to stream ciphers
//! and are ignored. `KEY_WORDS` is the size password derivation produces;
//! directly supplied keys may be any RC4-supported length.

use zeroize::Zeroizing;

use wcrypt_algorithms::stream;
use wcrypt_algorithms::WordArray;

use crate::config::CipherConfig;
use crate::error::Result;
use crate::processor::SymmetricCipher;
use crate::stream_cipher::StreamCipherProcessor;

/// Keystream bytes discarded by the RC4-drop handle, covering the biased
/// prefix
pub const RC4_DROP_BYTES: usize = 768;

fn keyed(key: &WordArray) -> Result<stream::Rc4> {
    let bytes = Zeroizing::new(key.to_bytes());
    Ok(stream::Rc4::new(&bytes)?)
}

fn keyed_with_drop(key: &WordArray) -> Result<stream::Rc4> {
    let bytes = Zeroizing::new(key.to_bytes());
    Ok(stream::Rc4::with_drop(&bytes, RC4_DROP_BYTES)?)
}

/// RC4 handle
pub enum Rc4 {}

impl SymmetricCipher for Rc4 {
    type Encryptor = StreamCipherProcessor<stream::Rc4>;
    type Decryptor = StreamCipherProcessor<stream::Rc4>;

    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 0;

    fn name() -> &'static str {
        "RC4"
    }

    fn encryptor(key: &WordArray, _cfg: &CipherConfig) -> Result<Self::Encryptor> {
        Ok(StreamCipherProcessor::new(keyed(key)?))
    }

    fn decryptor(key: &WordArray, _cfg: &CipherConfig) -> Result<Self::Decryptor> {
        Ok(StreamCipherProcessor::new(keyed(key)?))
    }
}

/// RC4-drop handle, discarding [`RC4_DROP_BYTES`] bytes of keystream
pub enum Rc4Drop {}

impl SymmetricCipher for Rc4Drop {
    type Encryptor = StreamCipherProcessor<stream::Rc4>;
    type Decryptor = StreamCipherProcessor<stream::Rc4>;

    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 0;

    fn name() -> &'static str {
        "RC4-drop"
    }

    fn encryptor(key: &WordArray, _cfg: &CipherConfig) -> Result<Self::Encryptor> {
        Ok(StreamCipherProcessor::new(keyed_with_drop(key)?))
    }

    fn decryptor(key: &WordArray, _cfg: &CipherConfig) -> Result<Self::Decryptor> {
        Ok(StreamCipherProcessor::new(keyed_with_drop(key)?))
    }
}
