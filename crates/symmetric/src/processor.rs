//! Cipher processor and algorithm handle traits
//!
//! A [`CipherProcessor`] is the one-shot state machine for a single message:
//! zero or more [`process`](CipherProcessor::process) calls followed by
//! exactly one [`finalize`](CipherProcessor::finalize). A
//! [`SymmetricCipher`] is the stateless handle for an algorithm, exposing
//! its sizes and the factories producing processors for each direction.

use wcrypt_algorithms::WordArray;

use crate::config::CipherConfig;
use crate::error::Result;

/// Transform direction, fixed when a processor is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

/// One-shot buffered cipher processor for a single message
pub trait CipherProcessor {
    /// Appends input and returns the data transformed so far
    ///
    /// Fails with a usage error once the processor has been finalized or has
    /// reported an error.
    fn process(&mut self, input: &WordArray) -> Result<WordArray>;

    /// Processes an optional final chunk, applies final-block handling and
    /// returns the remaining output
    ///
    /// The processor cannot be used afterwards.
    fn finalize(&mut self, tail: Option<&WordArray>) -> Result<WordArray>;

    /// The processor's block size in words
    fn block_words(&self) -> usize;
}

/// Stateless handle describing a symmetric cipher algorithm
///
/// Handles carry no per-operation state and may be shared freely across
/// threads; all state lives in the processors they create.
pub trait SymmetricCipher {
    /// Processor produced for the encryption direction
    type Encryptor: CipherProcessor;

    /// Processor produced for the decryption direction
    type Decryptor: CipherProcessor;

    /// Key size in 32-bit words
    const KEY_WORDS: usize;

    /// IV size in 32-bit words (zero when the algorithm takes no IV)
    const IV_WORDS: usize;

    /// Returns the name of the algorithm
    fn name() -> &'static str;

    /// Creates an encrypting processor over the key and configuration
    fn encryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Encryptor>;

    /// Creates a decrypting processor over the key and configuration
    fn decryptor(key: &WordArray, cfg: &CipherConfig) -> Result<Self::Decryptor>;
}
