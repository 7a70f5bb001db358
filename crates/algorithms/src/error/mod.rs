//! Error handling for cryptographic primitives
//!
//! One enum covers the ways a primitive in this crate can refuse to work:
//! an argument that does not fit the operation, a key/IV/block/buffer with
//! the wrong element count, padding that fails verification on removal, and
//! text that does not decode. The [`validate`] module holds the one-line
//! guards that build these errors at the top of each operation.

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument the operation cannot work with
    Argument {
        /// Which argument was rejected
        name: Cow<'static, str>,
        /// What disqualified it
        reason: Cow<'static, str>,
    },

    /// A key, IV, block or buffer with the wrong element count
    Length {
        /// What was measured
        context: &'static str,
        /// Count the operation needs, or the bound it enforces
        expected: usize,
        /// Count that was supplied
        actual: usize,
    },

    /// Padding that failed verification during removal
    Padding {
        /// Padding scheme that rejected the data
        scheme: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Text that is not valid for its encoding
    Encoding {
        /// Name of the encoding
        encoding: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Builds an [`Error::Argument`], accepting anything stringly for the
    /// two parts
    pub fn arg<N, R>(name: N, reason: R) -> Self
    where
        N: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        Error::Argument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument { name, reason } => {
                write!(f, "{} rejected: {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} has length {}, needs {}",
                    context, actual, expected
                )
            }
            Error::Padding { scheme, details } => {
                write!(f, "{} padding rejected: {}", scheme, details)
            }
            Error::Encoding { encoding, details } => {
                write!(f, "{} data rejected: {}", encoding, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
