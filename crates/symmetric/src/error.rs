//! Error handling for cipher processing
//!
//! This crate keeps its own error taxonomy and converts primitive errors at
//! the boundary. Key material never appears in error payloads.

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;

use wcrypt_algorithms::Error as PrimitiveError;

/// The error type for cipher processing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid or inconsistent configuration (missing IV, mis-sized key, ...)
    Config {
        /// What was being configured
        context: &'static str,
        /// Details about the failure
        details: Cow<'static, str>,
    },

    /// Malformed serialized or wire data
    Format {
        /// Format or field being parsed
        context: &'static str,
        /// Details about the failure
        details: Cow<'static, str>,
    },

    /// Invalid padding encountered while finalizing a decryption
    Padding {
        /// Details about the failure
        details: Cow<'static, str>,
    },

    /// Key derivation failure
    Kdf {
        /// Derivation step that failed
        context: &'static str,
        /// Details about the failure
        details: Cow<'static, str>,
    },

    /// API misuse, such as processing after finalize
    Usage {
        /// Operation that was attempted
        operation: &'static str,
        /// Details about the misuse
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Config error
    pub fn config<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Config {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Format {
            context,
            details: details.into(),
        }
    }
}

/// Result type for cipher processing operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { context, details } => {
                write!(f, "Invalid configuration for {}: {}", context, details)
            }
            Error::Format { context, details } => {
                write!(f, "Malformed {}: {}", context, details)
            }
            Error::Padding { details } => write!(f, "Padding error: {}", details),
            Error::Kdf { context, details } => {
                write!(f, "Key derivation failed in {}: {}", context, details)
            }
            Error::Usage { operation, details } => {
                write!(f, "Invalid use of {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Primitive errors surface as configuration errors unless they carry a more
// specific meaning (padding); format-level decisions stay at the call sites
// that know they are parsing data rather than wiring up a cipher.
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Argument { name, reason } => Error::Config {
                context: "argument",
                details: Cow::Owned(format!("{}: {}", name, reason)),
            },
            PrimitiveError::Length {
                context,
                expected,
                actual,
            } => Error::Config {
                context,
                details: Cow::Owned(format!("expected length {}, got {}", expected, actual)),
            },
            PrimitiveError::Padding { scheme, details } => Error::Padding {
                details: Cow::Owned(format!("{}: {}", scheme, details)),
            },
            PrimitiveError::Encoding { encoding, details } => Error::Format {
                context: encoding,
                details: Cow::Borrowed(details),
            },
            PrimitiveError::Other(msg) => Error::Config {
                context: "primitive",
                details: Cow::Borrowed(msg),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_padding_errors_keep_their_kind() {
        let err: Error = PrimitiveError::Padding {
            scheme: "PKCS#7",
            details: "bad tail",
        }
        .into();
        assert!(matches!(err, Error::Padding { .. }));
    }

    #[test]
    fn primitive_length_errors_become_config_errors() {
        let err: Error = PrimitiveError::Length {
            context: "AES-128 key",
            expected: 4,
            actual: 2,
        }
        .into();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn display_never_prints_key_material() {
        let err = Error::config("key", "expected 4 words");
        let text = format!("{}", err);
        assert!(text.contains("expected 4 words"));
    }
}
