//! Argument guards for the primitives
//!
//! Every primitive checks its inputs before touching any state: key and
//! block sizes counted in words, IV lengths against the mode's block, pad
//! lengths against the one-byte budget of a block, buffer offsets against
//! the data actually present. These guards build the matching [`Error`] so
//! a check stays one line at the call site.

use super::{Error, Result};

/// Rejects the named argument unless `condition` holds
#[inline]
pub fn require(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::arg(name, reason))
    }
}

/// Checks an exact element count, such as a key or block size in words
#[inline]
pub fn exact(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Checks a lower bound on an element count
#[inline]
pub fn at_least(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual >= min {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: min,
            actual,
        })
    }
}

/// Checks an upper bound on an element count
#[inline]
pub fn at_most(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual <= max {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: max,
            actual,
        })
    }
}
