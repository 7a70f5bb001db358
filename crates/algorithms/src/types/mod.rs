//! Core data containers
//!
//! This module houses the [`WordArray`] buffer that every primitive in the
//! crate operates on.

mod word_array;

pub use word_array::WordArray;
