//! A compact, polymorphic string representation ("guts") with a
//! Unicode-scalar view over it, plus a closed-interval collection sharing
//! the same sum-typed-index-with-sentinel pattern.
//!
//! The representation switches transparently between an inline small-string
//! encoding, natively-owned growable storage, and foreign (externally-owned,
//! possibly non-UTF-8) storage, while keeping O(1) access to contiguous
//! UTF-8 bytes whenever the representation can provide them.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod guts;
mod range;
mod scalar;
mod scalars;

pub mod utf8;
pub mod utf16;

#[cfg(test)]
mod tests;

pub use error::{InvertedRangeError, Utf8Error};
pub use guts::{ForeignSource, SMALL_CAP, StringGuts, Utf16Buffer};
pub use range::{ClosedRange, ClosedRangeIndex, ClosedRangeIter, Stride};
pub use scalar::Scalar;
pub use scalars::{ScalarIndex, Scalars, UnicodeScalarView};
