use thiserror::Error;

/// The input bytes were not valid UTF-8.
///
/// Returned by the checked constructors ([`crate::StringGuts::from_utf8`],
/// [`crate::utf8::validate`]). The trusting decode path in [`crate::utf8`]
/// never produces this error; validity there is a caller contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid UTF-8 after {valid_up_to} valid bytes")]
pub struct Utf8Error {
    /// Length of the longest valid prefix, in bytes.
    pub valid_up_to: usize,
}

/// A closed range was constructed with `lower > upper`.
///
/// A closed range is never empty, so inverted bounds cannot be normalized
/// away; they are rejected outright.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("closed range requires lower bound <= upper bound")]
pub struct InvertedRangeError;
