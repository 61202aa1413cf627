//! Byte-level UTF-8 codec.
//!
//! Pure, stateless helpers over raw bytes. This layer is deliberately
//! *trusting*: `decode_scalar` combines payload bits without rejecting
//! overlong encodings or surrogate-range values. Every entry point documents
//! its contract and checks it with debug assertions; full validation is a
//! separate, explicit step ([`validate`]) used by the checked constructors.
//!
//! Invariants
//! - A lead byte is never a continuation byte (`10xxxxxx`).
//! - `scalar_len(lead)` equals the total byte count of the sequence `lead`
//!   starts, for every well-formed sequence.
//! - `decode_scalar` is the exact inverse of [`encode_scalar`] on valid
//!   UTF-8.

use crate::{Scalar, error::Utf8Error};

/// `true` when the top bit is clear: the byte is a complete one-byte scalar.
#[inline]
#[must_use]
pub const fn is_ascii(byte: u8) -> bool {
    byte & 0x80 == 0
}

/// `true` when the top two bits are `10`: a continuation byte, never the
/// first byte of a sequence.
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of bytes in the sequence started by `lead` (1 through 4).
///
/// For non-ASCII lead bytes this is the run of leading one-bits before the
/// first zero. Contract: `lead` is not a continuation byte.
#[inline]
#[must_use]
pub fn scalar_len(lead: u8) -> usize {
    debug_assert!(
        !is_continuation(lead),
        "scalar_len called on continuation byte {lead:#04x}"
    );
    if is_ascii(lead) {
        1
    } else {
        (!lead).leading_zeros() as usize
    }
}

/// Decodes one scalar from a complete 1–4 byte sequence.
///
/// Contract: `bytes.len() == scalar_len(bytes[0])` and every byte after the
/// first is a continuation byte. No overlong or surrogate-range validation
/// is performed; the caller vouches for the input (see [`validate`]).
#[must_use]
pub fn decode_scalar(bytes: &[u8]) -> Scalar {
    const PAYLOAD: u32 = 0x3F;
    let value = match *bytes {
        [a] => {
            debug_assert!(is_ascii(a));
            u32::from(a)
        }
        [a, b] => {
            debug_assert!(scalar_len(a) == 2 && is_continuation(b));
            (u32::from(a) & 0x1F) << 6 | u32::from(b) & PAYLOAD
        }
        [a, b, c] => {
            debug_assert!(scalar_len(a) == 3 && is_continuation(b) && is_continuation(c));
            (u32::from(a) & 0x0F) << 12 | (u32::from(b) & PAYLOAD) << 6 | u32::from(c) & PAYLOAD
        }
        [a, b, c, d] => {
            debug_assert!(
                scalar_len(a) == 4
                    && is_continuation(b)
                    && is_continuation(c)
                    && is_continuation(d)
            );
            (u32::from(a) & 0x07) << 18
                | (u32::from(b) & PAYLOAD) << 12
                | (u32::from(c) & PAYLOAD) << 6
                | u32::from(d) & PAYLOAD
        }
        _ => panic!("decode_scalar requires 1 to 4 bytes, got {}", bytes.len()),
    };
    Scalar::new_unchecked(value)
}

/// Encodes `scalar` into `buf`, returning the written prefix.
///
/// The inverse of [`decode_scalar`]. Surrogate code points encode with the
/// ordinary three-byte pattern; emitting them produces ill-formed UTF-8 and
/// is reserved for materializing foreign content that was never well-formed
/// to begin with.
pub fn encode_scalar(scalar: Scalar, buf: &mut [u8; 4]) -> &[u8] {
    let v = scalar.value();
    let len = scalar.len_utf8();
    match len {
        1 => buf[0] = v as u8,
        2 => {
            buf[0] = 0xC0 | (v >> 6) as u8;
            buf[1] = 0x80 | (v & 0x3F) as u8;
        }
        3 => {
            buf[0] = 0xE0 | (v >> 12) as u8;
            buf[1] = 0x80 | (v >> 6 & 0x3F) as u8;
            buf[2] = 0x80 | (v & 0x3F) as u8;
        }
        _ => {
            buf[0] = 0xF0 | (v >> 18) as u8;
            buf[1] = 0x80 | (v >> 12 & 0x3F) as u8;
            buf[2] = 0x80 | (v >> 6 & 0x3F) as u8;
            buf[3] = 0x80 | (v & 0x3F) as u8;
        }
    }
    &buf[..len]
}

/// `true` when `offset` falls on a scalar boundary of `bytes`.
///
/// Offsets `0` and `bytes.len()` are always boundaries; interior offsets are
/// boundaries exactly when the byte there is not a continuation byte.
#[inline]
#[must_use]
pub fn is_scalar_boundary(bytes: &[u8], offset: usize) -> bool {
    if offset == 0 || offset == bytes.len() {
        return true;
    }
    offset < bytes.len() && !is_continuation(bytes[offset])
}

/// Strict validation: rejects truncated sequences, overlong encodings, and
/// surrogate-range scalars.
///
/// This is the one place in the codec that distrusts its input. The trusting
/// fast paths assume their bytes already went through this (or came from
/// `&str`).
///
/// # Errors
///
/// Returns [`Utf8Error`] with the length of the longest valid prefix.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    match core::str::from_utf8(bytes) {
        Ok(_) => Ok(()),
        Err(e) => Err(Utf8Error {
            valid_up_to: e.valid_up_to(),
        }),
    }
}
