//! Percent encoding used by the signature.
//!
//! This is not `application/x-www-form-urlencoded`: space becomes `%20`
//! instead of `+`, and only `A-Z a-z 0-9 - _ . ~` pass through unchanged.
//! The remote side recomputes the signature over the same bytes, so any
//! deviation here turns into a signature mismatch.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::constants::PAAPI_QUERY_ENCODE_SET;

/// Percent encode a string.
///
/// Returns the input borrowed when every byte is unreserved.
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    percent_encode_bytes(s.as_bytes())
}

/// Percent encode an arbitrary byte string.
///
/// Every reserved byte `c` becomes `%XY` with `XY` the uppercase hex digits of `c`.
pub fn percent_encode_bytes(bs: &[u8]) -> Cow<'_, str> {
    percent_encoding::percent_encode(bs, &PAAPI_QUERY_ENCODE_SET).into()
}

/// Decode a percent encoded string back into raw bytes.
pub fn percent_decode(s: &str) -> Vec<u8> {
    percent_decode_str(s).collect()
}

/// Returns true if `b` is passed through by [`percent_encode`].
#[inline]
pub fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}
