//! Term decoding for dictionary operations.
//!
//! This module provides the [`TermText`] trait, which lets every
//! string-accepting operation of the index take either text or raw bytes.
//! Raw bytes are decoded with the lossy UTF-8 policy: each maximal invalid
//! byte sequence becomes a single U+FFFD replacement character, so results on
//! malformed input are deterministic.

use smallvec::SmallVec;
use std::borrow::Cow;

/// Inline capacity for decoded code-point buffers.
///
/// Terms up to this many code points are decoded without a heap allocation.
pub const INLINE_TERM_LEN: usize = 32;

/// Code points of a decoded term.
pub type CodePoints = SmallVec<[char; INLINE_TERM_LEN]>;

/// Anything that can be decoded into a term of Unicode scalar values.
///
/// # Example
///
/// ```rust
/// use levtrie::dictionary::term::TermText;
///
/// assert_eq!("café".decode(), "café");
/// assert_eq!(b"caf\xFF"[..].decode(), "caf\u{FFFD}");
/// ```
pub trait TermText {
    /// Decode into text, borrowing when the input is already valid UTF-8.
    fn decode(&self) -> Cow<'_, str>;

    /// Decode into a buffer of code points.
    #[inline]
    fn code_points(&self) -> CodePoints {
        self.decode().chars().collect()
    }
}

impl TermText for str {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TermText for String {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TermText for Cow<'_, str> {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl TermText for [u8] {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl TermText for Vec<u8> {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl<const N: usize> TermText for [u8; N] {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl<T: TermText + ?Sized> TermText for &T {
    #[inline]
    fn decode(&self) -> Cow<'_, str> {
        (**self).decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_borrows() {
        let decoded = "hello".decode();
        assert!(matches!(decoded, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_code_points_unicode() {
        let units = "café".code_points();
        // 'é' is 2 bytes in UTF-8 but a single code point
        assert_eq!(units.as_slice(), &['c', 'a', 'f', 'é']);
    }

    #[test]
    fn test_code_points_emoji() {
        let units = "👻💩💩👻".code_points();
        assert_eq!(units.len(), 4);
        assert_eq!(units[1], '💩');
    }

    #[test]
    fn test_invalid_bytes_use_replacement_char() {
        let bytes: &[u8] = b"ab\xFFcd";
        assert_eq!(bytes.decode(), "ab\u{FFFD}cd");
        assert_eq!(bytes.code_points().len(), 5);
    }

    #[test]
    fn test_truncated_sequence_is_one_replacement() {
        // First two bytes of a three-byte sequence ("€" is E2 82 AC)
        let bytes = [b'x', 0xE2, 0x82, b'y'];
        assert_eq!(bytes.decode(), "x\u{FFFD}y");
    }

    #[test]
    fn test_valid_bytes_roundtrip() {
        let bytes = "Crème".as_bytes().to_vec();
        assert_eq!(bytes.decode(), "Crème");
    }

    #[test]
    fn test_reference_forwarding() {
        let owned = String::from("abc");
        let by_ref: &String = &owned;
        assert_eq!(by_ref.decode(), "abc");
        assert_eq!(by_ref.code_points().as_slice(), &['a', 'b', 'c']);
    }
}
