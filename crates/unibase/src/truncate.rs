//! Byte-budget truncation of UTF-8 text on character boundaries.

use crate::utf8::{self, Limit};
use crate::validity::is_valid_character;

/// Returns the longest prefix of `input`, at most `byte_size` bytes long, that
/// ends right after a complete character.
///
/// When `byte_size >= input.len()` the input is returned unchanged. Otherwise
/// the scan walks backwards from `byte_size - 1`, decoding forward (bounded by
/// `byte_size`) from each candidate start until it finds a valid character;
/// non-characters such as U+FFFE count as invalid here. If none is found the
/// result is empty.
pub fn truncate_utf8_to_byte_size(input: &[u8], byte_size: usize) -> &[u8] {
    if byte_size >= input.len() {
        return input;
    }

    let limit = Limit::Length(byte_size);
    let mut candidate = byte_size.checked_sub(1);
    while let Some(start) = candidate {
        let mut end = start;
        let code_point = utf8::next(input, &mut end, limit);
        if is_valid_character(code_point) {
            return &input[..end];
        }
        candidate = start.checked_sub(1);
    }
    &input[..0]
}

/// [`truncate_utf8_to_byte_size`] for text that is already valid UTF-8.
pub fn truncate_str_to_byte_size(input: &str, byte_size: usize) -> &str {
    let len = truncate_utf8_to_byte_size(input.as_bytes(), byte_size).len();
    // A successful decode from a `str` always ends on a char boundary.
    &input[..len]
}

/// Truncates `buf` in place; same result as [`truncate_utf8_to_byte_size`].
pub fn truncate_utf8_in_place(buf: &mut Vec<u8>, byte_size: usize) {
    let len = truncate_utf8_to_byte_size(buf, byte_size).len();
    buf.truncate(len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_exact_fits() {
        assert_eq!(truncate_utf8_to_byte_size(b"abc", 2), b"ab");
        assert_eq!(truncate_utf8_to_byte_size(b"\xe1\x80\xbf", 3), b"\xe1\x80\xbf");
        assert_eq!(truncate_utf8_to_byte_size(b"\xe1\x80\xbf", 0), b"");
        assert_eq!(truncate_utf8_to_byte_size(b"", 0), b"");
    }

    #[test]
    fn mid_character_budget_rounds_down() {
        assert_eq!(truncate_utf8_to_byte_size(b"\xc2\x81\xc2\x81", 3), b"\xc2\x81");
        assert_eq!(truncate_utf8_to_byte_size(b"\xc2\x81\xc2\x81", 2), b"\xc2\x81");
        assert_eq!(truncate_utf8_to_byte_size(b"\xc2\x81\xc2\x81", 1), b"");
    }

    #[test]
    fn str_form_keeps_char_boundaries() {
        let s = "h\u{E9}llo \u{1F600}!";
        for budget in 0..=s.len() + 2 {
            let t = truncate_str_to_byte_size(s, budget);
            assert!(t.len() <= budget.max(s.len()));
            assert!(s.starts_with(t));
        }
        assert_eq!(truncate_str_to_byte_size(s, 2), "h");
        assert_eq!(truncate_str_to_byte_size(s, 9), "h\u{E9}llo ");
    }

    #[test]
    fn in_place_matches_borrowing_form() {
        let input = b"a\xc2\x81\xe1\x80\xbf\xf1\x80\xa0\xbfz".to_vec();
        for budget in 0..=input.len() + 1 {
            let mut buf = input.clone();
            truncate_utf8_in_place(&mut buf, budget);
            assert_eq!(buf, truncate_utf8_to_byte_size(&input, budget), "budget {budget}");
        }
    }
}
