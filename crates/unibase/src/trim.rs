//! Trimming a set of code units from either end of a string.

use bitflags::bitflags;

use crate::ascii::is_ascii_whitespace;
use crate::whitespace::{WHITESPACE_UTF16, WHITESPACE_UTF32};
use crate::CodeUnit;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrimPositions: u8 {
        const LEADING = 1 << 0;
        const TRAILING = 1 << 1;
        const ALL = Self::LEADING.bits() | Self::TRAILING.bits();
    }
}

impl TrimPositions {
    pub const NONE: Self = Self::empty();
}

fn trim_bounds<T: CodeUnit>(
    input: &[T],
    positions: TrimPositions,
    is_trimmed: impl Fn(T) -> bool,
) -> (usize, usize) {
    let mut begin = 0;
    let mut end = input.len();
    if positions.contains(TrimPositions::LEADING) {
        while begin < end && is_trimmed(input[begin]) {
            begin += 1;
        }
    }
    if positions.contains(TrimPositions::TRAILING) {
        while end > begin && is_trimmed(input[end - 1]) {
            end -= 1;
        }
    }
    (begin, end)
}

/// Returns the subslice left after removing units in `trim_chars` from the
/// requested ends. `trim_chars` is a set of code units, not a substring.
pub fn trim_string<'a, T: CodeUnit>(
    input: &'a [T],
    trim_chars: &[T],
    positions: TrimPositions,
) -> &'a [T] {
    let (begin, end) = trim_bounds(input, positions, |u| trim_chars.contains(&u));
    &input[begin..end]
}

/// Like [`trim_string`], writing into `output` and reporting which ends
/// actually had something removed. A non-empty input that trims away
/// completely reports every requested position.
pub fn trim_string_into<T: CodeUnit>(
    input: &[T],
    trim_chars: &[T],
    positions: TrimPositions,
    output: &mut Vec<T>,
) -> TrimPositions {
    let (begin, end) = trim_bounds(input, positions, |u| trim_chars.contains(&u));
    output.clear();
    output.extend_from_slice(&input[begin..end]);

    if input.is_empty() {
        return TrimPositions::NONE;
    }
    if begin == end {
        return positions;
    }
    let mut removed = TrimPositions::NONE;
    if begin > 0 {
        removed |= TrimPositions::LEADING;
    }
    if end < input.len() {
        removed |= TrimPositions::TRAILING;
    }
    removed
}

/// Trims Unicode whitespace from UTF-16 text.
pub fn trim_whitespace(input: &[u16], positions: TrimPositions) -> &[u16] {
    trim_string(input, WHITESPACE_UTF16, positions)
}

pub fn trim_whitespace_utf32(input: &[u32], positions: TrimPositions) -> &[u32] {
    trim_string(input, WHITESPACE_UTF32, positions)
}

/// Trims ASCII whitespace from any width. Safe on UTF-8 since no whitespace
/// byte can occur inside a multi-byte sequence.
pub fn trim_whitespace_ascii<T: CodeUnit>(input: &[T], positions: TrimPositions) -> &[T] {
    let (begin, end) = trim_bounds(input, positions, is_ascii_whitespace);
    &input[begin..end]
}

/// Trims Unicode whitespace from a `str`, keeping char boundaries.
pub fn trim_whitespace_str(input: &str, positions: TrimPositions) -> &str {
    let is_ws = |c: char| WHITESPACE_UTF32.contains(&(c as u32));
    let mut out = input;
    if positions.contains(TrimPositions::LEADING) {
        out = out.trim_start_matches(is_ws);
    }
    if positions.contains(TrimPositions::TRAILING) {
        out = out.trim_end_matches(is_ws);
    }
    out
}
