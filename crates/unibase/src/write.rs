//! Sequence writers. None of them validate: callers pass scalar values (or
//! substitute U+FFFD first).

use crate::{utf16, utf8, CodePoint};

/// Appends `code_point` as UTF-8 and returns the number of bytes written.
pub fn append_utf8(code_point: CodePoint, out: &mut Vec<u8>) -> usize {
    let v = code_point.value();
    if (0..=0x7F).contains(&v) {
        out.push(v as u8);
        return 1;
    }

    let start = out.len();
    out.resize(start + utf8::MAX_LENGTH, 0);
    let mut end = start;
    utf8::append_unchecked(out, &mut end, code_point);
    out.truncate(end);
    end - start
}

/// Appends `code_point` as one UTF-16 unit or a surrogate pair.
pub fn append_utf16(code_point: CodePoint, out: &mut Vec<u16>) -> usize {
    if utf16::code_point_len(code_point) == 1 {
        out.push(code_point.bits() as u16);
        return 1;
    }
    out.push(utf16::lead_surrogate(code_point));
    out.push(utf16::trail_surrogate(code_point));
    utf16::MAX_LENGTH
}

pub fn append_utf32(code_point: CodePoint, out: &mut Vec<u32>) -> usize {
    out.push(code_point.bits());
    1
}

/// Appends the low byte; only meaningful for code points below 0x80.
pub fn append_ascii(code_point: CodePoint, out: &mut Vec<u8>) -> usize {
    out.push(code_point.bits() as u8);
    1
}
