//! Code point classification.

use crate::CodePoint;

/// True for Unicode scalar values: `[0, 0xD800)` and `[0xE000, 0x10FFFF]`.
/// Non-characters and unassigned code points are allowed.
pub const fn is_valid_codepoint(code_point: CodePoint) -> bool {
    let v = code_point.value();
    (v >= 0 && v < 0xD800) || (v >= 0xE000 && v <= 0x10FFFF)
}

/// Like [`is_valid_codepoint`] but also rejects the non-characters
/// U+FDD0..=U+FDEF and every code point ending in FFFE or FFFF.
pub const fn is_valid_character(code_point: CodePoint) -> bool {
    let v = code_point.value();
    (v >= 0 && v < 0xD800)
        || (v >= 0xE000 && v < 0xFDD0)
        || (v > 0xFDEF && v <= 0x10FFFF && (v & 0xFFFE) != 0xFFFE)
}

pub const fn is_surrogate_code_point(code_point: CodePoint) -> bool {
    let v = code_point.value();
    v >= 0xD800 && v <= 0xDFFF
}

pub const fn is_noncharacter(code_point: CodePoint) -> bool {
    let v = code_point.value();
    (v >= 0xFDD0 && v <= 0xFDEF) || (v >= 0 && v <= 0x10FFFF && (v & 0xFFFE) == 0xFFFE)
}
