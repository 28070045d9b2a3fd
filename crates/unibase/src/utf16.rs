//! UTF-16 code unit classifiers and surrogate arithmetic.

use crate::CodePoint;

/// Maximum number of UTF-16 units per code point.
pub const MAX_LENGTH: usize = 2;

const LEAD_OFFSET: u32 = 0xD800 - (0x10000 >> 10);
const SURROGATE_OFFSET: u32 = (0xD800 << 10) + 0xDC00 - 0x10000;

pub const fn is_surrogate(unit: u16) -> bool {
    unit >= 0xD800 && unit <= 0xDFFF
}

pub const fn is_surrogate_lead(unit: u16) -> bool {
    unit >= 0xD800 && unit <= 0xDBFF
}

pub const fn is_trail(unit: u16) -> bool {
    unit >= 0xDC00 && unit <= 0xDFFF
}

pub const fn is_single(unit: u16) -> bool {
    !is_surrogate(unit)
}

/// `((lead - 0xD800) << 10) + (trail - 0xDC00) + 0x10000`.
pub const fn combine_surrogate_pair(lead: u16, trail: u16) -> CodePoint {
    CodePoint::from_u32(((lead as u32) << 10) + (trail as u32) - SURROGATE_OFFSET)
}

/// Number of units needed for `code_point`: 1 inside the BMP, 2 otherwise.
pub const fn code_point_len(code_point: CodePoint) -> usize {
    if code_point.bits() <= 0xFFFF {
        1
    } else {
        2
    }
}

pub const fn lead_surrogate(code_point: CodePoint) -> u16 {
    ((code_point.bits() >> 10) + LEAD_OFFSET) as u16
}

pub const fn trail_surrogate(code_point: CodePoint) -> u16 {
    ((code_point.bits() & 0x3FF) | 0xDC00) as u16
}

/// Decodes the code point starting at `src[*offset]` and leaves `offset` one
/// past it, so a surrogate pair advances by 2. An unpaired surrogate is
/// returned as its own value after consuming one unit.
pub fn next(src: &[u16], offset: &mut usize) -> CodePoint {
    let unit = src[*offset];
    *offset += 1;
    if is_surrogate_lead(unit) {
        if let Some(&trail) = src.get(*offset) {
            if is_trail(trail) {
                *offset += 1;
                return combine_surrogate_pair(unit, trail);
            }
        }
    }
    CodePoint::from_u32(unit as u32)
}

/// Writes `code_point` at `dst[*offset..]` and advances `offset` past it.
///
/// No validation: the caller guarantees both the value and the room. Panics
/// if `dst` is too short.
pub fn append_unchecked(dst: &mut [u16], offset: &mut usize, code_point: CodePoint) {
    if code_point.bits() <= 0xFFFF {
        dst[*offset] = code_point.bits() as u16;
        *offset += 1;
    } else {
        dst[*offset] = lead_surrogate(code_point);
        dst[*offset + 1] = trail_surrogate(code_point);
        *offset += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_unit_values() {
        let singles = [0x0000, 0xE065, 0x20AC, 0xD7FF];
        let leads = [0xD800, 0xD841, 0xD905, 0xDBFF];
        let trails = [0xDC00, 0xDC02, 0xDDEE, 0xDFFF];
        for u in singles {
            assert!(is_single(u) && !is_surrogate_lead(u) && !is_trail(u) && !is_surrogate(u));
        }
        for u in leads {
            assert!(!is_single(u) && is_surrogate_lead(u) && !is_trail(u) && is_surrogate(u));
        }
        for u in trails {
            assert!(!is_single(u) && !is_surrogate_lead(u) && is_trail(u) && is_surrogate(u));
        }
    }

    #[test]
    fn surrogate_pair_arithmetic() {
        let cp = CodePoint::new(0x10437);
        assert_eq!(code_point_len(cp), 2);
        assert_eq!(lead_surrogate(cp), 0xD801);
        assert_eq!(trail_surrogate(cp), 0xDC37);
        assert_eq!(combine_surrogate_pair(0xD801, 0xDC37), cp);
        assert_eq!(combine_surrogate_pair(0xD800, 0xDC00), CodePoint::new(0x10000));
        assert_eq!(combine_surrogate_pair(0xDBFF, 0xDFFF), CodePoint::MAX);
    }

    #[test]
    fn next_advances_past_pairs() {
        let src = [0xD801, 0xDC37, 0x41, 0xDC00, 0xD800];
        let mut off = 0;
        assert_eq!(next(&src, &mut off), CodePoint::new(0x10437));
        assert_eq!(off, 2);
        assert_eq!(next(&src, &mut off), CodePoint::new(0x41));
        assert_eq!(off, 3);
        assert_eq!(next(&src, &mut off), CodePoint::new(0xDC00));
        assert_eq!(off, 4);
        assert_eq!(next(&src, &mut off), CodePoint::new(0xD800));
        assert_eq!(off, 5);
    }

    #[test]
    fn lengths() {
        let cases = [(0x0000, 1), (0x20AC, 1), (0xFFFF, 1), (0x10000, 2), (0x10FFFF, 2)];
        for (v, len) in cases {
            assert_eq!(code_point_len(CodePoint::new(v)), len, "{v:#x}");
        }
    }

    #[test]
    fn append_matches_std_encoding() {
        for c in ['a', '\u{20AC}', '\u{FFFD}', '\u{10000}', '\u{1F600}', '\u{10FFFF}'] {
            let mut buf = [0u16; MAX_LENGTH];
            let mut off = 0;
            append_unchecked(&mut buf, &mut off, CodePoint::from(c));
            let mut expected = [0u16; 2];
            assert_eq!(&buf[..off], c.encode_utf16(&mut expected));
        }
    }
}
