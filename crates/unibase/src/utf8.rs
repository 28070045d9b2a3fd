//! UTF-8 state machine.
//!
//! [`next`] follows the well-formedness table of Unicode 3.9 (Table 3-7): a lead
//! byte selects the sequence length, the first trail byte is range-checked
//! against the lead to reject overlong forms, surrogates and values above
//! U+10FFFF, and an ill-formed sequence consumes only its longest valid prefix
//! (at least one byte) before reporting [`CodePoint::SENTINEL`].

use crate::CodePoint;

/// Maximum number of UTF-8 bytes per code point.
pub const MAX_LENGTH: usize = 4;

// Indexed by the low nibble of a 3-byte lead; bit `t1 >> 5` is set when the
// first trail byte is allowed (E0: A0..BF, ED: 80..9F, others: 80..BF).
const LEAD3_T1_BITS: [u8; 16] = [
    0x20, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x10, 0x30, 0x30,
];

// Indexed by `t1 >> 4`; bit `lead - 0xF0` is set when the pair is allowed
// (F0: 90..BF, F1..F3: 80..BF, F4: 80..8F).
const LEAD4_T1_BITS: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00,
];

/// How far a reader may look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Stop at this many bytes (clamped to the slice length).
    Length(usize),
    /// Stop at the first zero byte or at the end of the slice.
    NulTerminated,
}

impl Limit {
    fn unit(self, src: &[u8], i: usize) -> Option<u8> {
        match self {
            Limit::Length(n) => {
                if i < n {
                    src.get(i).copied()
                } else {
                    None
                }
            }
            Limit::NulTerminated => Some(src.get(i).copied().unwrap_or(0)),
        }
    }
}

pub const fn is_single(byte: u8) -> bool {
    byte < 0x80
}

/// True for bytes that can start a well-formed multi-byte sequence.
pub const fn is_lead(byte: u8) -> bool {
    byte >= 0xC2 && byte <= 0xF4
}

pub const fn is_trail(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of bytes needed for `code_point`.
pub const fn code_point_len(code_point: CodePoint) -> usize {
    let v = code_point.bits();
    if v <= 0x7F {
        1
    } else if v <= 0x7FF {
        2
    } else if v <= 0xFFFF {
        3
    } else {
        4
    }
}

/// Decodes the sequence starting at `src[*offset]` and leaves `offset` one
/// past the last byte consumed.
///
/// Panics if `*offset` is out of bounds.
pub fn next(src: &[u8], offset: &mut usize, limit: Limit) -> CodePoint {
    let lead = src[*offset];
    *offset += 1;
    if is_single(lead) {
        return CodePoint::new(lead as i32);
    }
    next_multi_byte(src, offset, limit, lead).unwrap_or(CodePoint::SENTINEL)
}

fn next_multi_byte(src: &[u8], i: &mut usize, limit: Limit, lead: u8) -> Option<CodePoint> {
    let mut c = lead as u32;
    if c >= 0xE0 {
        if c < 0xF0 {
            c &= 0x0F;
            let t = limit.unit(src, *i)?;
            if LEAD3_T1_BITS[c as usize] & (1 << (t >> 5)) == 0 {
                return None;
            }
            c = (c << 6) | (t & 0x3F) as u32;
            *i += 1;
        } else {
            c -= 0xF0;
            if c > 4 {
                return None;
            }
            let t = limit.unit(src, *i)?;
            if LEAD4_T1_BITS[(t >> 4) as usize] & (1 << c) == 0 {
                return None;
            }
            c = (c << 6) | (t & 0x3F) as u32;
            *i += 1;
            let t = limit.unit(src, *i)?.wrapping_sub(0x80);
            if t > 0x3F {
                return None;
            }
            c = (c << 6) | t as u32;
            *i += 1;
        }
    } else {
        if c < 0xC2 {
            return None;
        }
        c &= 0x1F;
    }
    let t = limit.unit(src, *i)?.wrapping_sub(0x80);
    if t > 0x3F {
        return None;
    }
    *i += 1;
    Some(CodePoint::from_u32((c << 6) | t as u32))
}

/// Writes `code_point` at `dst[*offset..]` and advances `offset` past it.
///
/// No validation: the caller guarantees both the value and the room. Panics
/// if `dst` is too short.
pub fn append_unchecked(dst: &mut [u8], offset: &mut usize, code_point: CodePoint) {
    let c = code_point.bits();
    let mut i = *offset;
    if c <= 0x7F {
        dst[i] = c as u8;
        i += 1;
    } else {
        if c <= 0x7FF {
            dst[i] = ((c >> 6) | 0xC0) as u8;
            i += 1;
        } else {
            if c <= 0xFFFF {
                dst[i] = ((c >> 12) | 0xE0) as u8;
                i += 1;
            } else {
                dst[i] = ((c >> 18) | 0xF0) as u8;
                dst[i + 1] = (((c >> 12) & 0x3F) | 0x80) as u8;
                i += 2;
            }
            dst[i] = (((c >> 6) & 0x3F) | 0x80) as u8;
            i += 1;
        }
        dst[i] = ((c & 0x3F) | 0x80) as u8;
        i += 1;
    }
    *offset = i;
}
