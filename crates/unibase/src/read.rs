//! Sequence readers.
//!
//! Each reader decodes one code point at `*char_index` and leaves the cursor on
//! the **last unit consumed**, so a plain `+= 1` moves to the next character:
//!
//! ```ignore
//! let mut i = 0;
//! while i < src.len() {
//!     let decoded = read_utf16(src, &mut i);
//!     // ...
//!     i += 1;
//! }
//! ```
//!
//! Failure never loses the value: `Decoded::code_point` always holds the best
//! effort result (the UTF-8 sentinel, a lone surrogate, an out-of-range UTF-32
//! unit) next to `valid == false`.

use crate::utf16;
use crate::utf8::{self, Limit};
use crate::validity::is_valid_codepoint;
use crate::CodePoint;

/// Outcome of decoding one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub code_point: CodePoint,
    pub valid: bool,
}

impl Decoded {
    pub fn checked(code_point: CodePoint) -> Self {
        Decoded {
            code_point,
            valid: is_valid_codepoint(code_point),
        }
    }

    pub fn invalid(code_point: CodePoint) -> Self {
        Decoded {
            code_point,
            valid: false,
        }
    }

    /// The decoded value, or U+FFFD when it is not a scalar value.
    pub fn or_replacement(self) -> CodePoint {
        if self.valid {
            self.code_point
        } else {
            CodePoint::REPLACEMENT
        }
    }
}

pub fn read_utf8(src: &[u8], char_index: &mut usize) -> Decoded {
    read_utf8_with_limit(src, char_index, Limit::Length(src.len()))
}

/// [`read_utf8`] with an explicit bound; [`Limit::NulTerminated`] treats the
/// first zero byte as the end of the input.
pub fn read_utf8_with_limit(src: &[u8], char_index: &mut usize, limit: Limit) -> Decoded {
    let code_point = utf8::next(src, char_index, limit);
    *char_index -= 1;
    Decoded::checked(code_point)
}

/// Unpaired surrogates come back as their own unit value, marked invalid.
pub fn read_utf16(src: &[u16], char_index: &mut usize) -> Decoded {
    let code_point = utf16::next(src, char_index);
    *char_index -= 1;
    Decoded::checked(code_point)
}

pub fn read_utf32(src: &[u32], char_index: &mut usize) -> Decoded {
    Decoded::checked(CodePoint::from_u32(src[*char_index]))
}

/// Reads one ASCII byte; anything at or above 0x80 is reported invalid.
pub fn read_ascii(src: &[u8], char_index: &mut usize) -> Decoded {
    let byte = src[*char_index];
    Decoded {
        code_point: CodePoint::new(byte as i32),
        valid: byte < 0x80,
    }
}
