use std::fmt;

/// A 32-bit scalar as produced by the sequence readers.
///
/// The value is not range-checked on construction: readers hand
/// back whatever they decoded (including the `SENTINEL` error value) and callers
/// decide with [`CodePoint::is_valid`] or [`CodePoint::is_valid_character`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CodePoint(i32);

impl CodePoint {
    /// Value reported for an ill-formed UTF-8 sequence.
    pub const SENTINEL: CodePoint = CodePoint(-1);
    /// U+FFFD REPLACEMENT CHARACTER.
    pub const REPLACEMENT: CodePoint = CodePoint(0xFFFD);
    /// Highest code point of the Unicode codespace.
    pub const MAX: CodePoint = CodePoint(0x10FFFF);

    pub const fn new(value: i32) -> Self {
        CodePoint(value)
    }

    /// Reinterprets a raw 32-bit unit. Values above `i32::MAX` wrap negative and
    /// therefore never pass validation.
    pub const fn from_u32(value: u32) -> Self {
        CodePoint(value as i32)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Bit pattern used by the writers, which do no validation of their own.
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    pub const fn is_valid(self) -> bool {
        crate::validity::is_valid_codepoint(self)
    }

    pub const fn is_valid_character(self) -> bool {
        crate::validity::is_valid_character(self)
    }

    pub fn to_char(self) -> Option<char> {
        if self.0 < 0 {
            return None;
        }
        char::from_u32(self.0 as u32)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c as i32)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "U+<invalid:{}>", self.0)
        } else {
            write!(f, "U+{:04X}", self.0)
        }
    }
}
