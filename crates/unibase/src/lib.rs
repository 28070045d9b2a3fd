//! Unicode primitives: code point validity, per-encoding readers and
//! writers, whole-string transcoding between ASCII, UTF-8, UTF-16 and
//! UTF-32, and character-boundary-aware UTF-8 truncation.
//!
//! Malformed input never produces an error value. Readers report a
//! [`Decoded`] with `valid == false`, conversions substitute a replacement
//! and return `false`, and truncation keeps only the longest well-formed
//! prefix.
//!
//! The string helpers (`ascii`, `trim`, `replace`) are generic over
//! [`CodeUnit`] and treat input as a sequence of units.

pub mod ascii;
pub mod code_point;
pub mod code_unit;
pub mod convert;
pub mod encoding;
pub mod read;
pub mod replace;
pub mod trim;
pub mod truncate;
pub mod utf16;
pub mod utf8;
pub mod validity;
pub mod whitespace;
pub mod write;

pub use code_point::CodePoint;
pub use code_unit::{is_string_ascii, CodeUnit};
pub use convert::{
    ascii_to_utf16, ascii_to_utf32, ascii_to_utf8, convert, convert_in_place, size_coefficient,
    transcode, utf16_to_ascii, utf16_to_string_lossy, utf16_to_utf32, utf16_to_utf8,
    utf32_to_ascii, utf32_to_string_lossy, utf32_to_utf16, utf32_to_utf8, utf8_to_ascii,
    utf8_to_utf16, utf8_to_utf32,
};
pub use encoding::{decode_all, Ascii, CodePoints, Encoding, EncodingKind, Utf16, Utf32, Utf8};
pub use read::{read_ascii, read_utf16, read_utf32, read_utf8, Decoded};
pub use trim::TrimPositions;
pub use truncate::{truncate_str_to_byte_size, truncate_utf8_in_place, truncate_utf8_to_byte_size};
pub use validity::{is_valid_character, is_valid_codepoint};
pub use write::{append_ascii, append_utf16, append_utf32, append_utf8};
