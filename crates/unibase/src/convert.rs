//! Whole-string transcoding between ASCII, UTF-8, UTF-16 and UTF-32.
//!
//! Every conversion fills the destination completely. Code points that cannot
//! be decoded (or, for an ASCII destination, represented) are written as the
//! destination's replacement, and the call returns `false`; output is never
//! cut short.

use crate::code_unit::is_string_ascii;
use crate::encoding::{Ascii, Encoding, EncodingKind, Utf16, Utf32, Utf8};
use crate::CodeUnit;

/// Upper bound on destination units produced per source unit, used to size
/// the destination once up front.
pub fn size_coefficient(src: EncodingKind, dest: EncodingKind) -> usize {
    match (src, dest) {
        (EncodingKind::Utf32, EncodingKind::Utf8) => 4,
        (EncodingKind::Utf16, EncodingKind::Utf8) => 3,
        (EncodingKind::Utf32, EncodingKind::Utf16) => 2,
        // A UTF-8 byte never yields more than one unit in any encoding, and
        // every other pair is at most 1:1.
        _ => 1,
    }
}

/// Replaces the contents of `dest` with `src` transcoded from `S` to `D`.
///
/// Returns `true` iff every source code point was valid (and representable
/// in `D`).
pub fn convert<S: Encoding, D: Encoding>(src: &[S::Unit], dest: &mut Vec<D::Unit>) -> bool {
    dest.clear();

    if S::KIND == EncodingKind::Ascii || is_string_ascii(src) {
        widen_or_narrow::<S::Unit, D::Unit>(src, dest);
        return true;
    }

    dest.reserve(src.len() * size_coefficient(S::KIND, D::KIND));

    let mut success = true;
    let mut char_index = 0;
    while char_index < src.len() {
        let decoded = S::read(src, &mut char_index);
        let mut code_point = decoded.code_point;
        if !decoded.valid || !D::can_encode(code_point) {
            success = false;
            code_point = D::REPLACEMENT;
        }
        D::append(code_point, dest);
        char_index += 1;
    }
    success
}

/// Allocating form of [`convert`].
pub fn transcode<S: Encoding, D: Encoding>(src: &[S::Unit]) -> (Vec<D::Unit>, bool) {
    let mut dest = Vec::new();
    let ok = convert::<S, D>(src, &mut dest);
    (dest, ok)
}

/// Transcodes `buf` onto itself. Only available for pairs that share a unit
/// type; the result is identical to converting into a separate buffer.
pub fn convert_in_place<S, D>(buf: &mut Vec<S::Unit>) -> bool
where
    S: Encoding,
    D: Encoding<Unit = S::Unit>,
{
    let src = std::mem::take(buf);
    convert::<S, D>(&src, buf)
}

/// Unit-by-unit copy. For ASCII sources this is exact; any non-ASCII source
/// unit is truncated to the destination width.
fn widen_or_narrow<S: CodeUnit, D: CodeUnit>(src: &[S], dest: &mut Vec<D>) {
    dest.reserve(src.len());
    dest.extend(src.iter().map(|u| D::from_ascii(u.to_u32() as u8)));
}

// ASCII to others. These always succeed.

pub fn ascii_to_utf8(ascii: &[u8], utf8_output: &mut Vec<u8>) -> bool {
    convert::<Ascii, Utf8>(ascii, utf8_output)
}

pub fn ascii_to_utf16(ascii: &[u8], utf16_output: &mut Vec<u16>) -> bool {
    convert::<Ascii, Utf16>(ascii, utf16_output)
}

pub fn ascii_to_utf32(ascii: &[u8], utf32_output: &mut Vec<u32>) -> bool {
    convert::<Ascii, Utf32>(ascii, utf32_output)
}

// UTF-8 to others.

pub fn utf8_to_utf16(utf8: &[u8], utf16_output: &mut Vec<u16>) -> bool {
    convert::<Utf8, Utf16>(utf8, utf16_output)
}

pub fn utf8_to_utf32(utf8: &[u8], utf32_output: &mut Vec<u32>) -> bool {
    convert::<Utf8, Utf32>(utf8, utf32_output)
}

pub fn utf8_to_ascii(utf8: &[u8], ascii_output: &mut Vec<u8>) -> bool {
    convert::<Utf8, Ascii>(utf8, ascii_output)
}

// UTF-16 to others.

pub fn utf16_to_utf8(utf16: &[u16], utf8_output: &mut Vec<u8>) -> bool {
    convert::<Utf16, Utf8>(utf16, utf8_output)
}

pub fn utf16_to_utf32(utf16: &[u16], utf32_output: &mut Vec<u32>) -> bool {
    convert::<Utf16, Utf32>(utf16, utf32_output)
}

pub fn utf16_to_ascii(utf16: &[u16], ascii_output: &mut Vec<u8>) -> bool {
    convert::<Utf16, Ascii>(utf16, ascii_output)
}

// UTF-32 to others.

pub fn utf32_to_utf8(utf32: &[u32], utf8_output: &mut Vec<u8>) -> bool {
    convert::<Utf32, Utf8>(utf32, utf8_output)
}

pub fn utf32_to_utf16(utf32: &[u32], utf16_output: &mut Vec<u16>) -> bool {
    convert::<Utf32, Utf16>(utf32, utf16_output)
}

pub fn utf32_to_ascii(utf32: &[u32], ascii_output: &mut Vec<u8>) -> bool {
    convert::<Utf32, Ascii>(utf32, ascii_output)
}

/// UTF-16 to a `String`, ignoring the validity flag.
pub fn utf16_to_string_lossy(utf16: &[u16]) -> String {
    let mut out = Vec::new();
    utf16_to_utf8(utf16, &mut out);
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// UTF-32 to a `String`, ignoring the validity flag.
pub fn utf32_to_string_lossy(utf32: &[u32]) -> String {
    let mut out = Vec::new();
    utf32_to_utf8(utf32, &mut out);
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
