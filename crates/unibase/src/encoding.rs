//! Per-encoding behaviour behind one trait, so the driver and the iterator are
//! written once for every (source, destination) pair.

use std::marker::PhantomData;

use crate::read::{self, Decoded};
use crate::{utf16, utf8, write, CodePoint, CodeUnit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EncodingKind {
    Ascii,
    Utf8,
    Utf16,
    Utf32,
}

impl EncodingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EncodingKind::Ascii => "ascii",
            EncodingKind::Utf8 => "utf8",
            EncodingKind::Utf16 => "utf16",
            EncodingKind::Utf32 => "utf32",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(EncodingKind::Ascii),
            "utf8" | "utf-8" => Some(EncodingKind::Utf8),
            "utf16" | "utf-16" => Some(EncodingKind::Utf16),
            "utf32" | "utf-32" => Some(EncodingKind::Utf32),
            _ => None,
        }
    }

    /// Size of one code unit in bytes.
    pub fn unit_size(self) -> usize {
        match self {
            EncodingKind::Ascii | EncodingKind::Utf8 => 1,
            EncodingKind::Utf16 => 2,
            EncodingKind::Utf32 => 4,
        }
    }
}

pub trait Encoding {
    type Unit: CodeUnit;

    const KIND: EncodingKind;
    const NAME: &'static str;
    const MAX_UNITS_PER_CODE_POINT: usize;
    /// What the driver writes in place of a code point it cannot emit.
    const REPLACEMENT: CodePoint = CodePoint::REPLACEMENT;

    /// Decodes at `*char_index`, leaving the cursor on the last unit consumed.
    fn read(src: &[Self::Unit], char_index: &mut usize) -> Decoded;

    /// Appends `code_point` and returns the number of units written.
    fn append(code_point: CodePoint, out: &mut Vec<Self::Unit>) -> usize;

    /// Whether `code_point` (already known to be a scalar value) has a
    /// representation in this encoding.
    fn can_encode(_code_point: CodePoint) -> bool {
        true
    }

    fn is_single_unit(unit: Self::Unit) -> bool;

    fn is_lead_unit(unit: Self::Unit) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Ascii;

#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

#[derive(Clone, Copy, Debug, Default)]
pub struct Utf16;

#[derive(Clone, Copy, Debug, Default)]
pub struct Utf32;

impl Encoding for Ascii {
    type Unit = u8;

    const KIND: EncodingKind = EncodingKind::Ascii;
    const NAME: &'static str = "ASCII";
    const MAX_UNITS_PER_CODE_POINT: usize = 1;
    const REPLACEMENT: CodePoint = CodePoint::new(b'?' as i32);

    fn read(src: &[u8], char_index: &mut usize) -> Decoded {
        read::read_ascii(src, char_index)
    }

    fn append(code_point: CodePoint, out: &mut Vec<u8>) -> usize {
        write::append_ascii(code_point, out)
    }

    fn can_encode(code_point: CodePoint) -> bool {
        (0..0x80).contains(&code_point.value())
    }

    fn is_single_unit(unit: u8) -> bool {
        unit < 0x80
    }

    fn is_lead_unit(_unit: u8) -> bool {
        false
    }
}

impl Encoding for Utf8 {
    type Unit = u8;

    const KIND: EncodingKind = EncodingKind::Utf8;
    const NAME: &'static str = "UTF-8";
    const MAX_UNITS_PER_CODE_POINT: usize = utf8::MAX_LENGTH;

    fn read(src: &[u8], char_index: &mut usize) -> Decoded {
        read::read_utf8(src, char_index)
    }

    fn append(code_point: CodePoint, out: &mut Vec<u8>) -> usize {
        write::append_utf8(code_point, out)
    }

    fn is_single_unit(unit: u8) -> bool {
        utf8::is_single(unit)
    }

    fn is_lead_unit(unit: u8) -> bool {
        utf8::is_lead(unit)
    }
}

impl Encoding for Utf16 {
    type Unit = u16;

    const KIND: EncodingKind = EncodingKind::Utf16;
    const NAME: &'static str = "UTF-16";
    const MAX_UNITS_PER_CODE_POINT: usize = utf16::MAX_LENGTH;

    fn read(src: &[u16], char_index: &mut usize) -> Decoded {
        read::read_utf16(src, char_index)
    }

    fn append(code_point: CodePoint, out: &mut Vec<u16>) -> usize {
        write::append_utf16(code_point, out)
    }

    fn is_single_unit(unit: u16) -> bool {
        utf16::is_single(unit)
    }

    fn is_lead_unit(unit: u16) -> bool {
        utf16::is_surrogate_lead(unit)
    }
}

impl Encoding for Utf32 {
    type Unit = u32;

    const KIND: EncodingKind = EncodingKind::Utf32;
    const NAME: &'static str = "UTF-32";
    const MAX_UNITS_PER_CODE_POINT: usize = 1;

    fn read(src: &[u32], char_index: &mut usize) -> Decoded {
        read::read_utf32(src, char_index)
    }

    fn append(code_point: CodePoint, out: &mut Vec<u32>) -> usize {
        write::append_utf32(code_point, out)
    }

    fn is_single_unit(_unit: u32) -> bool {
        true
    }

    fn is_lead_unit(_unit: u32) -> bool {
        false
    }
}

/// Iterator over `(start_offset, Decoded)` for every code point of a source.
#[derive(Clone, Debug)]
pub struct CodePoints<'a, E: Encoding> {
    src: &'a [E::Unit],
    index: usize,
    _encoding: PhantomData<E>,
}

impl<E: Encoding> Iterator for CodePoints<'_, E> {
    type Item = (usize, Decoded);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.src.len() {
            return None;
        }
        let start = self.index;
        let decoded = E::read(self.src, &mut self.index);
        self.index += 1;
        Some((start, decoded))
    }
}

pub fn decode_all<E: Encoding>(src: &[E::Unit]) -> CodePoints<'_, E> {
    CodePoints {
        src,
        index: 0,
        _encoding: PhantomData,
    }
}
