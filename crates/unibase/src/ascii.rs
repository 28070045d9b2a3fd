//! Locale-independent ASCII case folding and classification for every code
//! unit width. Non-ASCII units pass through unchanged.

use std::cmp::Ordering;

use crate::whitespace::WHITESPACE_ASCII;
use crate::CodeUnit;

fn in_range<T: CodeUnit>(unit: T, lo: u8, hi: u8) -> bool {
    let v = unit.to_u32();
    v >= lo as u32 && v <= hi as u32
}

pub fn to_lower_ascii_unit<T: CodeUnit>(unit: T) -> T {
    if is_ascii_upper(unit) {
        T::from_ascii(unit.to_u32() as u8 + (b'a' - b'A'))
    } else {
        unit
    }
}

pub fn to_upper_ascii_unit<T: CodeUnit>(unit: T) -> T {
    if is_ascii_lower(unit) {
        T::from_ascii(unit.to_u32() as u8 - (b'a' - b'A'))
    } else {
        unit
    }
}

pub fn to_lower_ascii<T: CodeUnit>(units: &[T]) -> Vec<T> {
    units.iter().map(|&u| to_lower_ascii_unit(u)).collect()
}

pub fn to_upper_ascii<T: CodeUnit>(units: &[T]) -> Vec<T> {
    units.iter().map(|&u| to_upper_ascii_unit(u)).collect()
}

/// strcasecmp for ASCII: units are folded to lowercase and compared
/// unsigned; a proper prefix orders first.
pub fn compare_case_insensitive_ascii<T: CodeUnit>(a: &[T], b: &[T]) -> Ordering {
    for (&x, &y) in a.iter().zip(b) {
        let x = to_lower_ascii_unit(x).to_u32();
        let y = to_lower_ascii_unit(y).to_u32();
        match x.cmp(&y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Case-insensitive ASCII equality, also across unit widths.
pub fn equals_case_insensitive_ascii<T: CodeUnit, U: CodeUnit>(a: &[T], b: &[U]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&x, &y)| to_lower_ascii_unit(x).to_u32() == to_lower_ascii_unit(y).to_u32())
}

pub fn is_ascii_whitespace<T: CodeUnit>(unit: T) -> bool {
    unit.is_ascii() && WHITESPACE_ASCII.contains(&(unit.to_u32() as u8))
}

pub fn is_ascii_alpha<T: CodeUnit>(unit: T) -> bool {
    is_ascii_upper(unit) || is_ascii_lower(unit)
}

pub fn is_ascii_upper<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, b'A', b'Z')
}

pub fn is_ascii_lower<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, b'a', b'z')
}

pub fn is_ascii_digit<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, b'0', b'9')
}

pub fn is_ascii_alphanumeric<T: CodeUnit>(unit: T) -> bool {
    is_ascii_alpha(unit) || is_ascii_digit(unit)
}

pub fn is_ascii_printable<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, b' ', b'~')
}

pub fn is_ascii_control<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, 0x00, 0x1F) || unit.to_u32() == 0x7F
}

pub fn is_ascii_punctuation<T: CodeUnit>(unit: T) -> bool {
    in_range(unit, 0x21, 0x7E) && !is_ascii_alphanumeric(unit)
}

pub fn is_hex_digit<T: CodeUnit>(unit: T) -> bool {
    is_ascii_digit(unit) || in_range(unit, b'A', b'F') || in_range(unit, b'a', b'f')
}

/// `'4' -> 4`, `'a' -> 10`, `'B' -> 11`; `None` for anything else.
pub fn hex_digit_to_int<T: CodeUnit>(unit: T) -> Option<u32> {
    let v = unit.to_u32();
    if is_ascii_digit(unit) {
        Some(v - b'0' as u32)
    } else if in_range(unit, b'A', b'F') {
        Some(v - b'A' as u32 + 10)
    } else if in_range(unit, b'a', b'f') {
        Some(v - b'a' as u32 + 10)
    } else {
        None
    }
}
