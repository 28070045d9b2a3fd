//! Replacing or removing every occurrence of a set of code units.

use crate::CodeUnit;

/// Copies `input` into `output`, substituting the whole `replace_with`
/// sequence for each unit found in `find_any_of`. Returns whether anything
/// matched.
pub fn replace_chars<T: CodeUnit>(
    input: &[T],
    find_any_of: &[T],
    replace_with: &[T],
    output: &mut Vec<T>,
) -> bool {
    output.clear();
    output.reserve(input.len());
    let mut matched = false;
    for &unit in input {
        if find_any_of.contains(&unit) {
            output.extend_from_slice(replace_with);
            matched = true;
        } else {
            output.push(unit);
        }
    }
    matched
}

pub fn remove_chars<T: CodeUnit>(input: &[T], remove: &[T], output: &mut Vec<T>) -> bool {
    replace_chars(input, remove, &[], output)
}

/// Same result as [`replace_chars`] with `buf` as both input and output,
/// in linear time.
pub fn replace_chars_in_place<T: CodeUnit>(
    buf: &mut Vec<T>,
    find_any_of: &[T],
    replace_with: &[T],
) -> bool {
    match replace_with.len() {
        0 => {
            let before = buf.len();
            buf.retain(|u| !find_any_of.contains(u));
            buf.len() != before
        }
        1 => {
            let mut matched = false;
            for unit in buf.iter_mut() {
                if find_any_of.contains(unit) {
                    *unit = replace_with[0];
                    matched = true;
                }
            }
            matched
        }
        grow => {
            let matches = buf.iter().filter(|u| find_any_of.contains(u)).count();
            if matches == 0 {
                return false;
            }
            let old_len = buf.len();
            let new_len = old_len + matches * (grow - 1);
            buf.resize(new_len, T::default());

            // Fill from the back so unread units are never overwritten.
            let mut write = new_len;
            for read in (0..old_len).rev() {
                let unit = buf[read];
                if find_any_of.contains(&unit) {
                    write -= grow;
                    buf[write..write + grow].copy_from_slice(replace_with);
                } else {
                    write -= 1;
                    buf[write] = unit;
                }
            }
            debug_assert_eq!(write, 0);
            true
        }
    }
}

pub fn remove_chars_in_place<T: CodeUnit>(buf: &mut Vec<T>, remove: &[T]) -> bool {
    replace_chars_in_place(buf, remove, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_each_unit_with_the_whole_sequence() {
        let mut out = Vec::new();
        assert!(replace_chars(b"a/b\\c", b"/\\", b"::", &mut out));
        assert_eq!(out, b"a::b::c");

        assert!(!replace_chars(b"abc", b"", b"x", &mut out));
        assert_eq!(out, b"abc");

        assert!(remove_chars(b"a-b-c", b"-", &mut out));
        assert_eq!(out, b"abc");
    }

    #[test]
    fn in_place_matches_copying_form() {
        let inputs: [&[u8]; 6] = [b"", b"xxx", b"axbxc", b"abc", b"xabcx", b"yxzzy"];
        let finds: [&[u8]; 3] = [b"", b"x", b"xy"];
        let replacements: [&[u8]; 4] = [b"", b"-", b"<>", b"[..]"];
        for input in inputs {
            for find in finds {
                for rep in replacements {
                    let mut expected = Vec::new();
                    let expected_matched = replace_chars(input, find, rep, &mut expected);
                    let mut buf = input.to_vec();
                    let matched = replace_chars_in_place(&mut buf, find, rep);
                    assert_eq!(buf, expected, "{input:?} {find:?} {rep:?}");
                    assert_eq!(matched, expected_matched);
                }
            }
        }
    }

    #[test]
    fn wide_units() {
        let mut buf: Vec<u16> = "a\u{3000}b".encode_utf16().collect();
        assert!(replace_chars_in_place(&mut buf, &[0x3000], &[0x20, 0x20]));
        assert_eq!(String::from_utf16_lossy(&buf), "a  b");
        assert!(remove_chars_in_place(&mut buf, &[0x20]));
        assert_eq!(String::from_utf16_lossy(&buf), "ab");
    }
}
