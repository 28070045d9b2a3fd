use unibase::{
    convert, convert_in_place, decode_all, transcode, utf16_to_ascii, utf16_to_utf32,
    utf16_to_utf8, utf32_to_ascii, utf32_to_utf16, utf32_to_utf8, utf8_to_ascii, utf8_to_utf16,
    utf8_to_utf32, Ascii, Encoding, Utf16, Utf32, Utf8,
};

const SAMPLES: &[&str] = &[
    "",
    "plain ascii",
    "caf\u{e9}",
    "\u{4f60}\u{597d}, \u{4e16}\u{754c}",
    "emoji \u{1F600}\u{1F680} mixed",
    "\u{10FFFF}\u{FFFD}\u{FFFE}\u{0}",
];

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn utf32(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

#[test]
fn valid_text_round_trips_between_unicode_forms() {
    for s in SAMPLES {
        let mut wide = Vec::new();
        assert!(utf8_to_utf16(s.as_bytes(), &mut wide), "{s:?}");
        assert_eq!(wide, utf16(s));

        let mut wider = Vec::new();
        assert!(utf16_to_utf32(&wide, &mut wider));
        assert_eq!(wider, utf32(s));

        let mut back = Vec::new();
        assert!(utf32_to_utf8(&wider, &mut back));
        assert_eq!(back, s.as_bytes());

        let mut narrow = Vec::new();
        assert!(utf32_to_utf16(&wider, &mut narrow));
        assert_eq!(narrow, wide);

        assert!(utf8_to_utf32(s.as_bytes(), &mut wider));
        assert_eq!(wider, utf32(s));

        assert!(utf16_to_utf8(&wide, &mut back));
        assert_eq!(back, s.as_bytes());
    }
}

#[test]
fn lone_surrogate_is_replaced_and_reported() {
    let mut out = Vec::new();
    assert!(!utf16_to_utf8(&[0xD800, 0x41], &mut out));
    assert_eq!(out, "\u{FFFD}A".as_bytes());

    // Reversed pair: two lone surrogates.
    assert!(!utf16_to_utf8(&[0xDC00, 0xD800], &mut out));
    assert_eq!(out, "\u{FFFD}\u{FFFD}".as_bytes());

    // Lead at the very end.
    let mut wide = Vec::new();
    assert!(!utf16_to_utf32(&[0x61, 0xDBFF], &mut wide));
    assert_eq!(wide, vec![0x61, 0xFFFD]);
}

#[test]
fn malformed_utf8_substitutes_per_maximal_prefix() {
    let mut out = Vec::new();
    // Truncated 3-byte sequence is one replacement, stray trail another.
    assert!(!utf8_to_utf16(b"a\xe2\x82b\x80c", &mut out));
    assert_eq!(out, utf16("a\u{FFFD}b\u{FFFD}c"));

    // Encoded surrogate: every byte is its own failure.
    assert!(!utf8_to_utf16(b"\xed\xa0\x80", &mut out));
    assert_eq!(out, utf16("\u{FFFD}\u{FFFD}\u{FFFD}"));
}

#[test]
fn out_of_range_utf32_values_are_replaced() {
    let mut out = Vec::new();
    assert!(!utf32_to_utf8(&[0x41, 0xD800, 0x110000, 0xFFFF_FFFF, 0x42], &mut out));
    assert_eq!(out, "A\u{FFFD}\u{FFFD}\u{FFFD}B".as_bytes());

    let mut wide = Vec::new();
    assert!(!utf32_to_utf16(&[0x1F600, 0xDFFF], &mut wide));
    assert_eq!(wide, utf16("\u{1F600}\u{FFFD}"));
}

#[test]
fn noncharacters_are_valid_code_points() {
    let mut out = Vec::new();
    assert!(utf32_to_utf8(&[0xFDD0, 0xFFFE, 0x10FFFF], &mut out));
    assert_eq!(out, "\u{FDD0}\u{FFFE}\u{10FFFF}".as_bytes());
}

#[test]
fn ascii_destination_uses_question_mark() {
    let mut out = Vec::new();
    assert!(!utf8_to_ascii("na\u{ef}ve".as_bytes(), &mut out));
    assert_eq!(out, b"na?ve");

    assert!(!utf16_to_ascii(&[0x41, 0xD800, 0x1F4, 0x42], &mut out));
    assert_eq!(out, b"A??B");

    assert!(!utf32_to_ascii(&[0x41, 0x1F600], &mut out));
    assert_eq!(out, b"A?");

    assert!(utf32_to_ascii(&[0x41, 0x7F], &mut out));
    assert_eq!(out, b"A\x7f");
}

#[test]
fn ascii_sources_round_trip_through_every_form() {
    let ascii: Vec<u8> = (0u8..0x80).collect();

    let (as_utf8, ok) = transcode::<Ascii, Utf8>(&ascii);
    assert!(ok);
    assert_eq!(as_utf8, ascii);

    let (as_utf16, ok) = transcode::<Ascii, Utf16>(&ascii);
    assert!(ok);
    let (back, ok) = transcode::<Utf16, Ascii>(&as_utf16);
    assert!(ok);
    assert_eq!(back, ascii);

    let (as_utf32, ok) = transcode::<Ascii, Utf32>(&ascii);
    assert!(ok);
    let (back, ok) = transcode::<Utf32, Ascii>(&as_utf32);
    assert!(ok);
    assert_eq!(back, ascii);
}

#[test]
fn in_place_conversion_matches_separate_buffers() {
    let inputs: &[&[u8]] = &[
        b"",
        b"ascii only",
        "caf\u{e9} \u{1F600}".as_bytes(),
        b"bad \xff\xfe bytes \xe2\x82",
    ];
    for input in inputs {
        let mut expected = Vec::new();
        let expected_ok = convert::<Utf8, Ascii>(input, &mut expected);

        let mut buf = input.to_vec();
        let ok = convert_in_place::<Utf8, Ascii>(&mut buf);
        assert_eq!(buf, expected);
        assert_eq!(ok, expected_ok);

        let mut buf = input.to_vec();
        let (copied, copied_ok) = transcode::<Utf8, Utf8>(input);
        assert_eq!(convert_in_place::<Utf8, Utf8>(&mut buf), copied_ok);
        assert_eq!(buf, copied);
    }
}

#[test]
fn same_encoding_repairs_invalid_utf8() {
    let (out, ok) = transcode::<Utf8, Utf8>(b"ok\xc0\xafok");
    assert!(!ok);
    assert_eq!(out, "ok\u{FFFD}\u{FFFD}ok".as_bytes());
}

#[test]
fn output_never_exceeds_the_reserved_bound() {
    let text = "\u{800}\u{FFFF}a\u{10000}\u{1F600}";
    let wide = utf16(text);
    let (out, ok) = transcode::<Utf16, Utf8>(&wide);
    assert!(ok);
    assert!(out.len() <= wide.len() * 3);

    let chars = utf32(text);
    let (out, _) = transcode::<Utf32, Utf8>(&chars);
    assert!(out.len() <= chars.len() * 4);
    let (out, _) = transcode::<Utf32, Utf16>(&chars);
    assert!(out.len() <= chars.len() * 2);
}

#[test]
fn decode_all_agrees_with_the_driver() {
    let src = b"x\xf0\x9f\x98y\xe2\x82\xac";
    let items: Vec<_> = decode_all::<Utf8>(src).collect();
    let offsets: Vec<usize> = items.iter().map(|(offset, _)| *offset).collect();
    assert_eq!(offsets, vec![0, 1, 4, 5]);
    assert_eq!(items.iter().filter(|(_, d)| !d.valid).count(), 1);

    let rebuilt: String = items
        .iter()
        .map(|(_, d)| d.or_replacement().to_char().unwrap_or('\u{FFFD}'))
        .collect();
    let (converted, ok) = transcode::<Utf8, Utf32>(src);
    assert!(!ok);
    assert_eq!(utf32(&rebuilt), converted);
}

#[test]
fn encoding_constants() {
    assert_eq!(Utf8::MAX_UNITS_PER_CODE_POINT, 4);
    assert_eq!(Utf16::MAX_UNITS_PER_CODE_POINT, 2);
    assert_eq!(Utf32::MAX_UNITS_PER_CODE_POINT, 1);
    assert_eq!(Ascii::REPLACEMENT.value(), b'?' as i32);
    assert_eq!(Utf16::NAME, "UTF-16");
}
