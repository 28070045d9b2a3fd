#![no_main]

use libfuzzer_sys::fuzz_target;
use unibase::{transcode, Utf16, Utf8};

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .take(32 * 1024)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    let (utf8, ok) = transcode::<Utf16, Utf8>(&units);
    let expected = String::from_utf16_lossy(&units);
    assert_eq!(utf8, expected.as_bytes());
    assert_eq!(ok, String::from_utf16(&units).is_ok());
});
