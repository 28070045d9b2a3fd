#![no_main]

use libfuzzer_sys::fuzz_target;
use unibase::{transcode, Utf16, Utf32, Utf8};

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 64 * 1024 {
        &data[..64 * 1024]
    } else {
        data
    };

    let (wide, ok16) = transcode::<Utf8, Utf16>(data);
    let (wider, ok32) = transcode::<Utf8, Utf32>(data);
    assert_eq!(ok16, ok32);
    assert_eq!(ok16, std::str::from_utf8(data).is_ok());

    // Replacement output is always well formed, so the second hop succeeds.
    let (back, ok) = transcode::<Utf16, Utf8>(&wide);
    assert!(ok);
    let (back32, ok) = transcode::<Utf32, Utf8>(&wider);
    assert!(ok);
    assert_eq!(back, back32);
    assert_eq!(back, String::from_utf8_lossy(data).as_bytes());
});
