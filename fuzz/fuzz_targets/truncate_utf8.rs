#![no_main]

use libfuzzer_sys::fuzz_target;
use unibase::truncate_utf8_to_byte_size;

fuzz_target!(|data: &[u8]| {
    let Some((&budget, text)) = data.split_first() else {
        return;
    };
    let budget = budget as usize;

    let out = truncate_utf8_to_byte_size(text, budget);
    assert!(text.starts_with(out));
    if budget >= text.len() {
        assert_eq!(out.len(), text.len());
    } else {
        assert!(out.len() <= budget);
        if std::str::from_utf8(text).is_ok() {
            assert!(std::str::from_utf8(out).is_ok());
        }
    }
});
