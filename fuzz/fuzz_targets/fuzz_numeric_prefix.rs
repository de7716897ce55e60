#![no_main]

use libfuzzer_sys::fuzz_target;
use weld_feature_editor::core::parse_float_prefix;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let value = parse_float_prefix(text);
        // Ohne Ziffer im Präfix darf nie eine Zahl entstehen
        if !text.trim_start().starts_with(|c: char| c.is_ascii_digit() || "+-.I".contains(c)) {
            assert!(value.is_nan());
        }
    }
});
