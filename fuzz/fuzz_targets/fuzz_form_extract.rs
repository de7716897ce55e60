#![no_main]

use libfuzzer_sys::fuzz_target;
use weld_feature_editor::dialog::{FormField, FormValues};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut form = FormValues::with_defaults();
    for (field, chunk) in FormField::ALL.iter().zip(text.split('\n')) {
        form.set(*field, chunk);
    }

    match form.extract() {
        Ok(values) => assert!(values.values().iter().all(|v| !v.is_nan())),
        Err(err) => assert!(!err.field_names().is_empty()),
    }
});
