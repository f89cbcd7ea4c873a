#![no_main]

use libfuzzer_sys::fuzz_target;
use phrase_index::{IndexType, Normalizer};

fuzz_target!(|data: &[u8]| {
    let Ok(phrase) = std::str::from_utf8(data) else {
        return;
    };
    let normalizer = Normalizer::default();

    if let Some(key) = normalizer.normalize(phrase, None) {
        assert!(key.chars().count() <= 125);
    }
    for index in IndexType::ALL {
        if let Some(key) = normalizer.normalize(phrase, Some(index)) {
            assert!(!key.is_empty());
        }
    }
});
