#![no_main]

use libfuzzer_sys::fuzz_target;
use rangepack::{decode_all, EncodedContent};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to the frame parser and decoder - should never panic
    // May return errors for malformed input, but should not crash
    if let Ok(content) = EncodedContent::from_bytes(data) {
        let count = content.value_count().unwrap();
        if let Ok(values) = decode_all::<i32>(&content) {
            assert_eq!(values.len(), count, "decoded length mismatch");
        }
        let _ = decode_all::<i16>(&content);
        let _ = decode_all::<i8>(&content);
    }
});
