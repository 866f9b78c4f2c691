#![no_main]

use libfuzzer_sys::fuzz_target;
use rangepack::{Encoder, Strategy};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut enc = Encoder::<i8>::new(-64, 63, Strategy::Saturate).unwrap();
    for &b in data {
        enc.encode_next(b as i8).unwrap();
    }

    // Property: finalize without reinit returns identical results
    let content1 = enc.finalize(false);
    let content2 = enc.finalize(false);
    assert_eq!(content1, content2, "finalize(false) not idempotent (1st vs 2nd call)");

    // Property: finalize with reinit returns the same content, then empties
    let content3 = enc.finalize(true);
    assert_eq!(content2, content3, "finalize(true) differs from finalize(false)");
    assert_eq!(enc.count(), 0, "encoder not reset");
    assert!(enc.finalize(true).encoded.is_empty(), "buffer not cleared");
});
