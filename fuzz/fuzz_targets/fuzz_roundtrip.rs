#![no_main]

use libfuzzer_sys::fuzz_target;
use rangepack::{decode_all, EncodedContent, Encoder, Strategy};

fuzz_target!(|data: &[u8]| {
    // Need 4 bytes for the range + some values
    if data.len() < 5 {
        return;
    }

    // First 4 bytes determine the range: min (i16) and span (u16, at least 1)
    let min = i32::from(i16::from_le_bytes([data[0], data[1]]));
    let span = i32::from(u16::from_le_bytes([data[2], data[3]]).max(1));
    let max = min + span;

    // Remaining bytes are i8 offsets folded into the range
    let values: Vec<i32> = data[4..]
        .iter()
        .map(|&b| min + i32::from(b as i8).rem_euclid(span + 1))
        .collect();

    let mut enc = Encoder::new(min, max, Strategy::Error).unwrap();
    for &v in &values {
        assert!(enc.encode_next(v).unwrap(), "in-range value rejected");
    }
    assert_eq!(enc.count(), values.len(), "count mismatch");

    let content = enc.finalize(true);

    // Property 1: padding is bounded and leaves whole values
    assert!(content.n_padding_bits <= 7, "padding out of bounds");
    assert_eq!(content.value_count().unwrap(), values.len(), "value count mismatch");

    // Property 2: decode returns the input
    assert_eq!(decode_all::<i32>(&content).unwrap(), values, "roundtrip mismatch");

    // Property 3: the binary frame preserves the record
    let parsed = EncodedContent::from_bytes(&content.to_bytes()).unwrap();
    assert_eq!(parsed, content, "frame mismatch");
});
