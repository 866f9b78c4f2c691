#![no_main]

use libfuzzer_sys::fuzz_target;
use rangepack::{decode_all, encode_all, Strategy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First 2 bytes are the range bounds, in either order
    let (a, b) = (data[0] as i8, data[1] as i8);
    if a == b {
        return;
    }
    let (min, max) = (a.min(b), a.max(b));
    let values: Vec<i8> = data[2..].iter().map(|&b| b as i8).collect();
    let in_range: Vec<i8> = values.iter().copied().filter(|v| (min..=max).contains(v)).collect();

    // Property 1: Ignore keeps exactly the in-range values
    let ignored = encode_all(&values, Some(min), Some(max), Strategy::Ignore).unwrap();
    assert_eq!(decode_all::<i8>(&ignored).unwrap(), in_range, "ignore mismatch");

    // Property 2: Saturate clamps every value
    let saturated = encode_all(&values, Some(min), Some(max), Strategy::Saturate).unwrap();
    let clamped: Vec<i8> = values.iter().map(|v| (*v).clamp(min, max)).collect();
    assert_eq!(decode_all::<i8>(&saturated).unwrap(), clamped, "saturate mismatch");

    // Property 3: Error fails iff some value is out of range
    let strict = encode_all(&values, Some(min), Some(max), Strategy::Error);
    assert_eq!(strict.is_ok(), in_range.len() == values.len(), "error strategy mismatch");
});
