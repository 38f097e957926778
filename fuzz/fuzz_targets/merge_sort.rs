#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Trailing bytes that don't fill a whole i32 are ignored.
    let v: Vec<i32> = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let original = v.clone();

    let sorted = merge_sort::merge_sort(&v);

    let mut expected = v.clone();
    expected.sort();

    assert_eq!(v, original);
    assert_eq!(sorted, expected);
});
