#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut whole = linepos::PositionIndex::new();
    whole.ingest(data);

    // same content, split at a point picked by the data itself
    let mut chunked = linepos::PositionIndex::new();
    let split = match data.first() {
        Some(b) => *b as usize % (data.len() + 1),
        None => 0,
    };
    chunked.ingest(&data[..split]);
    chunked.ingest(&data[split..]);

    for offset in 0..data.len() as u64 {
        let a = whole.position(offset).expect("in-range offset must resolve");
        let b = chunked
            .position(offset)
            .expect("in-range offset must resolve");
        assert_eq!(a, b, "chunking changed the answer for offset {}", offset);
    }
    assert!(whole.position(data.len() as u64).is_err());
});
