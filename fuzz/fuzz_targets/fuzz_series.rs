#![no_main]

use libfuzzer_sys::fuzz_target;
use flowlog::{decode_series, CodeKind};

fuzz_target!(|data: &[u8]| {
    // First 4 bytes pick the start timestamp, the rest is the code stream
    if data.len() < 4 {
        return;
    }
    let start = i64::from(i32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let readings = decode_series(&data[4..], start);

    // Property: consecutive timestamps from the start, no marker readings
    for (i, r) in readings.iter().enumerate() {
        assert_eq!(r.ts, start + i as i64, "timestamp gap at reading {i}");
        assert_ne!(r.kind, CodeKind::TemperatureGroup);
    }
});
