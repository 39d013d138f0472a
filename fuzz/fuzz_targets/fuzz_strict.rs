#![no_main]

use libfuzzer_sys::fuzz_target;
use flowlog::{tokenize, tokenize_strict, DecodeError};

fuzz_target!(|data: &[u8]| {
    // Strict decoding only fails on a dangling long-code header at the end
    match tokenize_strict(data) {
        Ok(strict) => assert_eq!(strict, tokenize(data)),
        Err(DecodeError::TruncatedLongCode { offset, header }) => {
            assert!(header >= 0xE0);
            assert!(offset < data.len());
            assert_eq!(data[offset], header);
        }
    }
});
