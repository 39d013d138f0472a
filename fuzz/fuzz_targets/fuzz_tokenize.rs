#![no_main]

use libfuzzer_sys::fuzz_target;
use flowlog::{codes, tokenize};

fuzz_target!(|data: &[u8]| {
    // Any byte sequence tokenizes without panicking, at most one code per byte
    let tokens = tokenize(data);
    assert!(tokens.len() <= data.len(), "more codes than bytes");

    let lazy: Vec<_> = codes(data).collect();
    assert_eq!(lazy, tokens, "lazy iterator disagrees with tokenize()");
});
