#![no_main]

use libfuzzer_sys::fuzz_target;

use chunknum_core::hex::{parse_words, render};
use chunknum_core::{Number, Word};

fuzz_target!(|data: &[u8]| {
    let words: Vec<Word> = data
        .chunks_exact(4)
        .map(|c| Word::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let n = Number::from_words(&words).unwrap();
    let text = render(&n);
    assert_eq!(parse_words(&text).unwrap(), words);

    // Arbitrary text must never panic the parser.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_words(s);
    }
});
