#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use chunknum_core::{Number, Word};

fn words(bytes: &[u8]) -> Vec<Word> {
    bytes
        .chunks(4)
        .map(|c| {
            let mut buf = [0u8; 4];
            buf[..c.len()].copy_from_slice(c);
            Word::from_le_bytes(buf)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the split between the two operands.
    let split = 1 + usize::from(data[0]) % data.len();
    let lhs = words(&data[1..split]);
    let rhs = words(&data[split..]);

    let mut acc = Number::from_words(&lhs).unwrap();
    let addend = Number::from_words(&rhs).unwrap();
    acc.add(&addend).unwrap();

    assert!(acc.check_invariants().is_ok());
    assert_eq!(
        acc.to_biguint(),
        BigUint::from_slice(&lhs) + BigUint::from_slice(&rhs)
    );
});
