//! Property-based tests for chunked addition and hex rendering.
//!
//! Every sum is checked against `num_bigint::BigUint` as the reference.

use num_bigint::BigUint;
use proptest::prelude::*;

use chunknum_core::hex::{parse_words, render};
use chunknum_core::{Number, Word, CHUNK_CAPACITY, HEX_CHARS_PER_WORD};

fn word_vec(max_len: usize) -> impl Strategy<Value = Vec<Word>> {
    let edge = prop_oneof![Just(0), Just(Word::MAX), Just(Word::MAX - 1), any::<Word>()];
    prop::collection::vec(edge, 1..max_len)
}

fn add_words(lhs: &[Word], rhs: &[Word]) -> Number {
    let mut a = Number::from_words(lhs).unwrap();
    let b = Number::from_words(rhs).unwrap();
    a.add(&b).unwrap();
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Chunked addition agrees with BigUint addition.
    #[test]
    fn add_matches_biguint(lhs in word_vec(20), rhs in word_vec(20)) {
        let sum = add_words(&lhs, &rhs);
        let expected = BigUint::from_slice(&lhs) + BigUint::from_slice(&rhs);
        prop_assert_eq!(sum.to_biguint(), expected);
    }

    /// The sum keeps every interior chunk full and never shrinks.
    #[test]
    fn add_preserves_invariants(lhs in word_vec(20), rhs in word_vec(20)) {
        let sum = add_words(&lhs, &rhs);
        prop_assert!(sum.check_invariants().is_ok());
        prop_assert!(sum.word_len() >= lhs.len().max(rhs.len()));
        prop_assert!(sum.word_len() <= lhs.len().max(rhs.len()) + 1);
        prop_assert_eq!(sum.len(), sum.word_len().div_ceil(CHUNK_CAPACITY));
    }

    /// Adding the single zero word changes nothing.
    #[test]
    fn zero_is_identity(words in word_vec(20)) {
        let sum = add_words(&words, &[0]);
        prop_assert_eq!(sum.words().collect::<Vec<_>>(), words);
    }

    /// Bulk load followed by render reproduces every word in order.
    #[test]
    fn render_round_trips(words in word_vec(24)) {
        let n = Number::from_words(&words).unwrap();
        let text = render(&n);
        prop_assert_eq!(text.len(), words.len() * HEX_CHARS_PER_WORD);
        let expected: String = words.iter().map(|w| format!("{w:08x}")).collect();
        prop_assert_eq!(&text, &expected);
        prop_assert_eq!(parse_words(&text).unwrap(), words);
    }

    /// Reloading a number with a different length leaves exactly the new words.
    #[test]
    fn reload_replaces_contents(first in word_vec(20), second in word_vec(20)) {
        let mut n = Number::from_words(&first).unwrap();
        n.bulk_load(&second).unwrap();
        prop_assert!(n.check_invariants().is_ok());
        prop_assert_eq!(n.words().collect::<Vec<_>>(), second);
    }
}

/// Word counts 1 through 5 with the extreme values.
#[test]
fn small_round_trips() {
    for count in 1..=5 {
        for fill in [0, Word::MAX] {
            let words = vec![fill; count];
            let n = Number::from_words(&words).unwrap();
            let expected = if fill == 0 { "00000000" } else { "ffffffff" }.repeat(count);
            assert_eq!(render(&n), expected, "count={count}");
            assert!(n.len() >= 1);
        }
    }
}

/// Repeated addition of the same value behaves like multiplication.
#[test]
fn repeated_addition() {
    let step = Number::from_words(&[Word::MAX, Word::MAX, 3]).unwrap();
    let mut acc = Number::new().unwrap();
    for _ in 0..100 {
        acc.add(&step).unwrap();
    }
    assert_eq!(acc.to_biguint(), step.to_biguint() * 100u32);
}
