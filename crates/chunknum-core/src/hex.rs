//! Fixed-width hex rendering.
//!
//! Each stored word becomes exactly [`HEX_CHARS_PER_WORD`] lowercase hex
//! characters, most-significant nibble first, zero-padded. Words appear in
//! stored order (least-significant word first) with no separators.

use chunknum_memory::{Word, WORD_BITS};

use crate::constants::{HEX_CHARS_PER_WORD, HEX_DIGITS};
use crate::error::NumError;
use crate::number::Number;

/// Exact length of [`render`]'s output for `number`.
#[must_use]
pub fn rendered_len(number: &Number) -> usize {
    number.word_len() * HEX_CHARS_PER_WORD
}

fn push_word(out: &mut String, word: Word) {
    for shift in (0..WORD_BITS).step_by(4).rev() {
        let nibble = (word >> shift) & 0xf;
        out.push(char::from(HEX_DIGITS[nibble as usize]));
    }
}

/// Render every stored word as fixed-width hex.
#[must_use]
pub fn render(number: &Number) -> String {
    let mut out = String::with_capacity(rendered_len(number));
    for word in number.words() {
        push_word(&mut out, word);
    }
    out
}

/// Read text produced by [`render`] back into words.
pub fn parse_words(text: &str) -> Result<Vec<Word>, NumError> {
    let bytes = text.as_bytes();
    if bytes.len() % HEX_CHARS_PER_WORD != 0 {
        return Err(NumError::Parse(format!(
            "length {} is not a multiple of {HEX_CHARS_PER_WORD}",
            bytes.len()
        )));
    }
    bytes.chunks(HEX_CHARS_PER_WORD).map(parse_group).collect()
}

/// Read comma-separated hex words (1 to 8 digits each, optional `0x`).
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, NumError> {
    text.split(',')
        .map(|item| {
            let item = item.trim();
            let digits = item
                .strip_prefix("0x")
                .or_else(|| item.strip_prefix("0X"))
                .unwrap_or(item);
            if digits.is_empty() || digits.len() > HEX_CHARS_PER_WORD {
                return Err(NumError::Parse(format!("`{item}` is not a hex word")));
            }
            parse_group(digits.as_bytes())
        })
        .collect()
}

fn parse_group(group: &[u8]) -> Result<Word, NumError> {
    group.iter().try_fold(0, |acc: Word, &b| {
        let nibble = char::from(b)
            .to_digit(16)
            .ok_or_else(|| NumError::Parse(format!("`{}` is not a hex digit", b.escape_ascii())))?;
        Ok((acc << 4) | nibble)
    })
}
