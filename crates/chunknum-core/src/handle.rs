//! Handle-level entry points.
//!
//! Mirrors the container API for callers that hold possibly-absent handles:
//! each function checks its arguments on entry and reports an absent one as
//! [`NumError::NullArgument`] (or the documented sentinel) before touching
//! anything.

use chunknum_memory::Word;

use crate::error::NumError;
use crate::hex;
use crate::number::Number;

/// Create a number holding a single zero word.
pub fn construct() -> Result<Number, NumError> {
    Number::new()
}

/// Release a number and all of its chunks. `None` is a no-op.
pub fn destroy(handle: Option<Number>) {
    drop(handle);
}

/// Chunk count, or 0 for an absent handle.
#[must_use]
pub fn length(handle: Option<&Number>) -> usize {
    handle.map_or(0, Number::len)
}

/// Replace the contents of `handle` with the first `word_count` entries of
/// `words`.
pub fn bulk_load(
    handle: Option<&mut Number>,
    word_count: usize,
    words: Option<&[Word]>,
) -> Result<(), NumError> {
    let number = handle.ok_or(NumError::NullArgument("handle"))?;
    let words = words.ok_or(NumError::NullArgument("words"))?;
    let words = words.get(..word_count).ok_or(NumError::ShortBuffer {
        expected: word_count,
        actual: words.len(),
    })?;
    number.bulk_load(words)
}

/// Fixed-width hex rendering, or `None` for an absent handle.
#[must_use]
pub fn render(handle: Option<&Number>) -> Option<String> {
    handle.map(hex::render)
}

/// `a += b`, returning the mutated `a`.
pub fn add<'a>(
    a: Option<&'a mut Number>,
    b: Option<&Number>,
) -> Result<&'a mut Number, NumError> {
    let a = a.ok_or(NumError::NullArgument("a"))?;
    let b = b.ok_or(NumError::NullArgument("b"))?;
    a.add(b)
}
