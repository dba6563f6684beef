//! In-place addition.
//!
//! The accumulator is walked with a growing [`CursorMut`], the addend with a
//! read-only [`Cursor`]. Words are added pairwise with a one-bit carry; once
//! the addend runs out, any remaining carry ripples up through saturated
//! words, growing the accumulator when it reaches the end.
//!
//! Growth happens only when a word is about to be written, so a sum never
//! gains a trailing zero word.

use chunknum_memory::{Chunk, Word, CHUNK_CAPACITY};
use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorMut};
use crate::error::NumError;
use crate::number::Number;

/// Add two words and an incoming carry, returning the wrapped sum and the
/// outgoing carry.
#[inline]
#[must_use]
pub fn add_with_carry(lhs: Word, rhs: Word, carry: bool) -> (Word, bool) {
    let (sum, c1) = lhs.overflowing_add(rhs);
    let (sum, c2) = sum.overflowing_add(Word::from(carry));
    (sum, c1 || c2)
}

/// Chunks the accumulator may need to absorb `addend` plus a final carry.
fn growth_chunks(acc: &Number, addend: &Number) -> usize {
    let have = acc.word_len();
    let target = have.max(addend.word_len()) + 1;
    let spare = acc.chunks().last().map_or(0, Chunk::spare);
    target.saturating_sub(have + spare).div_ceil(CHUNK_CAPACITY)
}

/// `acc += addend`.
///
/// All storage the sum can need is obtained up front, so an allocation
/// failure leaves `acc` unchanged.
pub fn add_assign(acc: &mut Number, addend: &Number) -> Result<(), NumError> {
    let chunks = growth_chunks(acc, addend);
    acc.chain.try_reserve(chunks)?;
    let mut a = CursorMut::with_reserve(acc, chunks)?;
    let mut b = Cursor::open(addend);

    if a.is_exhausted() {
        a.grow()?;
    }

    let mut carry = false;
    while !b.is_exhausted() {
        let (sum, out) = add_with_carry(a.read(), b.read(), carry);
        carry = out;
        a.write(sum);
        if b.advance() {
            a.advance_with_growth()?;
        } else {
            a.advance();
        }
    }

    if carry {
        if a.is_exhausted() {
            a.grow()?;
        }
        loop {
            let sum = a.read().wrapping_add(1);
            a.write(sum);
            if sum != 0 {
                break;
            }
            trace!(position = ?a.position(), "carry rippled through saturated word");
            a.advance_with_growth()?;
        }
    }
    drop(a);

    debug!(words = acc.word_len(), chunks = acc.len(), "addition complete");
    debug_assert!(acc.check_invariants().is_ok());
    Ok(())
}

impl Number {
    /// `self += addend`, returning `self` for chaining.
    pub fn add(&mut self, addend: &Number) -> Result<&mut Self, NumError> {
        add_assign(self, addend)?;
        Ok(self)
    }
}
