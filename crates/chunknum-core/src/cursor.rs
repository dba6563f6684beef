//! Word cursors over a [`Number`].
//!
//! A cursor sits on one valid word (chunk index plus in-chunk offset) or is
//! exhausted. Chunks with no valid words are skipped.
//!
//! [`Cursor`] borrows its number immutably, so any number of them may
//! traverse the same value. [`CursorMut`] borrows it mutably: while one is
//! live, the only structural change the number can see is the cursor's own
//! growth.

use chunknum_memory::{Chunk, ChunkChain, Word};
use tracing::{debug, trace};

use crate::error::NumError;
use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    chunk: usize,
    offset: usize,
}

fn first_from(chain: &ChunkChain, start: usize) -> Option<Position> {
    chain
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, c)| !c.is_empty())
        .map(|(chunk, _)| Position { chunk, offset: 0 })
}

fn step(chain: &ChunkChain, pos: Position) -> Option<Position> {
    let offset = pos.offset + 1;
    match chain.get(pos.chunk) {
        Some(c) if offset < c.len() => Some(Position {
            chunk: pos.chunk,
            offset,
        }),
        _ => first_from(chain, pos.chunk + 1),
    }
}

fn word_at(chain: &ChunkChain, pos: Option<Position>) -> Word {
    pos.and_then(|p| chain.get(p.chunk).and_then(|c| c.words().get(p.offset)))
        .copied()
        .unwrap_or(0)
}

/// Read-only cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    number: &'a Number,
    pos: Option<Position>,
}

impl<'a> Cursor<'a> {
    /// Position a cursor on the first valid word of `number`.
    #[must_use]
    pub fn open(number: &'a Number) -> Self {
        Self {
            number,
            pos: first_from(&number.chain, 0),
        }
    }

    /// Whether the cursor has run past the last valid word.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos.is_none()
    }

    /// Current `(chunk, offset)`, or `None` when exhausted.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.pos.map(|p| (p.chunk, p.offset))
    }

    /// The current word; 0 once exhausted.
    #[must_use]
    pub fn read(&self) -> Word {
        word_at(&self.number.chain, self.pos)
    }

    /// Move to the next valid word. Returns `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        self.pos = self.pos.and_then(|p| step(&self.number.chain, p));
        self.pos.is_some()
    }
}

impl Iterator for Cursor<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        if self.is_exhausted() {
            return None;
        }
        let word = self.read();
        self.advance();
        Some(word)
    }
}

/// Cursor that can overwrite words and grow its number.
///
/// Growth draws first from chunks set aside by [`CursorMut::with_reserve`];
/// whatever is left of the reserve goes back to the number's allocator when
/// the cursor is dropped.
#[derive(Debug)]
pub struct CursorMut<'a> {
    number: &'a mut Number,
    pos: Option<Position>,
    reserve: Vec<Chunk>,
}

impl<'a> CursorMut<'a> {
    /// Position a cursor on the first valid word of `number`.
    pub fn open(number: &'a mut Number) -> Self {
        Self::positioned(number, Vec::new())
    }

    /// Like [`CursorMut::open`], first taking `chunks` spare chunks from
    /// the number's allocator for later growth.
    ///
    /// Fails without touching the number if the allocator cannot supply
    /// all of them.
    pub fn with_reserve(number: &'a mut Number, chunks: usize) -> Result<Self, NumError> {
        let reserve = if chunks == 0 {
            Vec::new()
        } else {
            number.alloc.make_chunks(chunks)?
        };
        trace!(chunks, "reserved growth chunks");
        Ok(Self::positioned(number, reserve))
    }

    fn positioned(number: &'a mut Number, reserve: Vec<Chunk>) -> Self {
        let pos = first_from(&number.chain, 0);
        Self {
            number,
            pos,
            reserve,
        }
    }

    /// Whether the cursor has run past the last valid word.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos.is_none()
    }

    /// Current `(chunk, offset)`, or `None` when exhausted.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.pos.map(|p| (p.chunk, p.offset))
    }

    /// The current word; 0 once exhausted.
    #[must_use]
    pub fn read(&self) -> Word {
        word_at(&self.number.chain, self.pos)
    }

    /// Overwrite the current word. Returns `false` (writing nothing) when
    /// exhausted; grow first to write past the end.
    pub fn write(&mut self, value: Word) -> bool {
        let Some(p) = self.pos else {
            return false;
        };
        match self
            .number
            .chain
            .get_mut(p.chunk)
            .and_then(|c| c.words_mut().get_mut(p.offset))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Move to the next valid word. Returns `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        self.pos = self.pos.and_then(|p| step(&self.number.chain, p));
        self.pos.is_some()
    }

    /// Move to the next valid word, growing the number by one zero word
    /// when there is none.
    pub fn advance_with_growth(&mut self) -> Result<(), NumError> {
        if self.advance() {
            Ok(())
        } else {
            self.grow()
        }
    }

    /// Add one zero word at the end of the number and move onto it.
    ///
    /// The tail chunk is extended when it has room; otherwise a new
    /// single-word chunk is linked after it. On failure the number is
    /// unchanged.
    pub fn grow(&mut self) -> Result<(), NumError> {
        let tail = self.number.chain.len().saturating_sub(1);
        if let Some(last) = self.number.chain.last_mut() {
            if last.push(0) {
                self.pos = Some(Position {
                    chunk: tail,
                    offset: last.len() - 1,
                });
                return Ok(());
            }
        }

        let mut chunk = match self.reserve.pop() {
            Some(chunk) => chunk,
            None => self.number.alloc.make_chunk()?,
        };
        chunk.fill_from(&[0]);
        self.number.append_chunk(chunk)?;
        let chunk = self.number.chain.len() - 1;
        debug!(chunks = chunk + 1, "grew number by one chunk");
        self.pos = Some(Position { chunk, offset: 0 });
        Ok(())
    }
}

impl Drop for CursorMut<'_> {
    fn drop(&mut self) {
        for chunk in self.reserve.drain(..) {
            self.number.alloc.release(chunk);
        }
    }
}
