//! Fixed-capacity word block.

/// A single base-2^32 digit.
pub type Word = u32;

/// Bit width of a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Number of words a [`Chunk`] can hold.
pub const CHUNK_CAPACITY: usize = 4;

/// A block of up to [`CHUNK_CAPACITY`] words.
///
/// Only the first `len()` slots are meaningful; the rest are kept zeroed so
/// a slot exposed by [`Chunk::push`] never carries stale data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    words: [Word; CHUNK_CAPACITY],
    len: usize,
}

impl Chunk {
    /// Create an empty chunk (valid length 0).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: [0; CHUNK_CAPACITY],
            len: 0,
        }
    }

    /// Create a chunk holding a single word.
    #[must_use]
    pub const fn single(word: Word) -> Self {
        let mut chunk = Self::new();
        chunk.words[0] = word;
        chunk.len = 1;
        chunk
    }

    /// Number of valid words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the chunk holds no valid words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is valid.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == CHUNK_CAPACITY
    }

    /// Number of unused slots.
    #[must_use]
    pub const fn spare(&self) -> usize {
        CHUNK_CAPACITY - self.len
    }

    /// The valid words, in stored order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words[..self.len]
    }

    /// The valid words, mutably.
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words[..self.len]
    }

    /// Append one word. Returns `false` (and changes nothing) when full.
    pub fn push(&mut self, word: Word) -> bool {
        if self.is_full() {
            return false;
        }
        self.words[self.len] = word;
        self.len += 1;
        true
    }

    /// Replace the contents with the leading `min(CHUNK_CAPACITY, src.len())`
    /// words of `src`, returning how many were taken.
    pub fn fill_from(&mut self, src: &[Word]) -> usize {
        let take = src.len().min(CHUNK_CAPACITY);
        self.words[..take].copy_from_slice(&src[..take]);
        self.words[take..].fill(0);
        self.len = take;
        take
    }

    /// Reset to an empty, zeroed chunk.
    pub fn clear(&mut self) {
        self.words = [0; CHUNK_CAPACITY];
        self.len = 0;
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
