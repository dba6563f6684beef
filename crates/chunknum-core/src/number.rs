//! The chunked number container.

use std::fmt;
use std::sync::Arc;

use chunknum_memory::{Chunk, ChunkAllocator, ChunkChain, HeapChunks, Word, CHUNK_CAPACITY};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::error::NumError;

/// An unsigned integer stored as a chain of word chunks, least-significant
/// word first.
///
/// The chain always holds at least one chunk, and every chunk except the
/// tail is full. Dropping a `Number` hands every chunk back to its
/// allocator.
pub struct Number {
    pub(crate) chain: ChunkChain,
    pub(crate) alloc: Arc<dyn ChunkAllocator>,
}

impl Number {
    /// Create a number holding a single zero word, using the heap allocator.
    pub fn new() -> Result<Self, NumError> {
        Self::with_allocator(Arc::new(HeapChunks))
    }

    /// Create a number holding a single zero word, drawing chunks from
    /// `alloc`.
    pub fn with_allocator(alloc: Arc<dyn ChunkAllocator>) -> Result<Self, NumError> {
        let mut chunk = alloc.make_chunk()?;
        chunk.fill_from(&[0]);
        let mut chain = ChunkChain::new();
        if let Err((chunk, err)) = chain.push(chunk) {
            alloc.release(chunk);
            return Err(err.into());
        }
        Ok(Self { chain, alloc })
    }

    /// Create a number from words, least-significant first.
    pub fn from_words(words: &[Word]) -> Result<Self, NumError> {
        let mut number = Self::new()?;
        number.bulk_load(words)?;
        Ok(number)
    }

    /// Like [`Number::from_words`], drawing chunks from `alloc`.
    pub fn from_words_in(
        alloc: Arc<dyn ChunkAllocator>,
        words: &[Word],
    ) -> Result<Self, NumError> {
        let mut number = Self::with_allocator(alloc)?;
        number.bulk_load(words)?;
        Ok(number)
    }

    /// Convert from a `BigUint`. Zero becomes a single zero word.
    pub fn from_biguint(value: &BigUint) -> Result<Self, NumError> {
        if value.is_zero() {
            Self::new()
        } else {
            Self::from_words(&value.to_u32_digits())
        }
    }

    /// Copy into a new number sharing this one's allocator.
    pub fn try_clone(&self) -> Result<Self, NumError> {
        let words: Vec<Word> = self.words().collect();
        Self::from_words_in(Arc::clone(&self.alloc), &words)
    }

    /// Number of chunks in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always `false`: a number holds at least one chunk.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of valid words across all chunks.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.chain.word_len()
    }

    /// Whether every stored word is zero (or no word is stored).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words().all(|w| w == 0)
    }

    /// The chunk chain, head first.
    #[must_use]
    pub fn chunks(&self) -> &ChunkChain {
        &self.chain
    }

    /// The allocator chunks are drawn from.
    #[must_use]
    pub fn allocator(&self) -> &Arc<dyn ChunkAllocator> {
        &self.alloc
    }

    /// Stored words, least-significant first.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.chain.iter().flat_map(|c| c.words().iter().copied())
    }

    /// Numeric value as a `BigUint`.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        let words: Vec<Word> = self.words().collect();
        BigUint::from_slice(&words)
    }

    /// Attach `chunk` as the new tail.
    ///
    /// On failure the chunk goes back to the allocator and the chain is
    /// untouched.
    pub(crate) fn append_chunk(&mut self, chunk: Chunk) -> Result<(), NumError> {
        if let Err((chunk, err)) = self.chain.push(chunk) {
            self.alloc.release(chunk);
            warn!(%err, "could not link chunk");
            return Err(err.into());
        }
        Ok(())
    }

    /// Replace the contents with `words`, packed [`CHUNK_CAPACITY`] per
    /// chunk in the given order.
    ///
    /// Surplus chunks are released; missing ones are obtained before any
    /// word is written, so an allocation failure leaves the number as it
    /// was. An empty slice leaves a single chunk with no valid words.
    pub fn bulk_load(&mut self, words: &[Word]) -> Result<(), NumError> {
        let required = words.len().div_ceil(CHUNK_CAPACITY).max(1);
        let current = self.chain.len();

        if current > required {
            let mut detached = self.chain.trim_at(required - 1);
            debug!(released = detached.len(), kept = required, "trimmed chunk chain");
            detached.release_into(self.alloc.as_ref());
        } else if current < required {
            let fresh = self.alloc.make_chunks(required - current).map_err(|err| {
                warn!(%err, needed = required - current, "bulk load could not grow");
                err
            })?;
            if let Err((fresh, err)) = self.chain.try_extend(fresh) {
                for chunk in fresh {
                    self.alloc.release(chunk);
                }
                return Err(err.into());
            }
            debug!(added = required - current, "extended chunk chain");
        }

        let mut rest = words;
        for chunk in self.chain.iter_mut() {
            let taken = chunk.fill_from(rest);
            rest = &rest[taken..];
        }
        debug_assert!(rest.is_empty());
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Verify the chain's structural invariants.
    pub fn check_invariants(&self) -> Result<(), NumError> {
        let count = self.chain.len();
        if count == 0 {
            return Err(NumError::Corrupted("chain has no chunks".into()));
        }
        if let Some(index) = self
            .chain
            .iter()
            .take(count - 1)
            .position(|c| !c.is_full())
        {
            return Err(NumError::Corrupted(format!(
                "interior chunk {index} of {count} is not full"
            )));
        }
        Ok(())
    }
}

impl Drop for Number {
    fn drop(&mut self) {
        self.chain.release_into(self.alloc.as_ref());
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain.iter().map(Chunk::words))
            .finish()
    }
}

/// Decimal rendering.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_biguint(), f)
    }
}

/// Conventional hex: most-significant digit first, no leading zeros.
impl fmt::LowerHex for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_biguint(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunknum_memory::ChunkPool;

    fn words_of(n: &Number) -> Vec<Word> {
        n.words().collect()
    }

    #[test]
    fn new_holds_single_zero() {
        let n = Number::new().unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(n.word_len(), 1);
        assert_eq!(words_of(&n), vec![0]);
        assert!(n.is_zero());
        assert!(!n.is_empty());
        n.check_invariants().unwrap();
    }

    #[test]
    fn new_fails_when_pool_is_spent() {
        let pool = Arc::new(ChunkPool::with_budget(4, 0));
        let err = Number::with_allocator(pool.clone()).unwrap_err();
        assert!(matches!(err, NumError::Allocation(_)));
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn bulk_load_packs_chunks() {
        let words: Vec<Word> = (1..=9).collect();
        let n = Number::from_words(&words).unwrap();
        assert_eq!(n.len(), 3);
        assert_eq!(n.word_len(), 9);
        let lens: Vec<usize> = n.chunks().iter().map(Chunk::len).collect();
        assert_eq!(lens, vec![4, 4, 1]);
        assert_eq!(words_of(&n), words);
    }

    #[test]
    fn bulk_load_shrinks_and_releases_suffix() {
        let pool = Arc::new(ChunkPool::default());
        let words: Vec<Word> = (0..12).collect();
        let mut n = Number::from_words_in(pool.clone(), &words).unwrap();
        assert_eq!(n.len(), 3);
        assert_eq!(pool.live(), 3);

        n.bulk_load(&[7, 8]).unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(words_of(&n), vec![7, 8]);
        assert_eq!(pool.live(), 1);
        assert_eq!(pool.total_pooled(), 2);
    }

    #[test]
    fn bulk_load_empty_keeps_one_chunk() {
        let mut n = Number::from_words(&[1, 2, 3, 4, 5]).unwrap();
        n.bulk_load(&[]).unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(n.word_len(), 0);
        assert!(n.is_zero());
        n.check_invariants().unwrap();
    }

    #[test]
    fn bulk_load_failure_leaves_number_unchanged() {
        let pool = Arc::new(ChunkPool::with_budget(8, 2));
        let mut n = Number::from_words_in(pool.clone(), &[1, 2, 3]).unwrap();
        let words: Vec<Word> = (0..12).collect();
        let err = n.bulk_load(&words).unwrap_err();
        assert!(matches!(err, NumError::Allocation(_)));
        assert_eq!(words_of(&n), vec![1, 2, 3]);
        assert_eq!(n.len(), 1);
        assert_eq!(pool.live(), 1);
    }

    #[test]
    fn drop_returns_chunks() {
        let pool = Arc::new(ChunkPool::default());
        {
            let words: Vec<Word> = (0..10).collect();
            let _n = Number::from_words_in(pool.clone(), &words).unwrap();
            assert_eq!(pool.live(), 3);
        }
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.total_pooled(), 3);
    }

    #[test]
    fn append_chunk_links_tail() {
        let mut n = Number::from_words(&[1, 2, 3, 4]).unwrap();
        n.append_chunk(Chunk::single(5)).unwrap();
        assert_eq!(n.len(), 2);
        assert_eq!(words_of(&n), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn biguint_conversions() {
        let value = BigUint::from(u64::MAX) + 1u32;
        let n = Number::from_biguint(&value).unwrap();
        assert_eq!(words_of(&n), vec![0, 0, 1]);
        assert_eq!(n.to_biguint(), value);

        let zero = Number::from_biguint(&BigUint::from(0u32)).unwrap();
        assert_eq!(words_of(&zero), vec![0]);
    }

    #[test]
    fn display_and_hex() {
        let n = Number::from_words(&[0, 1]).unwrap();
        assert_eq!(n.to_string(), "4294967296");
        assert_eq!(format!("{n:x}"), "100000000");
        assert_eq!(format!("{n:?}"), "[[0, 1]]");
    }

    #[test]
    fn try_clone_copies_words() {
        let n = Number::from_words(&[9, 8, 7, 6, 5]).unwrap();
        let copy = n.try_clone().unwrap();
        assert_eq!(words_of(&copy), words_of(&n));
        assert_eq!(copy.len(), n.len());
    }

    #[test]
    fn check_invariants_flags_ragged_interior() {
        let mut n = Number::from_words(&[1]).unwrap();
        n.append_chunk(Chunk::single(2)).unwrap();
        assert!(matches!(n.check_invariants(), Err(NumError::Corrupted(_))));
    }
}
