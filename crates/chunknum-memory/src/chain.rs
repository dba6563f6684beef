//! Ordered chain of chunks.
//!
//! Chain order stands in for the prev/next links of a node list: index 0 is
//! the head, the last element is the tail, and the chunk count is the
//! length of the chain. None of these can drift apart.

use crate::alloc::{AllocError, ChunkAllocator};
use crate::chunk::Chunk;

/// A sequence of chunks, head first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkChain {
    chunks: Vec<Chunk>,
}

impl ChunkChain {
    /// Create an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the chain holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The head chunk.
    #[must_use]
    pub fn first(&self) -> Option<&Chunk> {
        self.chunks.first()
    }

    /// The tail chunk.
    #[must_use]
    pub fn last(&self) -> Option<&Chunk> {
        self.chunks.last()
    }

    /// The tail chunk, mutably.
    pub fn last_mut(&mut self) -> Option<&mut Chunk> {
        self.chunks.last_mut()
    }

    /// Chunk at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Chunk at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Chunk> {
        self.chunks.get_mut(index)
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Iterate head to tail, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Chunk> {
        self.chunks.iter_mut()
    }

    /// Total number of valid words across all chunks.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// Make room for `additional` more chunks without linking any.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.chunks.try_reserve(additional)?;
        Ok(())
    }

    /// Attach `chunk` as the new tail.
    ///
    /// On failure the chunk is handed back untouched and the chain is
    /// unchanged.
    pub fn push(&mut self, chunk: Chunk) -> Result<(), (Chunk, AllocError)> {
        if let Err(err) = self.chunks.try_reserve(1) {
            return Err((chunk, err.into()));
        }
        self.chunks.push(chunk);
        Ok(())
    }

    /// Attach every chunk of `fresh` at the tail, in order.
    ///
    /// Either all are linked or none are; on failure they are handed back.
    pub fn try_extend(&mut self, fresh: Vec<Chunk>) -> Result<(), (Vec<Chunk>, AllocError)> {
        if let Err(err) = self.chunks.try_reserve(fresh.len()) {
            return Err((fresh, err.into()));
        }
        self.chunks.extend(fresh);
        Ok(())
    }

    /// Cut the chain after `index`, leaving that chunk as the tail.
    ///
    /// Returns the detached suffix; releasing it is the caller's job. An
    /// `index` past the tail detaches nothing.
    #[must_use = "detached chunks must be released"]
    pub fn trim_at(&mut self, index: usize) -> ChunkChain {
        let cut = (index + 1).min(self.chunks.len());
        Self {
            chunks: self.chunks.split_off(cut),
        }
    }

    /// Hand every chunk back to `alloc`, leaving the chain empty.
    pub fn release_into(&mut self, alloc: &dyn ChunkAllocator) {
        for chunk in self.chunks.drain(..) {
            alloc.release(chunk);
        }
    }
}

impl<'a> IntoIterator for &'a ChunkChain {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ChunkChain {
    type Item = &'a mut Chunk;
    type IntoIter = std::slice::IterMut<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl FromIterator<Chunk> for ChunkChain {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}
