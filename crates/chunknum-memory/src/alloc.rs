//! Chunk allocation seam.

use std::collections::TryReserveError;

use crate::chunk::Chunk;

/// Failure to obtain storage for a chunk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The allocator's live-chunk budget is spent.
    #[error("chunk budget exhausted ({live} live, limit {limit})")]
    Exhausted {
        /// Chunks currently handed out.
        live: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// Growing a chain's backing storage failed.
    #[error("chain reservation failed: {0}")]
    Reserve(#[from] TryReserveError),
}

/// Source of fresh chunks for a container.
///
/// Every chunk obtained from [`make_chunk`](ChunkAllocator::make_chunk) is
/// handed back through [`release`](ChunkAllocator::release) when its owner
/// lets go of it.
pub trait ChunkAllocator: Send + Sync {
    /// Obtain an empty chunk (valid length 0, zeroed words).
    fn make_chunk(&self) -> Result<Chunk, AllocError>;

    /// Give a chunk back.
    fn release(&self, chunk: Chunk);

    /// Obtain `count` empty chunks, or none at all.
    ///
    /// If any request fails, the chunks already obtained are released
    /// before the error is returned.
    fn make_chunks(&self, count: usize) -> Result<Vec<Chunk>, AllocError> {
        let mut fresh = Vec::new();
        fresh.try_reserve_exact(count)?;
        for _ in 0..count {
            match self.make_chunk() {
                Ok(chunk) => fresh.push(chunk),
                Err(err) => {
                    for chunk in fresh {
                        self.release(chunk);
                    }
                    return Err(err);
                }
            }
        }
        Ok(fresh)
    }
}

/// Allocator that builds every chunk fresh and drops released ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapChunks;

impl ChunkAllocator for HeapChunks {
    fn make_chunk(&self) -> Result<Chunk, AllocError> {
        Ok(Chunk::new())
    }

    fn release(&self, _chunk: Chunk) {}
}
