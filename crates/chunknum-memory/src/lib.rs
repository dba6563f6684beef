//! # chunknum-memory
//!
//! Storage primitives for the `ChunkNum` workspace.
//!
//! Provides the fixed-capacity word [`Chunk`], the ordered [`ChunkChain`]
//! that strings chunks together, and the [`ChunkAllocator`] seam through
//! which containers obtain and release chunks: a plain heap allocator and a
//! recycling [`ChunkPool`] with usage statistics and an optional budget.
#![warn(missing_docs)]

pub mod alloc;
pub mod chain;
pub mod chunk;
pub mod pool;
pub mod stats;

pub use alloc::{AllocError, ChunkAllocator, HeapChunks};
pub use chain::ChunkChain;
pub use chunk::{Chunk, Word, CHUNK_CAPACITY, WORD_BITS};
pub use pool::ChunkPool;
pub use stats::PoolStats;
