//! # chunknum-core
//!
//! Arbitrary-precision unsigned integers stored as a chain of fixed-capacity
//! word chunks. Provides the [`Number`] container, the [`Cursor`] and
//! [`CursorMut`] traversal handles, in-place addition, and fixed-width hex
//! rendering.
//!
//! Words are stored least-significant first.
//!
//! # Example
//! ```
//! use chunknum_core::{hex, Number};
//!
//! let mut acc = Number::from_words(&[0xffff_ffff]).unwrap();
//! let one = Number::from_words(&[1]).unwrap();
//! acc.add(&one).unwrap();
//! assert_eq!(hex::render(&acc), "0000000000000001");
//! ```

pub mod arith;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod handle;
pub mod hex;
pub mod number;

// Re-exports
pub use chunknum_memory::{
    AllocError, Chunk, ChunkAllocator, ChunkChain, ChunkPool, HeapChunks, PoolStats, Word,
    CHUNK_CAPACITY,
};
pub use constants::{exit_codes, HEX_CHARS_PER_WORD};
pub use cursor::{Cursor, CursorMut};
pub use error::NumError;
pub use number::Number;
