//! Error type shared by every core operation.

use chunknum_memory::AllocError;

/// Errors from container, cursor, and arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    /// A required handle or buffer was absent.
    #[error("required argument `{0}` is absent")]
    NullArgument(&'static str),

    /// A chunk or chain slot could not be obtained.
    #[error("allocation failure: {0}")]
    Allocation(#[from] AllocError),

    /// The word buffer holds fewer words than requested.
    #[error("word buffer too short: need {expected} words, got {actual}")]
    ShortBuffer {
        /// Requested word count.
        expected: usize,
        /// Words actually supplied.
        actual: usize,
    },

    /// Text could not be read as hex words.
    #[error("invalid word text: {0}")]
    Parse(String),

    /// A structural invariant of the chunk chain does not hold.
    #[error("corrupted chunk chain: {0}")]
    Corrupted(String),
}
