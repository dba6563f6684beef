//! Shared constants.

pub use chunknum_memory::{Word, CHUNK_CAPACITY, WORD_BITS};

/// Hex characters needed to render one word.
pub const HEX_CHARS_PER_WORD: usize = 2 * std::mem::size_of::<Word>();

/// Lowercase hexadecimal digit table.
pub static HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Process exit codes used by the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or missing input words.
    pub const ERROR_INPUT: i32 = 2;
    /// A chunk could not be allocated.
    pub const ERROR_ALLOCATION: i32 = 3;
}
