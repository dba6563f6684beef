//! Error handling and exit codes.

use chunknum_core::constants::exit_codes;
use chunknum_core::NumError;

/// Process exit code for the outcome of a run.
pub fn run_exit_code(result: &anyhow::Result<()>) -> i32 {
    result.as_ref().map_or_else(exit_code, |_| exit_codes::SUCCESS)
}

/// Map a failed run onto the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<NumError>() {
        Some(NumError::Allocation(_)) => exit_codes::ERROR_ALLOCATION,
        Some(NumError::NullArgument(_) | NumError::ShortBuffer { .. } | NumError::Parse(_)) => {
            exit_codes::ERROR_INPUT
        }
        Some(NumError::Corrupted(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
