//! Shell completion for the `chunknum` command line.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::config::AppConfig;

/// Name completions are registered under.
pub const BIN_NAME: &str = "chunknum";

/// Write a completion script for `shell` covering every [`AppConfig`]
/// option, operands and output formats included.
pub fn write_completion(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = AppConfig::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
