//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use chunknum_core::hex::parse_word_list;
use chunknum_core::{ChunkPool, NumError, Number};
use tracing::info;

use crate::config::AppConfig;
use crate::output::{format_report, format_summary, write_to_file, AddReport};

const MAX_POOLED: usize = 1024;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        crate::completion::write_completion(shell, &mut std::io::stdout());
        return Ok(());
    }

    let report = run_add(config)?;
    let text = format_report(&report, config.format)?;

    if let Some(ref path) = config.output {
        write_to_file(path, &text).with_context(|| format!("writing {path}"))?;
        if !config.quiet {
            println!("{}", format_summary(&report));
        }
        return Ok(());
    }

    if !config.quiet {
        println!("{}", format_summary(&report));
    }
    println!("{text}");
    Ok(())
}

/// Load both operands, add them, and describe the result.
pub fn run_add(config: &AppConfig) -> Result<AddReport> {
    let lhs = read_words(config.lhs.as_deref(), "lhs")?;
    let rhs = read_words(config.rhs.as_deref(), "rhs")?;

    let pool = Arc::new(match config.chunk_budget() {
        Some(limit) => ChunkPool::with_budget(MAX_POOLED, limit),
        None => ChunkPool::new(MAX_POOLED),
    });

    let mut acc = Number::from_words_in(pool.clone(), &lhs).context("loading lhs")?;
    let addend = Number::from_words_in(pool.clone(), &rhs).context("loading rhs")?;
    acc.add(&addend).context("adding")?;
    info!(words = acc.word_len(), chunks = acc.len(), "sum computed");

    Ok(AddReport::new(lhs, rhs, &acc, pool.stats()))
}

fn read_words(text: Option<&str>, name: &'static str) -> Result<Vec<chunknum_core::Word>> {
    let text = text.ok_or(NumError::NullArgument(name))?;
    parse_word_list(text).with_context(|| format!("parsing --{name}"))
}
