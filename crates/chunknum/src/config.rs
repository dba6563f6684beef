//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

/// How the sum is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width hex words in stored order (least-significant first).
    #[default]
    Raw,
    /// Conventional hex, most-significant digit first.
    Hex,
    /// Decimal.
    Decimal,
    /// JSON report with all renderings and chunk statistics.
    Json,
}

/// ChunkNum-rs — add arbitrary-precision unsigned integers stored as word chunks.
#[derive(Parser, Debug)]
#[command(name = "chunknum", version, about)]
pub struct AppConfig {
    /// Accumulator words: comma-separated hex, least-significant first.
    #[arg(long, env = "CHUNKNUM_LHS")]
    pub lhs: Option<String>,

    /// Addend words: comma-separated hex, least-significant first.
    #[arg(long, env = "CHUNKNUM_RHS")]
    pub rhs: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,

    /// Maximum number of live chunks (0 = unlimited).
    #[arg(long, default_value = "0", env = "CHUNKNUM_POOL_LIMIT")]
    pub pool_limit: usize,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Live chunk budget, if one was requested.
    #[must_use]
    pub fn chunk_budget(&self) -> Option<usize> {
        (self.pool_limit > 0).then_some(self.pool_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["chunknum", "--lhs", "1", "--rhs", "2"]).unwrap();
        assert_eq!(config.lhs.as_deref(), Some("1"));
        assert_eq!(config.format, OutputFormat::Raw);
        assert_eq!(config.chunk_budget(), None);
    }

    #[test]
    fn format_and_budget() {
        let config = AppConfig::try_parse_from([
            "chunknum",
            "--lhs",
            "1",
            "--rhs",
            "2",
            "--format",
            "json",
            "--pool-limit",
            "3",
        ])
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.chunk_budget(), Some(3));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(AppConfig::try_parse_from(["chunknum", "--format", "octal"]).is_err());
    }
}
