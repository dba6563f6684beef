//! Result formatting and output.

use std::io::{self, Write};

use chunknum_core::hex::render;
use chunknum_core::{Number, PoolStats, Word};
use serde::Serialize;

use crate::config::OutputFormat;

/// Pool counters as reported in JSON.
#[derive(Debug, Clone, Serialize)]
pub struct PoolReport {
    /// Chunks served from the pool.
    pub hits: u64,
    /// Chunks built fresh.
    pub misses: u64,
    /// Requests refused by the budget.
    pub failures: u64,
}

impl From<PoolStats> for PoolReport {
    fn from(stats: PoolStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            failures: stats.failures,
        }
    }
}

/// Everything known about one addition.
#[derive(Debug, Clone, Serialize)]
pub struct AddReport {
    /// Accumulator words before the addition.
    pub lhs: Vec<Word>,
    /// Addend words.
    pub rhs: Vec<Word>,
    /// Fixed-width stored-order rendering of the sum.
    pub sum_raw: String,
    /// Conventional hex rendering of the sum.
    pub sum_hex: String,
    /// Decimal rendering of the sum.
    pub sum_decimal: String,
    /// Chunks in the sum.
    pub chunks: usize,
    /// Valid words in the sum.
    pub words: usize,
    /// Pool activity during the run.
    pub pool: PoolReport,
}

impl AddReport {
    /// Build a report for `sum`.
    #[must_use]
    pub fn new(lhs: Vec<Word>, rhs: Vec<Word>, sum: &Number, stats: PoolStats) -> Self {
        Self {
            lhs,
            rhs,
            sum_raw: render(sum),
            sum_hex: format!("{sum:x}"),
            sum_decimal: sum.to_string(),
            chunks: sum.len(),
            words: sum.word_len(),
            pool: stats.into(),
        }
    }
}

/// Render `report` in the requested format.
pub fn format_report(report: &AddReport, format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Raw => report.sum_raw.clone(),
        OutputFormat::Hex => report.sum_hex.clone(),
        OutputFormat::Decimal => report.sum_decimal.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

/// One-line summary printed before the value unless quiet.
#[must_use]
pub fn format_summary(report: &AddReport) -> String {
    format!(
        "sum: {} word{} in {} chunk{}",
        report.words,
        if report.words == 1 { "" } else { "s" },
        report.chunks,
        if report.chunks == 1 { "" } else { "s" },
    )
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AddReport {
        let sum = Number::from_words(&[0, 1]).unwrap();
        AddReport::new(vec![Word::MAX], vec![1], &sum, PoolStats::default())
    }

    #[test]
    fn report_renderings() {
        let r = report();
        assert_eq!(r.sum_raw, "0000000000000001");
        assert_eq!(r.sum_hex, "100000000");
        assert_eq!(r.sum_decimal, "4294967296");
        assert_eq!((r.chunks, r.words), (1, 2));
    }

    #[test]
    fn format_by_kind() {
        let r = report();
        assert_eq!(format_report(&r, OutputFormat::Raw).unwrap(), r.sum_raw);
        assert_eq!(format_report(&r, OutputFormat::Hex).unwrap(), r.sum_hex);
        assert_eq!(
            format_report(&r, OutputFormat::Decimal).unwrap(),
            r.sum_decimal
        );
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&r, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["words"], 2);
        assert_eq!(json["lhs"][0], u64::from(Word::MAX));
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(format_summary(&report()), "sum: 2 words in 1 chunk");
    }
}
