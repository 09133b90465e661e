//! Ranked frequency reports.
//!
//! The report is the output collaborator of the counting core: it takes a
//! final, immutable [`FrequencyMap`] and produces a listing ranked by
//! descending count, with ties broken by ascending word, plus totals.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::frequency::FrequencyMap;

/// One ranked entry of a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The word.
    pub word: String,
    /// How many times it occurred.
    pub count: u64,
}

/// A ranked word-frequency listing with summary totals.
///
/// `total_words` and `distinct_words` always cover the whole frequency map,
/// even when the listing itself is truncated by a limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    /// Entries in rank order: descending count, then ascending word.
    pub entries: Vec<ReportEntry>,
    /// Number of distinct words counted.
    pub distinct_words: usize,
    /// Total number of word occurrences.
    pub total_words: u64,
}

impl FrequencyReport {
    /// Build a ranked report from a frequency map.
    ///
    /// `limit` truncates the listing to the top N entries; totals are
    /// unaffected.
    pub fn from_frequencies(frequencies: &FrequencyMap, limit: Option<usize>) -> Self {
        let mut entries: Vec<ReportEntry> = frequencies
            .iter()
            .map(|(token, count)| ReportEntry {
                word: token.as_str().to_owned(),
                count,
            })
            .collect();

        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        FrequencyReport {
            entries,
            distinct_words: frequencies.len(),
            total_words: frequencies.total_words(),
        }
    }

    /// Write the report as human-readable `word: count` lines with a totals
    /// trailer.
    pub fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}: {}", entry.word, entry.count)?;
        }
        writeln!(out, "Total words: {}", self.total_words)?;
        Ok(())
    }

    /// Write the report as JSON.
    pub fn write_json<W: Write>(&self, out: &mut W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, self)?;
        } else {
            serde_json::to_writer(&mut *out, self)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn sample_frequencies() -> FrequencyMap {
        FrequencyMap::from_tokens(
            ["the", "the", "the", "fox", "fox", "dog", "ant"]
                .iter()
                .map(Token::new),
        )
    }

    #[test]
    fn test_rank_order_and_tie_break() {
        let report = FrequencyReport::from_frequencies(&sample_frequencies(), None);

        let ranked: Vec<(&str, u64)> = report
            .entries
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect();
        // Ties (dog/ant at 1) break by ascending word.
        assert_eq!(ranked, [("the", 3), ("fox", 2), ("ant", 1), ("dog", 1)]);
    }

    #[test]
    fn test_limit_does_not_affect_totals() {
        let report = FrequencyReport::from_frequencies(&sample_frequencies(), Some(2));

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.distinct_words, 4);
        assert_eq!(report.total_words, 7);
    }

    #[test]
    fn test_write_human() {
        let report = FrequencyReport::from_frequencies(&sample_frequencies(), None);

        let mut out = Vec::new();
        report.write_human(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "the: 3\nfox: 2\nant: 1\ndog: 1\nTotal words: 7\n");
    }

    #[test]
    fn test_write_json() {
        let report = FrequencyReport::from_frequencies(&sample_frequencies(), Some(1));

        let mut out = Vec::new();
        report.write_json(&mut out, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["entries"][0]["word"], "the");
        assert_eq!(value["entries"][0]["count"], 3);
        assert_eq!(value["distinct_words"], 4);
        assert_eq!(value["total_words"], 7);
    }

    #[test]
    fn test_empty_report() {
        let report = FrequencyReport::from_frequencies(&FrequencyMap::new(), None);

        assert!(report.entries.is_empty());
        assert_eq!(report.total_words, 0);

        let mut out = Vec::new();
        report.write_human(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total words: 0\n");
    }
}
