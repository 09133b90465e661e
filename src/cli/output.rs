//! Output formatting for CLI commands.

use std::io;

use crate::cli::args::{OutputFormat, WordFreqArgs};
use crate::error::Result;
use crate::report::FrequencyReport;

/// Write a report to stdout in the requested format.
pub fn print_report(report: &FrequencyReport, args: &WordFreqArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.output_format {
        OutputFormat::Human => report.write_human(&mut out),
        OutputFormat::Json => report.write_json(&mut out, args.pretty),
    }
}
