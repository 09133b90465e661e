//! Command implementation for the wordfreq CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::WordFreqArgs;
use crate::cli::output::print_report;
use crate::error::Result;
use crate::loader::{DocumentLoader, TextDirectoryLoader};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::report::FrequencyReport;

/// Execute the count: load, aggregate, report.
pub fn execute_command(args: WordFreqArgs) -> Result<()> {
    let start = Instant::now();

    let loader = TextDirectoryLoader::with_extension(&args.extension);
    let documents = loader.load(&args.directory)?;

    let pipeline = Pipeline::with_config(PipelineConfig {
        parallel: !args.sequential,
        num_threads: args.threads,
    });
    let frequencies = pipeline.run(&documents)?;

    let report = FrequencyReport::from_frequencies(&frequencies, args.limit);
    print_report(&report, &args)?;

    info!(
        "counted {} documents from {} in {:?}",
        documents.len(),
        args.directory.display(),
        start.elapsed()
    );
    Ok(())
}
