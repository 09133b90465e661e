//! Document processing pipeline.
//!
//! The [`Pipeline`] fans out tokenization and local counting over a document
//! collection and folds the per-document [`FrequencyMap`]s into one aggregate
//! with the associative merge. Each worker builds a private local map; there
//! is no shared mutable aggregate, so the result is identical for any degree
//! of parallelism and any document order.
//!
//! # Examples
//!
//! ```
//! use wordfreq::pipeline::Pipeline;
//!
//! let documents = vec![
//!     "the quick brown fox".to_string(),
//!     "the lazy dog".to_string(),
//! ];
//!
//! let frequencies = Pipeline::new().run(&documents).unwrap();
//! assert_eq!(frequencies.get("the"), 2);
//! assert_eq!(frequencies.get("fox"), 1);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::{Result, WordFreqError};
use crate::frequency::FrequencyMap;

/// Configuration for pipeline execution.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Whether to process documents in parallel.
    pub parallel: bool,

    /// Number of worker threads for parallel processing.
    ///
    /// `None` uses the global rayon pool; `Some(n)` runs the fold inside a
    /// dedicated pool of `n` threads.
    pub num_threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            parallel: true,
            num_threads: None,
        }
    }
}

/// Orchestrates tokenization, local counting, and the merge fold.
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the default word tokenizer and configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with the default word tokenizer and the given
    /// configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self::with_tokenizer(Arc::new(WordTokenizer::new()), config)
    }

    /// Create a pipeline with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>, config: PipelineConfig) -> Self {
        Pipeline { tokenizer, config }
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Count word frequencies across all documents.
    ///
    /// An empty document collection yields an empty map, not an error.
    pub fn run(&self, documents: &[String]) -> Result<FrequencyMap> {
        if documents.is_empty() {
            return Ok(FrequencyMap::new());
        }

        let start = Instant::now();
        let frequencies = if self.config.parallel {
            self.run_parallel(documents)?
        } else {
            self.run_sequential(documents)?
        };
        info!(
            "aggregated {} documents into {} distinct words ({} total) in {:?}",
            documents.len(),
            frequencies.len(),
            frequencies.total_words(),
            start.elapsed()
        );

        Ok(frequencies)
    }

    /// Tokenize and count a single document.
    fn count_document(&self, content: &str) -> Result<FrequencyMap> {
        Ok(FrequencyMap::from_tokens(self.tokenizer.tokenize(content)?))
    }

    fn run_sequential(&self, documents: &[String]) -> Result<FrequencyMap> {
        documents.iter().try_fold(FrequencyMap::new(), |acc, doc| {
            Ok(acc.merge(self.count_document(doc)?))
        })
    }

    fn run_parallel(&self, documents: &[String]) -> Result<FrequencyMap> {
        debug!(
            "parallel fold over {} documents across {} threads",
            documents.len(),
            self.config.num_threads.unwrap_or_else(num_cpus::get)
        );

        let fold = || {
            documents
                .par_iter()
                .map(|doc| self.count_document(doc))
                .try_reduce(FrequencyMap::new, |a, b| Ok(a.merge(b)))
        };

        match self.config.num_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        WordFreqError::other(format!("failed to build thread pool: {e}"))
                    })?;
                pool.install(fold)
            }
            None => fold(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
