//! # wordfreq
//!
//! A fast, parallel word-frequency counter for plain-text corpora.
//!
//! ## Features
//!
//! - Unicode-aware word extraction (letter runs joined by single internal
//!   hyphens and apostrophes)
//! - Case-folded tokens for case-insensitive counting
//! - Order-independent aggregation: per-document counts combined with an
//!   associative, commutative merge
//! - Parallel document processing via rayon
//! - Ranked reporting with a defined tie-break

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod pipeline;
pub mod report;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
    pub use crate::error::{Result, WordFreqError};
    pub use crate::frequency::FrequencyMap;
    pub use crate::loader::{DocumentLoader, TextDirectoryLoader};
    pub use crate::pipeline::{Pipeline, PipelineConfig};
    pub use crate::report::FrequencyReport;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
