//! Error types for the wordfreq library.
//!
//! All errors are represented by the [`WordFreqError`] enum. The counting core
//! itself never fails; every variant here describes a collaborator failure
//! (loading documents, encoding a report) that is surfaced to the caller
//! before or after the core pipeline runs.
//!
//! # Examples
//!
//! ```
//! use wordfreq::error::{Result, WordFreqError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordFreqError::other("something went wrong"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wordfreq operations.
#[derive(Error, Debug)]
pub enum WordFreqError {
    /// I/O errors without more specific context.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input directory does not exist (or is not a directory).
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The input directory exists but contains no files with the requested
    /// extension.
    #[error("no `.{extension}` files found in directory {}", .dir.display())]
    NoMatchingFiles {
        /// The directory that was searched.
        dir: PathBuf,
        /// The extension that was matched against (without the leading dot).
        extension: String,
    },

    /// Reading the contents of a single file failed.
    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`WordFreqError`].
pub type Result<T> = std::result::Result<T, WordFreqError>;

impl WordFreqError {
    /// Create a new directory-not-found error.
    pub fn directory_not_found<P: Into<PathBuf>>(dir: P) -> Self {
        WordFreqError::DirectoryNotFound(dir.into())
    }

    /// Create a new no-matching-files error.
    pub fn no_matching_files<P: Into<PathBuf>, S: Into<String>>(dir: P, extension: S) -> Self {
        WordFreqError::NoMatchingFiles {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Create a new file-read error.
    pub fn file_read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        WordFreqError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordFreqError::Other(msg.into())
    }
}
