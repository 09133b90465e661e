//! Loading document contents from the filesystem.
//!
//! Loaders are the input collaborator of the counting core: they enumerate
//! text files and deliver complete, decoded contents. All loader failures are
//! surfaced to the caller before the pipeline runs; the core never sees
//! malformed input.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::{Result, WordFreqError};

/// Trait for loaders that supply document contents.
pub trait DocumentLoader: Send + Sync {
    /// Load the full contents of every matching document under `path`.
    fn load(&self, path: &Path) -> Result<Vec<String>>;
}

/// A loader that reads every file with a given extension from one directory.
///
/// Files are read in parallel; the returned order is unspecified, which is
/// fine because aggregation is order-independent.
///
/// # Errors
///
/// - [`WordFreqError::DirectoryNotFound`] when the directory does not exist
/// - [`WordFreqError::NoMatchingFiles`] when it holds no matching files
/// - [`WordFreqError::FileRead`] when reading any single file fails
#[derive(Clone, Debug)]
pub struct TextDirectoryLoader {
    extension: String,
}

impl TextDirectoryLoader {
    /// Create a loader for `.txt` files.
    pub fn new() -> Self {
        Self::with_extension("txt")
    }

    /// Create a loader for files with the given extension (no leading dot).
    pub fn with_extension<S: Into<String>>(extension: S) -> Self {
        TextDirectoryLoader {
            extension: extension.into(),
        }
    }

    /// The extension this loader matches against.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn matching_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(WordFreqError::directory_not_found(dir));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if matches && path.is_file() {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(WordFreqError::no_matching_files(dir, &self.extension));
        }

        files.sort();
        Ok(files)
    }
}

impl DocumentLoader for TextDirectoryLoader {
    fn load(&self, dir: &Path) -> Result<Vec<String>> {
        let files = self.matching_files(dir)?;
        debug!(
            "reading {} `.{}` files from {}",
            files.len(),
            self.extension,
            dir.display()
        );

        let contents = files
            .par_iter()
            .map(|path| {
                fs::read_to_string(path).map_err(|source| WordFreqError::file_read(path, source))
            })
            .collect::<Result<Vec<String>>>()?;

        info!("loaded {} documents from {}", contents.len(), dir.display());
        Ok(contents)
    }
}

impl Default for TextDirectoryLoader {
    fn default() -> Self {
        Self::new()
    }
}
