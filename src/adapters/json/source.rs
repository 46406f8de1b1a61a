//! File-backed response source
//!
//! Loads checklist response exports from files, directories and glob
//! patterns.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

use super::parser::{RecordFormat, RecordParseError, parse_records};
use crate::core::models::ChecklistResponseRecord;
use crate::core::ports::ResponseSource;

/// Errors that can occur while loading records from disk
#[derive(Debug, Error)]
pub enum SourceError {
    /// No inputs were given
    #[error("no input files given")]
    NoInputs,

    /// Input path does not exist
    #[error("input not found: {0}")]
    NotFound(PathBuf),

    /// A glob pattern or directory matched no record files
    #[error("no record files match: {0}")]
    NoMatch(String),

    /// Glob pattern syntax error
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern
        pattern: String,
        /// Underlying error
        #[source]
        source: glob::PatternError,
    },

    /// Error walking a directory or expanding a glob
    #[error("cannot list {path}: {message}")]
    Listing {
        /// Path being listed
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// IO error reading a file
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid record JSON
    #[error("{path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: RecordParseError,
    },
}

/// Loads records from JSON / JSON Lines files
///
/// Each input may be a file, a directory (walked recursively for `.json`,
/// `.jsonl` and `.ndjson` files, hidden entries skipped) or a glob pattern.
#[derive(Debug, Clone)]
pub struct JsonResponseSource {
    inputs: Vec<String>,
}

impl JsonResponseSource {
    /// Create a source over the given inputs
    #[must_use]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Expand the inputs to the list of files to read, in order
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        if self.inputs.is_empty() {
            return Err(SourceError::NoInputs);
        }

        let mut files = Vec::new();
        for input in &self.inputs {
            let expanded = if is_pattern(input) {
                expand_glob(input)?
            } else {
                let path = Path::new(input);
                if path.is_dir() {
                    walk_dir(path)?
                } else if path.is_file() {
                    vec![path.to_path_buf()]
                } else {
                    return Err(SourceError::NotFound(path.to_path_buf()));
                }
            };

            if expanded.is_empty() {
                return Err(SourceError::NoMatch(input.clone()));
            }
            files.extend(expanded);
        }
        Ok(files)
    }

    /// Read and parse every input file
    pub fn load_records(&self) -> Result<Vec<ChecklistResponseRecord>, SourceError> {
        let mut records = Vec::new();
        for path in self.resolve_files()? {
            let loaded = load_file(&path)?;
            debug!("Loaded {} record(s) from {}", loaded.len(), path.display());
            records.extend(loaded);
        }
        Ok(records)
    }
}

impl ResponseSource for JsonResponseSource {
    fn load(&self) -> anyhow::Result<Vec<ChecklistResponseRecord>> {
        Ok(self.load_records()?)
    }
}

/// Load records from a single file
pub fn load_file(path: &Path) -> Result<Vec<ChecklistResponseRecord>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content, RecordFormat::from_path(path)).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_lowercase().as_str(), "json" | "jsonl" | "ndjson"))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

fn walk_dir(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name().into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry.map_err(|e| SourceError::Listing {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && is_record_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    let paths = glob::glob(pattern).map_err(|source| SourceError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.map_err(|e| SourceError::Listing {
            path: e.path().to_path_buf(),
            message: e.error().to_string(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
