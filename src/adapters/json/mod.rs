//! JSON-based response source
//!
//! Implements `ResponseSource` over checklist response exports on disk.
//!
//! - [`parser`] - Parse `.json` / `.jsonl` record documents
//! - [`source`] - Resolve inputs (files, directories, globs) and load them

pub mod parser;
pub mod source;

pub use parser::{RecordFormat, RecordParseError, parse_records};
pub use source::{JsonResponseSource, SourceError, load_file};
