//! JSON parser for checklist response exports
//!
//! Two layouts are understood:
//!
//! - `.json`: an array of records, an object with a `records` array, or a
//!   single record object
//! - `.jsonl`: one record object per line, blank lines ignored

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::core::models::ChecklistResponseRecord;

/// Layout of a record document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// A single JSON document
    Json,
    /// One JSON object per line
    JsonLines,
}

impl RecordFormat {
    /// Pick the layout from a file extension (`.jsonl`/`.ndjson` are line based)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("jsonl" | "ndjson") => Self::JsonLines,
            _ => Self::Json,
        }
    }
}

/// Keys a single top-level record object may carry
const RECORD_KEYS: &[&str] = &[
    "response_text",
    "responseText",
    "response",
    "notes",
    "question",
    "establishment",
    "establishmentId",
    "report",
    "reportId",
];

/// Keys that identify an object as a record rather than some other document
const REQUIRED_KEYS: &[&str] = &["response_text", "responseText", "response", "notes"];

/// A record document that could not be parsed
#[derive(Debug, Error)]
#[error(
    "{location}invalid record JSON: {source}",
    location = location(.line.as_ref().copied(), .index.as_ref().copied())
)]
pub struct RecordParseError {
    /// 1-based line for line-based documents
    pub line: Option<usize>,
    /// 0-based position of the failing record inside an array
    pub index: Option<usize>,
    /// Underlying JSON error
    #[source]
    pub source: serde_json::Error,
}

impl RecordParseError {
    const fn document(source: serde_json::Error) -> Self {
        Self {
            line: None,
            index: None,
            source,
        }
    }

    fn shape(message: &str) -> Self {
        Self::document(serde::de::Error::custom(message))
    }
}

fn location(line: Option<usize>, index: Option<usize>) -> String {
    match (line, index) {
        (Some(line), _) => format!("line {line}: "),
        (None, Some(index)) => format!("record {index}: "),
        (None, None) => String::new(),
    }
}

/// Parse records from document text
pub fn parse_records(
    text: &str,
    format: RecordFormat,
) -> Result<Vec<ChecklistResponseRecord>, RecordParseError> {
    match format {
        RecordFormat::Json => {
            let doc: Value = serde_json::from_str(text).map_err(RecordParseError::document)?;
            parse_document(doc)
        },
        RecordFormat::JsonLines => text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|source| RecordParseError {
                    line: Some(idx + 1),
                    index: None,
                    source,
                })
            })
            .collect(),
    }
}

/// Dispatch on the document shape: array, `{"records": [...]}`, or one record
fn parse_document(doc: Value) -> Result<Vec<ChecklistResponseRecord>, RecordParseError> {
    match doc {
        Value::Array(items) => parse_array(items),
        Value::Object(mut map) => {
            if let Some(records) = map.remove("records") {
                return match records {
                    Value::Array(items) => parse_array(items),
                    _ => Err(RecordParseError::shape("`records` must be an array")),
                };
            }
            if let Some(key) = map.keys().find(|k| !RECORD_KEYS.contains(&k.as_str())) {
                return Err(RecordParseError::shape(&format!(
                    "unknown field `{key}` in record object"
                )));
            }
            if !REQUIRED_KEYS.iter().any(|k| map.contains_key(*k)) {
                return Err(RecordParseError::shape(
                    "object is neither a record nor a `records` document",
                ));
            }
            let record =
                serde_json::from_value(Value::Object(map)).map_err(RecordParseError::document)?;
            Ok(vec![record])
        },
        _ => Err(RecordParseError::shape("expected an array or an object")),
    }
}

fn parse_array(items: Vec<Value>) -> Result<Vec<ChecklistResponseRecord>, RecordParseError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| RecordParseError {
                line: None,
                index: Some(index),
                source,
            })
        })
        .collect()
}
