//! Checklist response records
//!
//! A record is one answer to one checklist question for one inspection
//! result, as handed over by the persistence layer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Classification;

/// Group key used for records that carry no establishment/report id
pub const UNASSIGNED_GROUP: &str = "(unassigned)";

/// One stored answer to a checklist question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistResponseRecord {
    /// The recorded answer, free text or an enumerated value
    #[serde(alias = "responseText", alias = "response")]
    pub response_text: Option<String>,

    /// Remediation notes; non-empty marks the record expired
    pub notes: Option<String>,

    /// Checklist question text or id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Establishment the inspection was conducted at
    #[serde(
        alias = "establishmentId",
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub establishment: Option<String>,

    /// Inspection report the response belongs to
    #[serde(
        alias = "reportId",
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub report: Option<String>,
}

impl ChecklistResponseRecord {
    /// Create a record from a response and optional notes
    #[must_use]
    pub fn new(response_text: Option<&str>, notes: Option<&str>) -> Self {
        Self {
            response_text: response_text.map(String::from),
            notes: notes.map(String::from),
            ..Self::default()
        }
    }

    /// Set the question
    #[must_use]
    pub fn with_question(mut self, question: &str) -> Self {
        self.question = Some(question.to_string());
        self
    }

    /// Set the establishment id
    #[must_use]
    pub fn with_establishment(mut self, establishment: &str) -> Self {
        self.establishment = Some(establishment.to_string());
        self
    }

    /// Set the report id
    #[must_use]
    pub fn with_report(mut self, report: &str) -> Self {
        self.report = Some(report.to_string());
        self
    }

    /// Whether the record carries outstanding remediation notes
    ///
    /// This is independent of the response classification: a response can
    /// be positive and expired at the same time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// The grouping key for this record
    #[must_use]
    pub fn group_key(&self, by: GroupBy) -> &str {
        let key = match by {
            GroupBy::Establishment => self.establishment.as_deref(),
            GroupBy::Report => self.report.as_deref(),
        };
        key.map(str::trim).filter(|k| !k.is_empty()).unwrap_or(UNASSIGNED_GROUP)
    }
}

/// Identifiers arrive as strings or as numeric database ids
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, found {other}"
        ))),
    }
}

/// How grouped statistics are keyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// One summary per establishment
    Establishment,
    /// One summary per inspection report
    Report,
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Establishment => write!(f, "establishment"),
            Self::Report => write!(f, "report"),
        }
    }
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "establishment" => Ok(Self::Establishment),
            "report" => Ok(Self::Report),
            _ => Err(format!("Invalid grouping: {s}. Use: establishment, report")),
        }
    }
}

/// A record's classification with its separate expired flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedResponse {
    /// Checklist question, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Establishment id, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment: Option<String>,
    /// Report id, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// The original response text
    pub response_text: Option<String>,
    /// Compliance bucket
    pub classification: Classification,
    /// Whether remediation notes are outstanding
    pub expired: bool,
}
