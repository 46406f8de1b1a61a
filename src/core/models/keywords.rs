//! Keyword sets used to classify checklist responses
//!
//! The word lists are data: each list is published as a named, versioned
//! [`KeywordSet`] so reports can state which rules produced them. Words are
//! stored normalized (trimmed, lowercase).

use std::collections::BTreeSet;

use serde::Serialize;

/// Version label of the built-in keyword lists
pub const BUILTIN_VERSION: &str = "v1";

/// Version label of a built-in list extended with local words
pub const EXTENDED_VERSION: &str = "v1+local";

/// Exact normalized value that always means "not applicable"
pub const NOT_APPLICABLE_TOKEN: &str = "n/a";

/// Phrase that marks a response as not applicable wherever it appears
pub const NOT_APPLICABLE_PHRASE: &str = "not applicable";

/// Responses that indicate compliance
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "yes",
    "compliant",
    "pass",
    "positive",
    "ok",
    "okay",
    "approved",
    "satisfactory",
    "good",
    "excellent",
    "complete",
    "done",
    "true",
    "1",
    "present",
    "available",
    "installed",
    "functional",
    "working",
    "operational",
];

/// Responses that indicate non-compliance
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "no",
    "non_compliant",
    "fail",
    "negative",
    "not",
    "disapproved",
    "unsatisfactory",
    "poor",
    "incomplete",
    "pending",
    "false",
    "0",
    "violated",
    "violation",
    "issue",
    "problem",
    "deficiency",
    "non-present",
    "absent",
    "unavailable",
    "not installed",
    "non-functional",
    "broken",
    "malfunctioning",
];

/// A named, versioned set of normalized keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    /// Set name (e.g. "positive")
    pub name: String,
    /// Version label of the rules
    pub version: String,
    /// Normalized words
    pub words: BTreeSet<String>,
}

impl KeywordSet {
    /// Build a set from raw words, normalizing each one
    #[must_use]
    pub fn new<I, S>(name: &str, version: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            words: words.into_iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// The built-in positive set
    #[must_use]
    pub fn builtin_positive() -> Self {
        Self::new("positive", BUILTIN_VERSION, POSITIVE_KEYWORDS)
    }

    /// The built-in negative set
    #[must_use]
    pub fn builtin_negative() -> Self {
        Self::new("negative", BUILTIN_VERSION, NEGATIVE_KEYWORDS)
    }

    /// Whether an already-normalized value is a member
    #[must_use]
    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    /// Number of words in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize a response or keyword: trim surrounding whitespace, lowercase
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
