//! Response classifier
//!
//! Maps a checklist response to a [`Classification`] using keyword-set
//! membership. Classification is pure, deterministic and total: every
//! input yields exactly one bucket.
//!
//! Rules, in order:
//!
//! 1. Missing or blank text is not applicable.
//! 2. `n/a`, or any text containing "not applicable" (any case), is not applicable.
//! 3. A normalized value in the positive set is positive.
//! 4. A normalized value in the negative set is negative.
//! 5. Anything else is unknown.
//!
//! ```
//! use ecoinspect::core::models::Classification;
//! use ecoinspect::core::services::classify;
//!
//! assert_eq!(classify(Some("  YES  ")), Classification::Positive);
//! assert_eq!(classify(Some("Not applicable here")), Classification::NotApplicable);
//! assert_eq!(classify(Some("maybe")), Classification::Unknown);
//! assert_eq!(classify(None), Classification::NotApplicable);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::keywords::{
    self, EXTENDED_VERSION, NOT_APPLICABLE_PHRASE, NOT_APPLICABLE_TOKEN,
};
use crate::core::models::{Classification, KeywordSet};

static STANDARD: LazyLock<ResponseClassifier> = LazyLock::new(ResponseClassifier::standard);

static NOT_APPLICABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(NOT_APPLICABLE_PHRASE)))
        .unwrap_or_else(|_| unreachable!("escaped literal is a valid pattern"))
});

/// Errors raised when extending the keyword sets
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeywordError {
    /// An extension word was blank
    #[error("empty keyword in {0} set")]
    Empty(String),

    /// An extension word already belongs to the opposite set
    #[error("keyword '{word}' cannot be {wanted}: it is already in the {existing} set")]
    Conflict {
        /// The normalized word
        word: String,
        /// Set the word was added to
        wanted: String,
        /// Set the word already belongs to
        existing: String,
    },
}

/// Classifier holding the positive and negative keyword sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseClassifier {
    positive: KeywordSet,
    negative: KeywordSet,
}

impl Default for ResponseClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResponseClassifier {
    /// Classifier using the built-in keyword sets
    #[must_use]
    pub fn standard() -> Self {
        Self {
            positive: KeywordSet::builtin_positive(),
            negative: KeywordSet::builtin_negative(),
        }
    }

    /// Classifier using the built-in sets plus extra words
    ///
    /// Extra words are normalized. A word that is blank, or that the
    /// opposite set already contains, is rejected.
    pub fn extended<P, N>(extra_positive: P, extra_negative: N) -> Result<Self, KeywordError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut classifier = Self::standard();
        let extra_positive: Vec<String> =
            extra_positive.into_iter().map(|w| keywords::normalize(w.as_ref())).collect();
        let extra_negative: Vec<String> =
            extra_negative.into_iter().map(|w| keywords::normalize(w.as_ref())).collect();

        if extra_positive.is_empty() && extra_negative.is_empty() {
            return Ok(classifier);
        }

        add_words(&mut classifier.positive, &classifier.negative, extra_positive)?;
        add_words(&mut classifier.negative, &classifier.positive, extra_negative)?;
        classifier.positive.version = EXTENDED_VERSION.to_string();
        classifier.negative.version = EXTENDED_VERSION.to_string();
        Ok(classifier)
    }

    /// The positive keyword set
    #[must_use]
    pub const fn positive(&self) -> &KeywordSet {
        &self.positive
    }

    /// The negative keyword set
    #[must_use]
    pub const fn negative(&self) -> &KeywordSet {
        &self.negative
    }

    /// Classify one response
    #[must_use]
    pub fn classify(&self, response_text: Option<&str>) -> Classification {
        let Some(raw) = response_text else {
            return Classification::NotApplicable;
        };

        let normalized = keywords::normalize(raw);
        if normalized.is_empty() {
            return Classification::NotApplicable;
        }

        if normalized == NOT_APPLICABLE_TOKEN || NOT_APPLICABLE_RE.is_match(raw) {
            return Classification::NotApplicable;
        }

        if self.positive.contains(&normalized) {
            Classification::Positive
        } else if self.negative.contains(&normalized) {
            Classification::Negative
        } else {
            Classification::Unknown
        }
    }
}

/// Classify a response with the built-in keyword sets
#[must_use]
pub fn classify(response_text: Option<&str>) -> Classification {
    STANDARD.classify(response_text)
}

/// The shared classifier built from the built-in keyword sets
#[must_use]
pub fn standard_classifier() -> &'static ResponseClassifier {
    &STANDARD
}

fn add_words(
    target: &mut KeywordSet,
    opposite: &KeywordSet,
    words: Vec<String>,
) -> Result<(), KeywordError> {
    for word in words {
        if word.is_empty() {
            return Err(KeywordError::Empty(target.name.clone()));
        }
        if opposite.contains(&word) {
            return Err(KeywordError::Conflict {
                word,
                wanted: target.name.clone(),
                existing: opposite.name.clone(),
            });
        }
        target.words.insert(word);
    }
    Ok(())
}
