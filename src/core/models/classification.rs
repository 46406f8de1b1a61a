//! Response classification buckets
//!
//! Defines the compliance bucket a checklist response falls into.

use serde::{Deserialize, Serialize};

/// Compliance bucket for a single checklist response
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The item is compliant
    Positive,
    /// The item is non-compliant
    Negative,
    /// The item does not apply to this establishment
    NotApplicable,
    /// Free text that matched no keyword
    Unknown,
}

impl Classification {
    /// All classifications, in reporting order
    pub const ALL: [Self; 4] = [Self::Positive, Self::Negative, Self::NotApplicable, Self::Unknown];

    /// Whether this bucket counts toward the compliance percent denominator
    #[must_use]
    pub const fn counts_toward_compliance(self) -> bool {
        matches!(self, Self::Positive | Self::Negative)
    }

    /// Stable machine name (matches the serde representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::NotApplicable => "not_applicable",
            Self::Unknown => "unknown",
        }
    }

    /// Short label for human output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::NotApplicable => "N/A",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "not_applicable" | "na" | "n/a" => Ok(Self::NotApplicable),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Invalid classification: {s}. Use: positive, negative, not_applicable, unknown"
            )),
        }
    }
}
