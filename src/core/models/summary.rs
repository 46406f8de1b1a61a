//! Compliance summary
//!
//! Derived counts over a collection of classified responses. Recomputed on
//! demand and never persisted.

use serde::Serialize;

use super::Classification;

/// Counts per classification plus the derived compliance percent
///
/// `positive_count + negative_count + na_count + unknown_count` always
/// equals `total_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComplianceSummary {
    /// Responses classified positive
    pub positive_count: usize,
    /// Responses classified negative
    pub negative_count: usize,
    /// Responses classified not applicable
    pub na_count: usize,
    /// Responses that matched no keyword
    pub unknown_count: usize,
    /// All tallied responses
    pub total_count: usize,
    /// `positive / (positive + negative) * 100`, `None` when nothing counted
    pub compliance_percent: Option<f64>,
}

impl ComplianceSummary {
    /// Build a summary from a sequence of classifications
    #[must_use]
    pub fn from_classifications<I>(classifications: I) -> Self
    where
        I: IntoIterator<Item = Classification>,
    {
        let mut summary = Self::default();
        for c in classifications {
            summary.tally(c);
        }
        summary
    }

    /// Count one more response
    pub fn tally(&mut self, classification: Classification) {
        match classification {
            Classification::Positive => self.positive_count += 1,
            Classification::Negative => self.negative_count += 1,
            Classification::NotApplicable => self.na_count += 1,
            Classification::Unknown => self.unknown_count += 1,
        }
        self.total_count += 1;
        self.compliance_percent = self.compute_percent();
    }

    /// Number of responses in the percent denominator
    #[must_use]
    pub const fn assessed_count(&self) -> usize {
        self.positive_count + self.negative_count
    }

    /// Count for a single bucket
    #[must_use]
    pub const fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Positive => self.positive_count,
            Classification::Negative => self.negative_count,
            Classification::NotApplicable => self.na_count,
            Classification::Unknown => self.unknown_count,
        }
    }

    /// Compliance percent formatted for display ("50.0%" or "N/A")
    #[must_use]
    pub fn percent_label(&self) -> String {
        self.compliance_percent.map_or_else(|| "N/A".to_string(), |p| format!("{p:.1}%"))
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_percent(&self) -> Option<f64> {
        let denominator = self.assessed_count();
        if denominator == 0 {
            return None;
        }
        Some(self.positive_count as f64 / denominator as f64 * 100.0)
    }
}
