//! Compliance aggregation
//!
//! Reduces checklist response records to [`ComplianceSummary`] values.
//! Aggregation never fails: text the classifier does not recognize is
//! tallied as unknown, so callers can watch `unknown_count` for data
//! quality problems instead of losing whole reports.

use std::collections::BTreeMap;

use super::classifier::{ResponseClassifier, standard_classifier};
use crate::core::models::{
    ChecklistResponseRecord, ClassifiedResponse, ComplianceSummary, GroupBy,
};

/// Aggregate records with the built-in keyword sets
#[must_use]
pub fn aggregate(records: &[ChecklistResponseRecord]) -> ComplianceSummary {
    aggregate_with(standard_classifier(), records)
}

/// Aggregate records with the given classifier
#[must_use]
pub fn aggregate_with(
    classifier: &ResponseClassifier,
    records: &[ChecklistResponseRecord],
) -> ComplianceSummary {
    ComplianceSummary::from_classifications(
        records.iter().map(|r| classifier.classify(r.response_text.as_deref())),
    )
}

/// Classify each record and attach its expired flag
#[must_use]
pub fn annotate(
    classifier: &ResponseClassifier,
    records: &[ChecklistResponseRecord],
) -> Vec<ClassifiedResponse> {
    records
        .iter()
        .map(|r| ClassifiedResponse {
            question: r.question.clone(),
            establishment: r.establishment.clone(),
            report: r.report.clone(),
            response_text: r.response_text.clone(),
            classification: classifier.classify(r.response_text.as_deref()),
            expired: r.is_expired(),
        })
        .collect()
}

/// Aggregate records into one summary per establishment or report
///
/// Records without the grouping key are collected under
/// [`UNASSIGNED_GROUP`](crate::core::models::UNASSIGNED_GROUP).
#[must_use]
pub fn aggregate_by(
    classifier: &ResponseClassifier,
    records: &[ChecklistResponseRecord],
    by: GroupBy,
) -> BTreeMap<String, ComplianceSummary> {
    let mut groups: BTreeMap<String, ComplianceSummary> = BTreeMap::new();
    for record in records {
        let classification = classifier.classify(record.response_text.as_deref());
        groups.entry(record.group_key(by).to_string()).or_default().tally(classification);
    }
    groups
}
