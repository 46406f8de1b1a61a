//! Tests for compliance aggregation

use ecoinspect::core::models::{Classification, GroupBy, UNASSIGNED_GROUP};
use ecoinspect::core::services::{
    ResponseClassifier, aggregate, aggregate_by, aggregate_with, annotate, standard_classifier,
};

use super::common::{RecordBuilder, records};

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn test_empty_input() {
    let summary = aggregate(&[]);
    assert_eq!(summary.positive_count, 0);
    assert_eq!(summary.negative_count, 0);
    assert_eq!(summary.na_count, 0);
    assert_eq!(summary.unknown_count, 0);
    assert_eq!(summary.total_count, 0);
    assert!(summary.compliance_percent.is_none());
}

#[test]
fn test_half_compliant() {
    let summary = aggregate(&records(&["Yes", "No"]));
    assert_eq!(summary.compliance_percent, Some(50.0));
}

#[test]
fn test_all_not_applicable_has_no_percent() {
    let summary = aggregate(&records(&["N/A", "N/A"]));
    assert_eq!(summary.total_count, 2);
    assert!(summary.compliance_percent.is_none());
    assert_eq!(summary.percent_label(), "N/A");
}

#[test]
fn test_mixed_inspection() {
    let input = records(&["Yes", "ok", "Pass", "fail", "n/a", "see photo", ""]);
    let summary = aggregate(&input);

    assert_eq!(summary.positive_count, 3);
    assert_eq!(summary.negative_count, 1);
    assert_eq!(summary.na_count, 2);
    assert_eq!(summary.unknown_count, 1);
    assert_eq!(summary.total_count, input.len());
    assert_eq!(summary.compliance_percent, Some(75.0));
    assert_eq!(summary.count(Classification::Unknown), 1);
}

#[test]
fn test_aggregate_with_extended_classifier() {
    let classifier = ResponseClassifier::extended(["adequate"], ["missing"]).unwrap();
    let input = records(&["adequate", "missing", "missing", "adequate"]);

    assert_eq!(aggregate(&input).unknown_count, 4);
    let summary = aggregate_with(&classifier, &input);
    assert_eq!(summary.unknown_count, 0);
    assert_eq!(summary.compliance_percent, Some(50.0));
}

// =============================================================================
// EXPIRED
// =============================================================================

#[test]
fn test_expired_is_independent_of_classification() {
    let input = vec![
        RecordBuilder::new("Yes").notes("Recheck needed").build(),
        RecordBuilder::new("No").notes("Recheck needed").build(),
        RecordBuilder::blank().notes("Recheck needed").build(),
        RecordBuilder::new("Yes").notes("  ").build(),
    ];
    let annotated = annotate(standard_classifier(), &input);

    assert_eq!(annotated[0].classification, Classification::Positive);
    assert_eq!(annotated[1].classification, Classification::Negative);
    assert_eq!(annotated[2].classification, Classification::NotApplicable);
    assert!(annotated[0].expired && annotated[1].expired && annotated[2].expired);
    assert!(!annotated[3].expired);
}

#[test]
fn test_annotate_carries_identifiers() {
    let input = vec![RecordBuilder::new("ok").question("Grease trap").report("R-1").build()];
    let annotated = annotate(standard_classifier(), &input);
    assert_eq!(annotated[0].question.as_deref(), Some("Grease trap"));
    assert_eq!(annotated[0].report.as_deref(), Some("R-1"));
    assert!(annotated[0].establishment.is_none());
}

// =============================================================================
// GROUPING
// =============================================================================

#[test]
fn test_group_by_report() {
    let input = vec![
        RecordBuilder::new("Yes").report("R-1").build(),
        RecordBuilder::new("Yes").report("R-1").build(),
        RecordBuilder::new("No").report("R-2").build(),
        RecordBuilder::new("N/A").report("R-2").build(),
        RecordBuilder::new("Yes").report("  ").build(),
    ];
    let groups = aggregate_by(standard_classifier(), &input, GroupBy::Report);

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec![UNASSIGNED_GROUP, "R-1", "R-2"]);
    assert_eq!(groups["R-1"].compliance_percent, Some(100.0));
    assert_eq!(groups["R-2"].compliance_percent, Some(0.0));
    assert_eq!(groups["R-2"].na_count, 1);
    assert_eq!(groups[UNASSIGNED_GROUP].total_count, 1);
}

#[test]
fn test_group_empty_input() {
    assert!(aggregate_by(standard_classifier(), &[], GroupBy::Establishment).is_empty());
}
