//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`. Authorization
//! happens before a handler runs (see [`super::router`]).

use crate::core::services::{self, ResponseClassifier, RouteTable};

use super::error::ApiError;
use super::types::{
    AnnotationsData, ClassificationItem, ClassificationsData, ClassifyRequest, KeywordsData,
    RecordsRequest, StatisticsData, StatisticsRequest, SummaryData,
};

/// Shared, read-only state for API handlers
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// Classifier used for every request
    pub classifier: ResponseClassifier,
    /// Route access policies
    pub routes: RouteTable,
}

impl ApiContext {
    /// Context with the given classifier and routes
    #[must_use]
    pub const fn new(classifier: ResponseClassifier, routes: RouteTable) -> Self {
        Self { classifier, routes }
    }

    /// Context with built-in keywords and the standard route table
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ResponseClassifier::standard(), RouteTable::standard())
    }

    fn keyword_version(&self) -> String {
        self.classifier.positive().version.clone()
    }
}

// =============================================================================
// KEYWORDS
// =============================================================================

/// List the keyword sets in use
pub fn get_keywords(ctx: &ApiContext) -> Result<KeywordsData, ApiError> {
    Ok(KeywordsData {
        positive: ctx.classifier.positive().clone(),
        negative: ctx.classifier.negative().clone(),
    })
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify free-standing responses
pub fn classify_responses(
    ctx: &ApiContext,
    req: &ClassifyRequest,
) -> Result<ClassificationsData, ApiError> {
    let results = req
        .responses
        .iter()
        .map(|r| ClassificationItem {
            response: r.clone(),
            classification: ctx.classifier.classify(r.as_deref()),
        })
        .collect();
    Ok(ClassificationsData { results })
}

/// Classify records and attach their expired flags
pub fn annotate_records(
    ctx: &ApiContext,
    req: &RecordsRequest,
) -> Result<AnnotationsData, ApiError> {
    let records = services::annotate(&ctx.classifier, &req.records);
    let expired_count = records.iter().filter(|r| r.expired).count();
    Ok(AnnotationsData {
        records,
        expired_count,
    })
}

// =============================================================================
// REPORTING
// =============================================================================

/// Summarize records
pub fn summarize_records(ctx: &ApiContext, req: &RecordsRequest) -> Result<SummaryData, ApiError> {
    Ok(SummaryData {
        keyword_version: ctx.keyword_version(),
        summary: services::aggregate_with(&ctx.classifier, &req.records),
    })
}

/// Summarize records per establishment or report
pub fn record_statistics(
    ctx: &ApiContext,
    req: &StatisticsRequest,
) -> Result<StatisticsData, ApiError> {
    Ok(StatisticsData {
        keyword_version: ctx.keyword_version(),
        group_by: req.group_by,
        groups: services::aggregate_by(&ctx.classifier, &req.records, req.group_by),
    })
}
