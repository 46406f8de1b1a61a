//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{
    ChecklistResponseRecord, Classification, ClassifiedResponse, ComplianceSummary, GroupBy,
    KeywordSet,
};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for classifying free-standing responses
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Responses to classify; `null` entries are allowed
    pub responses: Vec<Option<String>>,
}

/// Request body carrying checklist response records
#[derive(Debug, Deserialize)]
pub struct RecordsRequest {
    /// The records
    pub records: Vec<ChecklistResponseRecord>,
}

/// Request body for grouped statistics
#[derive(Debug, Deserialize)]
pub struct StatisticsRequest {
    /// The records
    pub records: Vec<ChecklistResponseRecord>,
    /// Grouping key
    #[serde(default = "default_group_by")]
    pub group_by: GroupBy,
}

const fn default_group_by() -> GroupBy {
    GroupBy::Establishment
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Classification of one free-standing response
#[derive(Debug, Serialize)]
pub struct ClassificationItem {
    /// The input text
    pub response: Option<String>,
    /// Its classification
    pub classification: Classification,
}

/// Response data for classify requests
#[derive(Debug, Serialize)]
pub struct ClassificationsData {
    /// One item per requested response, in order
    pub results: Vec<ClassificationItem>,
}

/// Response data for annotate requests
#[derive(Debug, Serialize)]
pub struct AnnotationsData {
    /// Classified records with expired flags
    pub records: Vec<ClassifiedResponse>,
    /// Number of expired records
    pub expired_count: usize,
}

/// Response data for summary requests
#[derive(Debug, Serialize)]
pub struct SummaryData {
    /// Keyword rules version
    pub keyword_version: String,
    /// The summary
    pub summary: ComplianceSummary,
}

/// Response data for grouped statistics
#[derive(Debug, Serialize)]
pub struct StatisticsData {
    /// Keyword rules version
    pub keyword_version: String,
    /// Grouping key
    pub group_by: GroupBy,
    /// Summary per group
    pub groups: BTreeMap<String, ComplianceSummary>,
}

/// Response data for the keywords listing
#[derive(Debug, Serialize)]
pub struct KeywordsData {
    /// Positive set
    pub positive: KeywordSet,
    /// Negative set
    pub negative: KeywordSet,
}
