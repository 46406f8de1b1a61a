//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures, pure handlers
//! and a dispatcher that can be driven by any HTTP server implementation
//! (`tiny_http`, axum, etc.) or called directly by clients.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **One access check**: [`dispatch`] authorizes every endpoint through the route table
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod router;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    ApiContext, annotate_records, classify_responses, get_keywords, record_statistics,
    summarize_records,
};
pub use router::{ApiReply, ROLE_HEADER, dispatch};
pub use types::{
    AnnotationsData, ApiResponse, ClassificationItem, ClassificationsData, ClassifyRequest,
    KeywordsData, RecordsRequest, StatisticsData, StatisticsRequest, SummaryData,
};
