//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`classifier`] - Classify checklist responses
//! - [`aggregator`] - Summarize classified responses
//! - [`authorizer`] - Check a role against a route's access policy

pub mod aggregator;
pub mod authorizer;
pub mod classifier;

pub use aggregator::{aggregate, aggregate_by, aggregate_with, annotate};
pub use authorizer::{AccessDenied, RouteTable};
pub use classifier::{KeywordError, ResponseClassifier, classify, standard_classifier};
