//! Domain models for ecoinspect
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Classification`] - Coarse compliance bucket of a checklist response
//! - [`ChecklistResponseRecord`] - One stored answer to one checklist question
//! - [`ComplianceSummary`] - Counts and compliance percent over many responses
//! - [`KeywordSet`] - Named, versioned keyword list used by the classifier
//! - [`Role`] / [`AccessPolicy`] - Who may reach which route

mod access;
mod classification;
pub mod keywords;
mod response;
mod summary;

pub use access::{AccessPolicy, ParseRoleError, Role};
pub use classification::Classification;
pub use keywords::KeywordSet;
pub use response::{ChecklistResponseRecord, ClassifiedResponse, GroupBy, UNASSIGNED_GROUP};
pub use summary::ComplianceSummary;
