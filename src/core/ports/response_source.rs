//! Response source port
//!
//! Defines the interface for fetching checklist response records.

use super::super::models::ChecklistResponseRecord;

/// Source of checklist response records
///
/// Implementations decide how records are fetched, paginated or filtered.
/// The core only relies on the record shape.
pub trait ResponseSource {
    /// Load all records in one batch
    fn load(&self) -> anyhow::Result<Vec<ChecklistResponseRecord>>;
}

impl ResponseSource for Vec<ChecklistResponseRecord> {
    fn load(&self) -> anyhow::Result<Vec<ChecklistResponseRecord>> {
        Ok(self.clone())
    }
}
