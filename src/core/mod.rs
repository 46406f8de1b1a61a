//! Core domain logic for ecoinspect
//!
//! This module contains pure business logic with no I/O dependencies.
//! Record loading is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Classification, ChecklistResponseRecord, ComplianceSummary, Role)
//! - `services/` - Classification, aggregation and access checks
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
