//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Checklist response exports stored as JSON / JSON Lines files

pub mod json;

pub use json::{JsonResponseSource, SourceError};
