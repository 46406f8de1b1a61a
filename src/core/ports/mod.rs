//! Port traits (interfaces) for external dependencies
//!
//! The core never reads files or databases itself. Checklist responses are
//! handed over through [`ResponseSource`]; implementations live in the
//! `adapters` module.

mod response_source;

pub use response_source::ResponseSource;
