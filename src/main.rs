//! ecoinspect - Compliance classification and reporting for environmental
//! inspection checklists
//!
//! Classifies checklist responses, summarizes compliance per report or
//! establishment, and checks role access to reporting routes.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod server;

/// Main entry point for the ecoinspect CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
