//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{
    Classification, ClassifiedResponse, ComplianceSummary, GroupBy, KeywordSet, Role,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colored badge for a classification
#[must_use]
pub fn badge(classification: Classification) -> ColoredString {
    let label = format!("[{}]", classification.label());
    match classification {
        Classification::Positive => label.green().bold(),
        Classification::Negative => label.red().bold(),
        Classification::NotApplicable => label.dimmed(),
        Classification::Unknown => label.yellow(),
    }
}

/// Classification of free-standing responses
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    /// One entry per input, in order
    pub results: Vec<ClassifyItem>,
}

/// A single classified response
#[derive(Debug, Serialize)]
pub struct ClassifyItem {
    /// The input text
    pub response: Option<String>,
    /// Its classification
    pub classification: Classification,
}

/// Per-record classifications with expired flags
#[derive(Debug, Serialize)]
pub struct AnnotateResult {
    /// Classified records, in input order
    pub records: Vec<ClassifiedResponse>,
    /// Number of records with outstanding remediation notes
    pub expired_count: usize,
    /// Summary over the same records
    pub summary: ComplianceSummary,
}

/// Overall compliance summary
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// When the summary was computed (RFC 3339)
    pub generated_at: String,
    /// Version label of the keyword rules used
    pub keyword_version: String,
    /// The summary
    pub summary: ComplianceSummary,
}

/// Compliance summaries grouped by establishment or report
#[derive(Debug, Serialize)]
pub struct GroupedSummaryResult {
    /// When the summaries were computed (RFC 3339)
    pub generated_at: String,
    /// Version label of the keyword rules used
    pub keyword_version: String,
    /// Grouping key
    pub group_by: GroupBy,
    /// Summary per group
    pub groups: BTreeMap<String, ComplianceSummary>,
}

/// Keyword sets in use
#[derive(Debug, Serialize)]
pub struct KeywordsResult {
    /// Tokens that always mean "not applicable"
    pub not_applicable: Vec<String>,
    /// Positive and negative sets
    pub sets: Vec<KeywordSet>,
}

/// Outcome of an access check
#[derive(Debug, Serialize)]
pub struct AccessResult {
    /// Requested route
    pub route: String,
    /// Caller's role
    pub role: Option<Role>,
    /// Whether access is granted
    pub allowed: bool,
    /// Roles the route admits (empty for unknown routes)
    pub allowed_roles: Vec<Role>,
    /// Denial reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn write_summary(out: &mut String, summary: &ComplianceSummary, indent: &str) {
    let _ = writeln!(out, "{indent}Compliance: {}", summary.percent_label().bold());
    let _ = writeln!(
        out,
        "{indent}Positive: {}  Negative: {}  N/A: {}  Unknown: {}  Total: {}",
        summary.positive_count,
        summary.negative_count,
        summary.na_count,
        summary.unknown_count,
        summary.total_count
    );
}

impl ClassifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for item in &self.results {
            let _ = writeln!(
                out,
                "{} {}",
                badge(item.classification),
                item.response.as_deref().unwrap_or("(empty)")
            );
        }
        out
    }
}

impl AnnotateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if self.records.is_empty() {
            out.push_str("No responses found.\n");
            return out;
        }

        for r in &self.records {
            let label = r.question.as_deref().unwrap_or("-");
            let text = r.response_text.as_deref().unwrap_or("(empty)");
            let expired = if r.expired { format!(" {}", "EXPIRED".magenta()) } else { String::new() };
            let _ = writeln!(out, "{} {label}: {text}{expired}", badge(r.classification));
        }
        out.push('\n');
        write_summary(&mut out, &self.summary, "");
        let _ = writeln!(out, "Expired: {}", self.expired_count);
        out
    }
}

impl SummaryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if self.summary.total_count == 0 {
            out.push_str("No responses found.\n");
        }
        write_summary(&mut out, &self.summary, "");
        if self.summary.unknown_count > 0 {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "{} response(s) matched no keyword (keywords {})",
                    self.summary.unknown_count, self.keyword_version
                )
                .yellow()
            );
        }
        out
    }
}

impl GroupedSummaryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if self.groups.is_empty() {
            out.push_str("No responses found.\n");
            return out;
        }

        for (key, summary) in &self.groups {
            let _ = writeln!(out, "{} {key}", self.group_by);
            write_summary(&mut out, summary, "  ");
            out.push('\n');
        }
        let _ = writeln!(out, "{} group(s)", self.groups.len());
        out
    }
}

impl KeywordsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "not_applicable: {}\n", self.not_applicable.join(", "));
        for set in &self.sets {
            let words: Vec<&str> = set.words.iter().map(String::as_str).collect();
            let _ = writeln!(out, "{} ({}, {} words):", set.name, set.version, set.len());
            let _ = writeln!(out, "  {}\n", words.join(", "));
        }
        out
    }
}

impl AccessResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let role = self.role.map_or_else(|| "(none)".to_string(), |r| r.to_string());
        if self.allowed {
            let _ = writeln!(out, "{} {role} -> {}", "ALLOWED".green().bold(), self.route);
        } else {
            let _ = writeln!(out, "{} {role} -> {}", "DENIED".red().bold(), self.route);
            if let Some(reason) = &self.reason {
                let _ = writeln!(out, "  {reason}");
            }
        }
        if !self.allowed_roles.is_empty() {
            let roles: Vec<String> = self.allowed_roles.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "  allowed roles: {}", roles.join(", "));
        }
        out
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
