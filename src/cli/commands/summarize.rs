//! Summarize compliance over stored records

use log::debug;

use ecoinspect::adapters::JsonResponseSource;
use ecoinspect::config::Config;
use ecoinspect::core::models::GroupBy;
use ecoinspect::core::ports::ResponseSource;
use ecoinspect::core::services;
use ecoinspect::output::{GroupedSummaryResult, OutputMode, SummaryResult};

/// Summarize the records in the inputs, optionally grouped
pub fn summarize(
    inputs: &[String],
    by: Option<&str>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let group_by = by.map(str::parse::<GroupBy>).transpose().map_err(anyhow::Error::msg)?;
    let classifier = config.classifier()?;
    let records = JsonResponseSource::new(inputs.iter().cloned()).load()?;
    debug!("Summarizing {} record(s)", records.len());

    let generated_at = chrono::Utc::now().to_rfc3339();
    let keyword_version = classifier.positive().version.clone();

    match group_by {
        Some(group_by) => GroupedSummaryResult {
            generated_at,
            keyword_version,
            group_by,
            groups: services::aggregate_by(&classifier, &records, group_by),
        }
        .render(mode),
        None => SummaryResult {
            generated_at,
            keyword_version,
            summary: services::aggregate_with(&classifier, &records),
        }
        .render(mode),
    }

    Ok(())
}
