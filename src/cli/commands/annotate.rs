//! Annotate records with their classification and expired flag

use log::debug;

use ecoinspect::adapters::JsonResponseSource;
use ecoinspect::config::Config;
use ecoinspect::core::models::ComplianceSummary;
use ecoinspect::core::ports::ResponseSource;
use ecoinspect::core::services;
use ecoinspect::output::{AnnotateResult, OutputMode};

/// Classify every record in the inputs
pub fn annotate(inputs: &[String], config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let classifier = config.classifier()?;
    let records = JsonResponseSource::new(inputs.iter().cloned()).load()?;
    debug!("Annotating {} record(s)", records.len());

    let annotated = services::annotate(&classifier, &records);
    let expired_count = annotated.iter().filter(|r| r.expired).count();
    let summary =
        ComplianceSummary::from_classifications(annotated.iter().map(|r| r.classification));

    AnnotateResult {
        records: annotated,
        expired_count,
        summary,
    }
    .render(mode);
    Ok(())
}
