//! Classify free-standing responses

use ecoinspect::config::Config;
use ecoinspect::output::{ClassifyItem, ClassifyResult, OutputMode};

/// Classify each response given on the command line
pub fn classify(responses: &[String], config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let classifier = config.classifier()?;

    let results = responses
        .iter()
        .map(|r| ClassifyItem {
            response: Some(r.clone()),
            classification: classifier.classify(Some(r.as_str())),
        })
        .collect();

    ClassifyResult { results }.render(mode);
    Ok(())
}
