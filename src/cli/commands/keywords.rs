//! Show the keyword sets

use ecoinspect::config::Config;
use ecoinspect::core::models::keywords::{NOT_APPLICABLE_PHRASE, NOT_APPLICABLE_TOKEN};
use ecoinspect::output::{KeywordsResult, OutputMode};

/// Print the keyword sets the classifier uses
pub fn keywords(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let classifier = config.classifier()?;

    KeywordsResult {
        not_applicable: vec![NOT_APPLICABLE_TOKEN.to_string(), NOT_APPLICABLE_PHRASE.to_string()],
        sets: vec![classifier.positive().clone(), classifier.negative().clone()],
    }
    .render(mode);
    Ok(())
}
