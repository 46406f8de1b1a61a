//! Configuration commands - show, init, path

use std::fs;
use std::path::Path;

use crate::cli::app::ConfigAction;
use ecoinspect::config::{CONFIG_TEMPLATE, Config};
use ecoinspect::output::{OperationResult, OutputMode};
use ecoinspect::paths;

/// Handle configuration subcommands
pub fn config_cmd(action: ConfigAction, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(config, mode),
        ConfigAction::Init { force } => init(force, mode),
        ConfigAction::Path => path(config, mode),
    }
}

fn show(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputMode::Human => {
            match &config.source {
                Some(source) => println!("# source: {}\n", source.display()),
                None => println!("# source: defaults\n"),
            }
            print!("{}", toml::to_string_pretty(config)?);
        },
    }
    Ok(())
}

fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let target = Path::new(paths::PROJECT_CONFIG);

    if target.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                paths::PROJECT_CONFIG
            ),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(target, CONFIG_TEMPLATE)?;
    OperationResult {
        success: true,
        message: format!("Created {}", paths::PROJECT_CONFIG),
    }
    .render(mode);
    Ok(())
}

fn path(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let active = config.source.as_ref().map(|p| p.display().to_string());
    let env = paths::env_config().map(|p| p.display().to_string());
    let project = paths::project_config(Path::new(".")).display().to_string();
    let global = paths::global_config().display().to_string();

    match mode {
        OutputMode::Json => println!(
            "{}",
            serde_json::json!({
                "active": active,
                "env": env,
                "project": project,
                "global": global,
            })
        ),
        OutputMode::Human => {
            println!("active:  {}", active.as_deref().unwrap_or("(defaults)"));
            println!("env:     {}", env.as_deref().unwrap_or("(unset)"));
            println!("project: {project}");
            println!("global:  {global}");
        },
    }
    Ok(())
}
