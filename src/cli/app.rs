//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use super::commands;
use ecoinspect::config::Config;
use ecoinspect::output::OutputMode;

/// ecoinspect - Compliance reporting for inspection checklists
#[derive(Parser, Debug)]
#[command(
    name = "ecoinspect",
    version,
    about = "Compliance reporting for inspection checklists",
    long_about = "Classify checklist responses and summarize compliance.\n\n\
                  Responses are bucketed as positive, negative, not applicable or unknown.\n\
                  Compliance is positive responses over positive plus negative responses."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify one or more responses
    Classify {
        /// Response texts to classify
        #[arg(required = true)]
        responses: Vec<String>,
    },

    /// Classify each record in the inputs and flag expired ones
    Annotate {
        /// Record files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Summarize compliance over the records in the inputs
    Summarize {
        /// Record files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Group by: establishment, report
        #[arg(short, long)]
        by: Option<String>,
    },

    /// Show the keyword sets used for classification
    Keywords,

    /// Check whether a role may access a route
    Authorize {
        /// Route name (e.g. reports, inspections)
        route: String,

        /// Role: admin, staff, user
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Manage configuration (show, init, path)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Serve the HTTP API
    Serve {
        /// Bind address (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a config template to ./ecoinspect.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show where configuration is looked up
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load(cli.config.as_deref())?;
    if let Some(source) = &config.source {
        debug!("Using config {}", source.display());
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Classify { responses }) => {
            commands::classify(&responses, &config, output_mode)
        },
        Some(Command::Annotate { inputs }) => commands::annotate(&inputs, &config, output_mode),
        Some(Command::Summarize { inputs, by }) => {
            commands::summarize(&inputs, by.as_deref(), &config, output_mode)
        },
        Some(Command::Keywords) => commands::keywords(&config, output_mode),
        Some(Command::Authorize { route, role }) => {
            commands::authorize(&route, role.as_deref(), &config, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(action, &config, output_mode),
        Some(Command::Serve { host, port }) => {
            commands::serve(host.as_deref(), port, &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("ecoinspect v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ecoinspect v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'ecoinspect --help' for usage");
                println!("Run 'ecoinspect summarize <records.json>' to get started");
            }
            Ok(())
        },
    }
}
