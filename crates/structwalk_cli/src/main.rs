//! structwalk CLI
//!
//! Walks JSON documents and reports their reconstructed nesting structure.

mod cli;
mod commands;
mod config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_outline, run_stats};
use crate::config::WalkConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Outline {
            file,
            max_depth,
            format,
            no_values,
            indent,
        } => {
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }
            if let Some(format) = format {
                config.format = format;
            }
            if no_values {
                config.show_values = false;
            }
            if let Some(indent) = indent {
                config.indent = usize::from(indent);
            }
            run_outline(&config, &file)
        }
        Commands::Stats {
            file,
            max_depth,
            format,
        } => {
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }
            if let Some(format) = format {
                config.format = format;
            }
            run_stats(&config, &file)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<WalkConfig> {
    if let Some(path) = path {
        return WalkConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = WalkConfig::discover(".") {
        info!("Using config: {}", path.display());
        return WalkConfig::from_file(&path).into_diagnostic();
    }

    Ok(WalkConfig::new())
}
