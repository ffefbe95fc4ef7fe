pub mod cli;
pub mod core;

use crate::cli::calculate::OutputFormat;
use crate::core::InputOverrides;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Commands that run a calculation.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Calculate {
        overrides: InputOverrides,
        format: OutputFormat,
    },
    Report {
        overrides: InputOverrides,
        output_dir: Option<PathBuf>,
        to_stdout: bool,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("ROI calculator starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Calculate { overrides, format } => {
            let inputs = config.inputs.with_overrides(&overrides);
            cli::calculate::run(&inputs, &config.currency_symbol, format)
        }
        AppCommand::Report {
            overrides,
            output_dir,
            to_stdout,
        } => {
            let inputs = config.inputs.with_overrides(&overrides);
            cli::report::run(&inputs, &config, output_dir.as_deref(), to_stdout)
        }
    }
}
