use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use roicalc::cli::calculate::OutputFormat;
use roicalc::core::InputOverrides;
use roicalc::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for roicalc::AppCommand {
    fn from(cmd: Commands) -> roicalc::AppCommand {
        match cmd {
            Commands::Calculate { format, overrides } => {
                roicalc::AppCommand::Calculate { overrides, format }
            }
            Commands::Report {
                output_dir,
                stdout,
                overrides,
            } => roicalc::AppCommand::Report {
                overrides,
                output_dir,
                to_stdout: stdout,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Calculate ROI and display the summary and chart series
    Calculate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: InputOverrides,
    },
    /// Generate the HTML ROI summary report
    Report {
        /// Directory to write roi_summary_report.html into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the report to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        #[command(flatten)]
        overrides: InputOverrides,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => roicalc::cli::setup::setup(),
        Some(cmd) => roicalc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
