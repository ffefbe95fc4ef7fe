use super::ui;
use crate::core::calculate_roi;
use crate::core::config::AppConfig;
use crate::core::inputs::RoiInputs;
use crate::core::report::{SummaryReport, render_report};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use tracing::info;

/// Calculates and renders the summary report stamped with `generated_at`.
///
/// Fails before anything is rendered when the calculation fails.
pub fn build_report(
    inputs: &RoiInputs,
    config: &AppConfig,
    generated_at: NaiveDateTime,
) -> Result<SummaryReport> {
    let results = calculate_roi(inputs)?;
    Ok(render_report(
        &results,
        &config.report.title,
        &config.currency_symbol,
        generated_at,
    ))
}

pub fn run(
    inputs: &RoiInputs,
    config: &AppConfig,
    output_dir: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    info!("Generating ROI summary report...");
    let report = build_report(inputs, config, Local::now().naive_local())?;

    if to_stdout {
        println!("{}", report.html);
        return Ok(());
    }

    let dir = output_dir.unwrap_or_else(|| Path::new(&config.report.output_dir));
    let path = report.write_to_dir(dir)?;
    println!(
        "Report saved: {} {}",
        ui::style_text(&path.display().to_string(), ui::StyleType::TotalValue),
        ui::style_text(&format!("({})", report.mime_type), ui::StyleType::Subtle)
    );
    Ok(())
}
