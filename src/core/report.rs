//! HTML summary report generation.
use crate::core::calculator::RoiResults;
use crate::core::format::{format_currency, format_percent};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use html_escape::encode_text;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const REPORT_FILE_NAME: &str = "roi_summary_report.html";
pub const REPORT_MIME_TYPE: &str = "text/html";
pub const DEFAULT_REPORT_TITLE: &str = "ROI Summary Report";

const EXPLANATION: &str = "This ROI summary provides key financial metrics derived from adopting Agentic AI, highlighting significant cost reductions, time savings, and overall financial benefits. The ROI status indicates whether the investment yields a positive or negative return, helping stakeholders assess the financial impact effectively.";

const SHADED_ROW: &str = r#"<tr style="background-color: #f2f2f2;">"#;

/// A rendered report, ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub html: String,
}

impl SummaryReport {
    /// Writes the report into `dir`, returning the full path written.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.html)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Wrote ROI summary report to {}", path.display());
        Ok(path)
    }
}

/// Renders the summary report for `results`, stamped with `generated_at`.
pub fn render_report(
    results: &RoiResults,
    title: &str,
    currency_symbol: &str,
    generated_at: NaiveDateTime,
) -> SummaryReport {
    let status = if results.is_positive() {
        "positive"
    } else {
        "negative"
    };
    let money = |v: f64| format_currency(v, currency_symbol);

    let rows = [
        ("Total Benefits:", money(results.total_benefits)),
        ("Total Costs:", money(results.total_costs)),
        ("Net Benefits:", money(results.net_benefits)),
        (
            "ROI:",
            format!("{} ({status})", format_percent(results.roi_percent)),
        ),
        ("People Cost Reduction:", money(results.people_cost_reduction)),
        ("Time Saved Value:", money(results.time_saved_value)),
    ];

    let mut table_rows = String::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        let open = if i % 2 == 0 { SHADED_ROW } else { "<tr>" };
        table_rows.push_str(&format!(
            "        {open}\n            <td><strong>{label}</strong></td>\n            <td>{}</td>\n        </tr>\n",
            encode_text(value)
        ));
    }

    let html = format!(
        r#"
    <h2 style="color: #2E86C1;">{title}</h2>
    <hr>
    <table style="border-collapse: collapse; width: 100%; border: 1px solid #ddd; font-family: Arial, sans-serif; line-height: 1.6;">
{table_rows}    </table>
    <hr>
    <p>Generated on {timestamp}</p>
    <p><strong>Explanation:</strong> {EXPLANATION}</p>
    "#,
        title = encode_text(title),
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
    );
    debug!(bytes = html.len(), "Rendered summary report");

    SummaryReport {
        file_name: REPORT_FILE_NAME,
        mime_type: REPORT_MIME_TYPE,
        html,
    }
}
