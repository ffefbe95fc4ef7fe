use super::ui;
use crate::core::format::{format_currency, format_percent};
use crate::core::{ChartSeries, RoiInputs, RoiResults, build_chart_series, calculate_roi};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Everything one calculation hands to the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub inputs: RoiInputs,
    pub results: RoiResults,
    pub charts: Vec<ChartSeries>,
}

impl Calculation {
    /// Runs the calculator and derives the chart series. Nothing is derived
    /// when the calculator fails.
    pub fn compute(inputs: &RoiInputs) -> Result<Self> {
        let results = calculate_roi(inputs)?;
        let charts = build_chart_series(inputs, &results);
        Ok(Calculation {
            inputs: *inputs,
            results,
            charts,
        })
    }

    pub fn display_as_table(&self, currency_symbol: &str) -> String {
        let money = |v: f64| ui::value_cell(format_currency(v, currency_symbol));
        let r = &self.results;

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Total Benefits"),
            ui::header_cell("Total Costs"),
            ui::header_cell("Net Benefits"),
            ui::header_cell("ROI (%)"),
            ui::header_cell("People Cost Reduction"),
            ui::header_cell("Time Saved Value"),
        ]);
        table.add_row(vec![
            money(r.total_benefits),
            money(r.total_costs),
            ui::signed_cell(r.net_benefits, format_currency(r.net_benefits, currency_symbol)),
            ui::signed_cell(r.roi_percent, format_percent(r.roi_percent)),
            money(r.people_cost_reduction),
            money(r.time_saved_value),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("ROI Calculator", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{} {}",
            ui::style_text("ROI:", ui::StyleType::TotalLabel),
            ui::style_text(&format_percent(r.roi_percent), roi_style(r))
        ));
        output
    }

    pub fn display_inputs(&self, currency_symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Input"), ui::header_cell("Value")]);
        for (label, value) in self.inputs.labeled() {
            let text = if label.ends_with("($)") {
                format_currency(value, currency_symbol)
            } else {
                format!("{value}")
            };
            table.add_row(vec![comfy_table::Cell::new(label), ui::value_cell(text)]);
        }
        table.to_string()
    }

    pub fn display_charts(&self) -> String {
        self.charts
            .iter()
            .map(display_series)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn roi_style(results: &RoiResults) -> ui::StyleType {
    if results.is_positive() {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    }
}

fn display_series(series: &ChartSeries) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Category"), ui::header_cell("Value")]);
    for point in &series.points {
        table.add_row(vec![
            comfy_table::Cell::new(&point.label),
            ui::value_cell(format!("{:.2}", point.value)),
        ]);
    }
    format!(
        "{} {}\n{}",
        ui::style_text(&series.title, ui::StyleType::TotalLabel),
        ui::style_text(&format!("({})", series.kind), ui::StyleType::Subtle),
        table
    )
}

pub fn run(inputs: &RoiInputs, currency_symbol: &str, format: OutputFormat) -> Result<()> {
    info!("Calculating ROI...");
    let calculation = Calculation::compute(inputs)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&calculation)?);
        }
        OutputFormat::Table => {
            println!("{}", calculation.display_inputs(currency_symbol));
            ui::print_separator();
            println!("{}", calculation.display_as_table(currency_symbol));
            ui::print_separator();
            println!("{}", calculation.display_charts());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoiError;

    #[test]
    fn test_compute_with_defaults() {
        let calculation = Calculation::compute(&RoiInputs::default()).unwrap();
        assert_eq!(calculation.results.total_costs, 82000.0);
        assert_eq!(calculation.charts.len(), 7);
    }

    #[test]
    fn test_compute_zero_costs_yields_no_output() {
        let inputs = RoiInputs {
            development_costs: 0.0,
            maintenance_costs: 0.0,
            training_costs: 0.0,
            licensing_costs: 0.0,
            cloud_costs: 0.0,
            support_ops_costs: 0.0,
            ..Default::default()
        };
        let err = Calculation::compute(&inputs).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RoiError>(),
            Some(&RoiError::ZeroTotalCosts)
        );
    }

    #[test]
    fn test_summary_table_formatting() {
        console::set_colors_enabled(false);
        let calculation = Calculation::compute(&RoiInputs::default()).unwrap();
        let table = calculation.display_as_table("$");
        assert!(table.contains("$180,000.00"));
        assert!(table.contains("$82,000.00"));
        assert!(table.contains("$98,000.00"));
        assert!(table.contains("119.51%"));
        assert!(table.contains("$350,000.00"));
        assert!(table.contains("$50,000.00"));
    }

    #[test]
    fn test_inputs_table_formats_counts_plainly() {
        let calculation = Calculation::compute(&RoiInputs::default()).unwrap();
        let table = calculation.display_inputs("$");
        assert!(table.contains("Number of People Removed"));
        assert!(table.contains("$100,000.00"));
        assert!(table.contains("1000"));
    }

    #[test]
    fn test_charts_render_every_series() {
        console::set_colors_enabled(false);
        let calculation = Calculation::compute(&RoiInputs::default()).unwrap();
        let charts = calculation.display_charts();
        for series in &calculation.charts {
            assert!(charts.contains(&series.title));
        }
        assert!(charts.contains("Year 3"));
        assert!(charts.contains("430000.00"));
    }

    #[test]
    fn test_json_output_shape() {
        let calculation = Calculation::compute(&RoiInputs::default()).unwrap();
        let json = serde_json::to_value(&calculation).unwrap();
        assert_eq!(json["results"]["net_benefits"], 98000.0);
        assert_eq!(json["inputs"]["hourly_rate"], 50.0);
        assert_eq!(json["charts"].as_array().map(|a| a.len()), Some(7));
    }
}
