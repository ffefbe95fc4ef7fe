//! Chart-ready series derived from a calculation.
//!
//! Each series maps a category label to a value and carries a hint for how a
//! display collaborator should chart it. Nothing here draws anything.
use crate::core::calculator::{self, RoiResults};
use crate::core::inputs::RoiInputs;
use serde::Serialize;
use std::fmt::Display;

const TREND_PERIODS: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChartKind::Bar => "bar",
                ChartKind::Line => "line",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn new<L: Into<String>>(
        title: &str,
        kind: ChartKind,
        points: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        ChartSeries {
            title: title.to_string(),
            kind,
            points: points
                .into_iter()
                .map(|(label, value)| ChartPoint {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Builds the seven chart series for a successful calculation.
pub fn build_chart_series(inputs: &RoiInputs, results: &RoiResults) -> Vec<ChartSeries> {
    vec![
        ChartSeries::new(
            "Revenue Components",
            ChartKind::Bar,
            [
                ("Revenue Increase", inputs.revenue_increase),
                ("Cost Savings", inputs.cost_savings),
                ("Productivity Gains", inputs.productivity_gains),
            ],
        ),
        ChartSeries::new(
            "Cost Breakdown",
            ChartKind::Bar,
            [
                ("Development", inputs.development_costs),
                ("Maintenance", inputs.maintenance_costs),
                ("Training", inputs.training_costs),
                ("Licensing", inputs.licensing_costs),
                ("Cloud", inputs.cloud_costs),
                ("Support & Ops", inputs.support_ops_costs),
            ],
        ),
        ChartSeries::new(
            "Total Benefits vs Total Costs",
            ChartKind::Bar,
            [
                ("Total Benefits", results.total_benefits),
                ("Total Costs", results.total_costs),
            ],
        ),
        ChartSeries::new(
            "People Cost Reduction vs Time Saved Value",
            ChartKind::Bar,
            [
                ("People Cost Reduction", results.people_cost_reduction),
                ("Time Saved Value", results.time_saved_value),
            ],
        ),
        ChartSeries::new("ROI Trend Over 3 Years", ChartKind::Line, roi_trend(inputs)),
        ChartSeries::new(
            "Cumulative Savings Over Time",
            ChartKind::Line,
            cumulative_savings(inputs),
        ),
        ChartSeries::new(
            "Net Benefits Over Time",
            ChartKind::Line,
            net_benefits_over_time(results),
        ),
    ]
}

/// ROI trend: base ROI plus ten points per period.
///
/// The base is recomputed from the inputs rather than taken from
/// `RoiResults::roi_percent`.
fn roi_trend(inputs: &RoiInputs) -> Vec<(String, f64)> {
    let benefits = calculator::total_benefits(inputs);
    let costs = calculator::total_costs(inputs);
    let base = ((benefits - costs) / costs) * 100.0;
    TREND_PERIODS
        .iter()
        .map(|&i| (i.to_string(), base + f64::from(i) * 10.0))
        .collect()
}

fn cumulative_savings(inputs: &RoiInputs) -> Vec<(String, f64)> {
    let yearly = [
        inputs.cost_savings,
        inputs.productivity_gains,
        inputs.people_removed * inputs.average_salary,
    ];
    yearly
        .iter()
        .scan(0.0, |running, v| {
            *running += v;
            Some(*running)
        })
        .enumerate()
        .map(|(i, total)| (format!("Year {}", i + 1), total))
        .collect()
}

fn net_benefits_over_time(results: &RoiResults) -> Vec<(String, f64)> {
    TREND_PERIODS
        .iter()
        .map(|&i| {
            (
                i.to_string(),
                results.net_benefits * (1.0 + f64::from(i) * 0.05),
            )
        })
        .collect()
}
