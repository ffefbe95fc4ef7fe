//! The input record fed to the ROI calculator.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Financial inputs for a single ROI calculation.
///
/// Every field is a plain real number. Negative values are accepted and
/// produce mathematically valid results.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoiInputs {
    pub revenue_increase: f64,
    pub cost_savings: f64,
    pub productivity_gains: f64,
    pub development_costs: f64,
    pub maintenance_costs: f64,
    pub training_costs: f64,
    pub licensing_costs: f64,
    pub cloud_costs: f64,
    pub support_ops_costs: f64,
    /// Headcount removed. Semantically a non-negative integer.
    pub people_removed: f64,
    pub average_salary: f64,
    pub time_saved_hours: f64,
    pub hourly_rate: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        RoiInputs {
            revenue_increase: 100_000.0,
            cost_savings: 50_000.0,
            productivity_gains: 30_000.0,
            development_costs: 40_000.0,
            maintenance_costs: 10_000.0,
            training_costs: 5_000.0,
            licensing_costs: 7_000.0,
            cloud_costs: 12_000.0,
            support_ops_costs: 8_000.0,
            people_removed: 5.0,
            average_salary: 70_000.0,
            time_saved_hours: 1_000.0,
            hourly_rate: 50.0,
        }
    }
}

impl RoiInputs {
    /// Returns each input paired with its form label, in form order.
    pub fn labeled(&self) -> [(&'static str, f64); 13] {
        [
            ("Revenue Increase ($)", self.revenue_increase),
            ("Cost Savings ($)", self.cost_savings),
            ("Productivity Gains ($)", self.productivity_gains),
            ("Development Costs ($)", self.development_costs),
            ("Maintenance Costs ($)", self.maintenance_costs),
            ("Training Costs ($)", self.training_costs),
            ("Licensing Costs ($)", self.licensing_costs),
            ("Cloud Costs ($)", self.cloud_costs),
            ("Support & Ops Costs ($)", self.support_ops_costs),
            ("Number of People Removed", self.people_removed),
            ("Average Salary ($)", self.average_salary),
            ("Time Saved (hours)", self.time_saved_hours),
            ("Hourly Rate ($)", self.hourly_rate),
        ]
    }

    /// Applies every override that was supplied, leaving the rest untouched.
    pub fn with_overrides(mut self, overrides: &InputOverrides) -> Self {
        let pairs = [
            (&mut self.revenue_increase, overrides.revenue_increase),
            (&mut self.cost_savings, overrides.cost_savings),
            (&mut self.productivity_gains, overrides.productivity_gains),
            (&mut self.development_costs, overrides.development_costs),
            (&mut self.maintenance_costs, overrides.maintenance_costs),
            (&mut self.training_costs, overrides.training_costs),
            (&mut self.licensing_costs, overrides.licensing_costs),
            (&mut self.cloud_costs, overrides.cloud_costs),
            (&mut self.support_ops_costs, overrides.support_ops_costs),
            (&mut self.people_removed, overrides.people_removed),
            (&mut self.average_salary, overrides.average_salary),
            (&mut self.time_saved_hours, overrides.time_saved_hours),
            (&mut self.hourly_rate, overrides.hourly_rate),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                *field = v;
            }
        }
        self
    }
}

/// Per-field overrides taken from the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct InputOverrides {
    /// Revenue increase ($)
    #[arg(long, allow_negative_numbers = true)]
    pub revenue_increase: Option<f64>,
    /// Cost savings ($)
    #[arg(long, allow_negative_numbers = true)]
    pub cost_savings: Option<f64>,
    /// Productivity gains ($)
    #[arg(long, allow_negative_numbers = true)]
    pub productivity_gains: Option<f64>,
    /// Development costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub development_costs: Option<f64>,
    /// Maintenance costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub maintenance_costs: Option<f64>,
    /// Training costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub training_costs: Option<f64>,
    /// Licensing costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub licensing_costs: Option<f64>,
    /// Cloud costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub cloud_costs: Option<f64>,
    /// Support & ops costs ($)
    #[arg(long, allow_negative_numbers = true)]
    pub support_ops_costs: Option<f64>,
    /// Number of people removed
    #[arg(long, allow_negative_numbers = true)]
    pub people_removed: Option<f64>,
    /// Average salary ($)
    #[arg(long, allow_negative_numbers = true)]
    pub average_salary: Option<f64>,
    /// Time saved (hours)
    #[arg(long, allow_negative_numbers = true)]
    pub time_saved_hours: Option<f64>,
    /// Hourly rate ($)
    #[arg(long, allow_negative_numbers = true)]
    pub hourly_rate: Option<f64>,
}
