//! Provides the pure ROI calculation.
use crate::core::inputs::RoiInputs;
use serde::Serialize;
use tracing::debug;

/// Errors raised by [`calculate_roi`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoiError {
    #[error("Cannot calculate ROI: total costs are zero (division by zero)")]
    ZeroTotalCosts,
}

/// The derived metrics of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResults {
    pub total_benefits: f64,
    pub total_costs: f64,
    pub net_benefits: f64,
    pub roi_percent: f64,
    pub people_cost_reduction: f64,
    pub time_saved_value: f64,
}

impl RoiResults {
    /// A positive ROI is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.roi_percent > 0.0
    }
}

/// Sum of the three benefit inputs.
pub fn total_benefits(inputs: &RoiInputs) -> f64 {
    inputs.revenue_increase + inputs.cost_savings + inputs.productivity_gains
}

/// Sum of the six cost inputs.
pub fn total_costs(inputs: &RoiInputs) -> f64 {
    inputs.development_costs
        + inputs.maintenance_costs
        + inputs.training_costs
        + inputs.licensing_costs
        + inputs.cloud_costs
        + inputs.support_ops_costs
}

/// Calculates the ROI metrics for `inputs`.
///
/// This is a pure function: the same inputs always give the same result.
/// Fails with [`RoiError::ZeroTotalCosts`] when the cost fields sum to zero,
/// in which case no partial result is produced.
pub fn calculate_roi(inputs: &RoiInputs) -> Result<RoiResults, RoiError> {
    let total_benefits = total_benefits(inputs);
    let total_costs = total_costs(inputs);
    if total_costs == 0.0 {
        debug!("Total costs sum to zero, refusing to divide");
        return Err(RoiError::ZeroTotalCosts);
    }

    let net_benefits = total_benefits - total_costs;
    let results = RoiResults {
        total_benefits,
        total_costs,
        net_benefits,
        roi_percent: (net_benefits / total_costs) * 100.0,
        people_cost_reduction: inputs.people_removed * inputs.average_salary,
        time_saved_value: inputs.time_saved_hours * inputs.hourly_rate,
    };
    debug!(?results, "Calculated ROI");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> RoiInputs {
        RoiInputs {
            revenue_increase: 100000.0,
            cost_savings: 50000.0,
            productivity_gains: 30000.0,
            development_costs: 40000.0,
            maintenance_costs: 10000.0,
            training_costs: 5000.0,
            licensing_costs: 7000.0,
            cloud_costs: 12000.0,
            support_ops_costs: 8000.0,
            people_removed: 5.0,
            average_salary: 70000.0,
            time_saved_hours: 1000.0,
            hourly_rate: 50.0,
        }
    }

    #[test]
    fn test_scenario_a() {
        let results = calculate_roi(&scenario_a()).unwrap();
        assert_eq!(results.total_benefits, 180000.0);
        assert_eq!(results.total_costs, 82000.0);
        assert_eq!(results.net_benefits, 98000.0);
        assert!((results.roi_percent - 119.5122).abs() < 1e-3);
        assert_eq!(results.people_cost_reduction, 350000.0);
        assert_eq!(results.time_saved_value, 50000.0);
        assert!(results.is_positive());
    }

    #[test]
    fn test_scenario_a_matches_defaults() {
        assert_eq!(scenario_a(), RoiInputs::default());
    }

    #[test]
    fn test_zero_total_costs_is_an_error() {
        let inputs = RoiInputs {
            development_costs: 0.0,
            maintenance_costs: 0.0,
            training_costs: 0.0,
            licensing_costs: 0.0,
            cloud_costs: 0.0,
            support_ops_costs: 0.0,
            ..scenario_a()
        };
        assert_eq!(calculate_roi(&inputs), Err(RoiError::ZeroTotalCosts));
    }

    #[test]
    fn test_costs_cancelling_out_is_an_error() {
        let inputs = RoiInputs {
            development_costs: 10000.0,
            maintenance_costs: -10000.0,
            training_costs: 0.0,
            licensing_costs: 0.0,
            cloud_costs: 0.0,
            support_ops_costs: 0.0,
            ..scenario_a()
        };
        let err = calculate_roi(&inputs).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn test_negative_revenue_still_produces_result() {
        let inputs = RoiInputs {
            revenue_increase: -100000.0,
            ..scenario_a()
        };
        let results = calculate_roi(&inputs).unwrap();
        assert_eq!(results.total_benefits, -20000.0);
        assert_eq!(results.net_benefits, -102000.0);
        assert!(results.roi_percent < 0.0);
        assert!(!results.is_positive());
    }

    #[test]
    fn test_zero_roi_is_not_positive() {
        let inputs = RoiInputs {
            revenue_increase: 2000.0,
            ..scenario_a()
        };
        let results = calculate_roi(&inputs).unwrap();
        assert_eq!(results.net_benefits, 0.0);
        assert!(!results.is_positive());
    }

    #[test]
    fn test_products_and_determinism() {
        let inputs = RoiInputs {
            people_removed: 3.0,
            average_salary: 55000.0,
            time_saved_hours: 12.5,
            hourly_rate: 80.0,
            ..scenario_a()
        };
        let first = calculate_roi(&inputs).unwrap();
        let second = calculate_roi(&inputs).unwrap();
        assert_eq!(first.people_cost_reduction, 165000.0);
        assert_eq!(first.time_saved_value, 1000.0);
        assert_eq!(first, second);
    }
}
