//! Core ROI calculation and reporting

pub mod calculator;
pub mod config;
pub mod format;
pub mod inputs;
pub mod log;
pub mod report;
pub mod series;

// Re-export main types for cleaner imports
pub use calculator::{RoiError, RoiResults, calculate_roi};
pub use inputs::{InputOverrides, RoiInputs};
pub use series::{ChartKind, ChartSeries, build_chart_series};
