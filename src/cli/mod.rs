//! Command implementations and terminal presentation

pub mod calculate;
pub mod report;
pub mod setup;
pub mod ui;
