#![forbid(unsafe_code)]

//! Core domain model and business logic for the fitlog fitness tracker.
//!
//! This crate provides:
//! - Domain types (activities, health readings, weekly totals)
//! - Calorie estimation
//! - The in-memory activity log and its weekly aggregation
//! - Chart data and the renderer seam (with CSV export)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod calories;
pub mod config;
pub mod logging;
pub mod weekly;
pub mod tracker;
pub mod chart;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use calories::CalorieRates;
pub use config::Config;
pub use tracker::ActivityLog;
pub use chart::{
    render_activity_breakdown, render_metric_history, BarChart, ChartRenderer, CsvChartWriter,
    LineChart, RenderOutcome,
};
