//! Core domain types for the fitness log.
//!
//! This module defines the records held by the activity log and the
//! aggregates derived from them:
//! - Logged activities and health metric readings
//! - Weekly totals and the weekly report
//! - Per-activity-type totals used for charting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Logged Records
// ============================================================================

/// A single logged exercise activity
///
/// Calories are fixed when the record is created and never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub activity_type: String,
    pub duration_min: f64,
    pub calories_burned: f64,
    pub distance_km: f64,
}

/// A single reading of a named health metric (e.g. "Weight_KG")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthReading {
    pub date: NaiveDate,
    pub value: f64,
}

// ============================================================================
// Aggregates
// ============================================================================

/// Summed activity totals for one calendar week (Monday through Sunday)
///
/// Weeks are labelled by `week_end`, the Sunday closing the bin.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTotals {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub activity_count: usize,
    pub total_duration_min: f64,
    pub total_calories_burned: f64,
    pub total_distance_km: f64,
}

/// Weekly buckets plus the all-time mean activity duration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyReport {
    pub weeks: Vec<WeeklyTotals>,
    /// `None` when no activities have been logged
    pub average_duration_min: Option<f64>,
}

impl WeeklyReport {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// Total duration logged for one activity type
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityTypeTotal {
    pub activity_type: String,
    pub total_duration_min: f64,
}
