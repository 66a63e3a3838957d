//! The in-memory activity log.
//!
//! `ActivityLog` owns every logged activity and health reading for the life
//! of the process. Activities are append-only and keep insertion order;
//! health readings are partitioned by metric name, each name owning its own
//! ordered sequence.

use crate::weekly::{average_duration, summarize_by_week};
use crate::{
    ActivityRecord, ActivityTypeTotal, CalorieRates, HealthReading, WeeklyReport, WeeklyTotals,
};
use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Append-only log of activities and health metrics
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    rates: CalorieRates,
    activities: Vec<ActivityRecord>,
    health_metrics: HashMap<String, Vec<HealthReading>>,
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl ActivityLog {
    /// Create an empty log using the default calorie rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log using a custom calorie rate table
    pub fn with_rates(rates: CalorieRates) -> Self {
        Self {
            rates,
            ..Self::default()
        }
    }

    /// Log an activity performed today
    ///
    /// Durations and distances are stored as given; negative values are not
    /// rejected.
    pub fn log_activity(
        &mut self,
        activity_type: &str,
        duration_min: f64,
        distance_km: f64,
    ) -> &ActivityRecord {
        self.log_activity_on(today(), activity_type, duration_min, distance_km)
    }

    /// Log an activity on an explicit date
    pub fn log_activity_on(
        &mut self,
        date: NaiveDate,
        activity_type: &str,
        duration_min: f64,
        distance_km: f64,
    ) -> &ActivityRecord {
        let calories_burned = self.rates.calories_for(activity_type, duration_min);

        tracing::info!(
            "Activity logged: {} for {} minutes ({} calories, {} km) on {}",
            activity_type,
            duration_min,
            calories_burned,
            distance_km,
            date
        );

        let index = self.activities.len();
        self.activities.push(ActivityRecord {
            date,
            activity_type: activity_type.to_string(),
            duration_min,
            calories_burned,
            distance_km,
        });
        &self.activities[index]
    }

    /// Record today's reading for a health metric
    pub fn log_health_metric(&mut self, metric_name: &str, value: f64) -> &HealthReading {
        self.log_health_metric_on(today(), metric_name, value)
    }

    /// Record a health metric reading on an explicit date
    ///
    /// The metric's sequence is created on first use.
    pub fn log_health_metric_on(
        &mut self,
        date: NaiveDate,
        metric_name: &str,
        value: f64,
    ) -> &HealthReading {
        let readings = self
            .health_metrics
            .entry(metric_name.to_string())
            .or_insert_with(|| {
                tracing::debug!("Tracking new health metric '{}'", metric_name);
                Vec::new()
            });

        readings.push(HealthReading { date, value });
        tracing::info!("Health metric '{}' logged: {} on {}", metric_name, value, date);

        let index = readings.len() - 1;
        &readings[index]
    }

    /// Sum duration, calories and distance per Sunday-ending week
    ///
    /// Also reports the all-time mean duration. With nothing logged, returns
    /// an empty vector and reports that there is no data.
    pub fn compute_weekly_summary(&self) -> Vec<WeeklyTotals> {
        self.weekly_report().weeks
    }

    /// Mean activity duration across every logged activity
    pub fn average_duration_min(&self) -> Option<f64> {
        average_duration(&self.activities)
    }

    /// Weekly buckets together with the all-time mean duration
    pub fn weekly_report(&self) -> WeeklyReport {
        let weeks = summarize_by_week(&self.activities);
        let average_duration_min = self.average_duration_min();

        match average_duration_min {
            Some(avg) => tracing::info!(
                "Weekly summary: {} weeks, average duration {:.2} minutes across {} activities",
                weeks.len(),
                avg,
                self.activities.len()
            ),
            None => tracing::info!("Weekly summary: no activities logged"),
        }

        WeeklyReport {
            weeks,
            average_duration_min,
        }
    }

    /// Every logged activity, in insertion order
    pub fn get_activity_data(&self) -> &[ActivityRecord] {
        &self.activities
    }

    /// Readings for one metric, or an empty slice if it was never logged
    pub fn get_health_data(&self, metric_name: &str) -> &[HealthReading] {
        self.health_metrics
            .get(metric_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Names of all metrics with at least one reading, sorted
    pub fn metric_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.health_metrics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total duration per activity type, sorted by activity type
    pub fn duration_by_activity_type(&self) -> Vec<ActivityTypeTotal> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for activity in &self.activities {
            *totals.entry(activity.activity_type.as_str()).or_insert(0.0) += activity.duration_min;
        }

        totals
            .into_iter()
            .map(|(activity_type, total_duration_min)| ActivityTypeTotal {
                activity_type: activity_type.to_string(),
                total_duration_min,
            })
            .collect()
    }
}
