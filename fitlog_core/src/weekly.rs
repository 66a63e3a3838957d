//! Weekly bucketing of logged activities.
//!
//! Weeks run Monday through Sunday and are labelled by the Sunday that closes
//! them, so a Sunday activity belongs to the week ending that same day.
//! Only weeks containing at least one activity produce a bucket.

use crate::{ActivityRecord, WeeklyTotals};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// The Sunday closing the week that contains `date`
///
/// Saturates at `NaiveDate::MAX` for the last representable week.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_until_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
    date.checked_add_signed(Duration::days(days_until_sunday))
        .unwrap_or(NaiveDate::MAX)
}

/// The Monday opening the week that contains `date`
///
/// Saturates at `NaiveDate::MIN` for the first representable week.
pub fn week_starting(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(days_since_monday))
        .unwrap_or(NaiveDate::MIN)
}

/// Group activities by week and sum duration, calories and distance
///
/// Returns buckets in chronological order. An empty input yields an empty
/// vector.
pub fn summarize_by_week(activities: &[ActivityRecord]) -> Vec<WeeklyTotals> {
    let mut buckets: BTreeMap<NaiveDate, WeeklyTotals> = BTreeMap::new();

    for activity in activities {
        let week_end = week_ending(activity.date);
        let bucket = buckets.entry(week_end).or_insert_with(|| WeeklyTotals {
            week_start: week_starting(activity.date),
            week_end,
            activity_count: 0,
            total_duration_min: 0.0,
            total_calories_burned: 0.0,
            total_distance_km: 0.0,
        });

        bucket.activity_count += 1;
        bucket.total_duration_min += activity.duration_min;
        bucket.total_calories_burned += activity.calories_burned;
        bucket.total_distance_km += activity.distance_km;
    }

    tracing::debug!(
        "Bucketed {} activities into {} weeks",
        activities.len(),
        buckets.len()
    );

    buckets.into_values().collect()
}

/// Arithmetic mean of `duration_min` across all activities
pub fn average_duration(activities: &[ActivityRecord]) -> Option<f64> {
    if activities.is_empty() {
        return None;
    }

    let total: f64 = activities.iter().map(|a| a.duration_min).sum();
    Some(total / activities.len() as f64)
}
