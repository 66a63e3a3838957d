//! Calorie estimation for logged activities.
//!
//! Calories are a linear function of duration: each activity type has a
//! per-minute rate, and any type without an entry falls back to the default
//! rate. Matching is exact and case-sensitive ("running" is not "Running").
//! Configured rates are layered over the built-in table, so naming one
//! activity leaves the others at their built-in rates.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Per-activity calorie burn rates, in calories per minute
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieRates {
    #[serde(default = "default_rate")]
    pub default_rate: f64,

    #[serde(default = "default_rates", deserialize_with = "merge_over_default_rates")]
    pub rates: BTreeMap<String, f64>,
}

impl Default for CalorieRates {
    fn default() -> Self {
        Self {
            default_rate: default_rate(),
            rates: default_rates(),
        }
    }
}

fn default_rate() -> f64 {
    5.0
}

fn default_rates() -> BTreeMap<String, f64> {
    BTreeMap::from([("Running".to_string(), 10.0), ("Cycling".to_string(), 7.0)])
}

fn merge_over_default_rates<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, f64>::deserialize(deserializer)?;
    let mut rates = default_rates();
    rates.extend(overrides);
    Ok(rates)
}

impl CalorieRates {
    /// Rate for an activity type, falling back to the default rate
    pub fn rate_for(&self, activity_type: &str) -> f64 {
        self.rates
            .get(activity_type)
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Estimated calories burned for `duration_min` minutes of `activity_type`
    pub fn calories_for(&self, activity_type: &str, duration_min: f64) -> f64 {
        duration_min * self.rate_for(activity_type)
    }
}
