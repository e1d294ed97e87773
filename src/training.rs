//! Base computation contract shared by every workout kind
//!
//! A workout exposes three metrics: distance, mean speed and calories.
//! Distance and speed have default formulas driven by the per-unit length of
//! the kind; calories have no sensible default and must be supplied by each
//! kind. [`Training::summarize`] collects the metrics into a [`Summary`].

use std::fmt::Debug;
use tracing::debug;

use crate::error::{CalculationError, Result};
use crate::models::{Summary, WorkoutRecord};

/// Length of a single step in meters
pub const LEN_STEP_M: f64 = 0.65;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Metrics computable from a workout record
pub trait Training: Debug {
    /// Validated inputs for this workout
    fn record(&self) -> &WorkoutRecord;

    /// Label used in the summary
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action unit, in meters
    fn unit_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action()) * self.unit_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_hours()
    }

    /// Calories burned in kcal.
    ///
    /// Kinds without their own formula fail here instead of returning a value.
    fn spent_calories(&self) -> Result<f64> {
        Err(CalculationError::NotImplemented {
            training_type: self.training_type().to_string(),
        }
        .into())
    }

    /// Compute distance, speed and calories, in that order.
    fn summarize(&self) -> Result<Summary> {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories_kcal = self.spent_calories()?;

        debug!(
            training_type = self.training_type(),
            distance_km,
            mean_speed_kmh,
            calories_kcal,
            "Workout summarized"
        );

        Ok(Summary {
            training_type: self.training_type().to_string(),
            duration_hours: self.record().duration_hours(),
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        })
    }
}
