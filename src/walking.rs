//! Sports walking workouts
//!
//! Calories depend on the athlete's height and on the mean speed converted
//! to meters per second.

use crate::error::Result;
use crate::models::{ensure_positive, WorkoutKind, WorkoutRecord};
use crate::training::{Training, MIN_IN_H};

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,

    /// Athlete height in centimeters
    height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        let record = WorkoutRecord::new(action, duration_hours, weight_kg)?;
        Self::from_record(record, height_cm)
    }

    pub fn from_record(record: WorkoutRecord, height_cm: f64) -> Result<Self> {
        Ok(Self {
            record,
            height_cm: ensure_positive("height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::Walking.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let weight = self.record.weight_kg();

        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / (self.height_cm / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * (self.record.duration_hours() * MIN_IN_H))
    }
}
