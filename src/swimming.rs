//! Swimming workouts
//!
//! Distance is derived from the stroke count while mean speed is derived from
//! the pool length and lap count. The two are computed independently and are
//! not expected to agree.

use crate::error::Result;
use crate::models::{ensure_positive, WorkoutKind, WorkoutRecord};
use crate::training::{Training, M_IN_KM};

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,

    /// Pool length in meters
    pool_length_m: f64,

    /// Number of pool lengths swum
    pool_laps: u32,
}

impl Swimming {
    const LEN_STROKE_M: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self> {
        let record = WorkoutRecord::new(action, duration_hours, weight_kg)?;
        Self::from_record(record, pool_length_m, pool_laps)
    }

    pub fn from_record(record: WorkoutRecord, pool_length_m: f64, pool_laps: u32) -> Result<Self> {
        Ok(Self {
            record,
            pool_length_m: ensure_positive("pool length", pool_length_m)?,
            pool_laps,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::Swimming.display_name()
    }

    fn unit_length_m(&self) -> f64 {
        Self::LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.record.duration_hours()
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight_kg()
            * self.record.duration_hours())
    }
}
