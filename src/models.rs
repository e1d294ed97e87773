use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError, WorkoutError};

/// Workout kinds known to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::Walking,
        WorkoutKind::Swimming,
    ];

    /// Sensor package code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Number of positional values a sensor package carries for this kind
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Label used in rendered summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    /// Codes are matched exactly: `"run"` is not `"RUN"`.
    fn from_str(code: &str) -> Result<Self> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownKind {
                code: code.to_string(),
            })
    }
}

/// Validated scalar inputs shared by every workout kind
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    /// Steps or strokes counted by the sensor
    action: u32,

    /// Duration of the workout in hours
    duration_hours: f64,

    /// Athlete weight in kilograms
    weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration_hours: ensure_positive("duration", duration_hours)?,
            weight_kg: ensure_positive("weight", weight_kg)?,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Reject zero, negative, NaN and infinite values.
pub(crate) fn ensure_positive(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

/// Convert a positional sensor value into a count.
pub(crate) fn to_count(
    field: &'static str,
    value: f64,
) -> std::result::Result<u32, ValidationError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ValidationError::NotACount { field, value })
    }
}

/// Derived metrics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Display name of the workout kind
    pub training_type: String,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Mean speed over the whole workout in km/h
    pub mean_speed_kmh: f64,

    /// Estimated energy expenditure in kcal
    pub calories_kcal: f64,
}

impl Summary {
    /// Single-line report with every metric fixed to three decimals
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
