//! Running workouts
//!
//! Distance and mean speed come from the step count with the default step
//! length; calories scale linearly with mean speed.

use crate::error::Result;
use crate::models::{WorkoutKind, WorkoutRecord};
use crate::training::{Training, MIN_IN_H, M_IN_KM};

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self::from_record(WorkoutRecord::new(
            action,
            duration_hours,
            weight_kg,
        )?))
    }

    pub fn from_record(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        WorkoutKind::Running.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.record.weight_kg()
            / M_IN_KM
            * self.record.duration_hours()
            * MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_running_metrics() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();

        assert!((running.distance_km() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((running.spent_calories().unwrap() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn test_running_summary() {
        let summary = Running::new(15000, 1.0, 75.0).unwrap().summarize().unwrap();

        assert_eq!(summary.training_type, "Running");
        assert_eq!(
            summary.render(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
        );
    }

    #[test]
    fn test_running_half_hour() {
        let running = Running::new(5000, 0.5, 60.0).unwrap();

        // 3.25 km in half an hour
        assert!((running.mean_speed_kmh() - 6.5).abs() < 1e-9);
        let expected = (18.0 * 6.5 + 1.79) * 60.0 / 1000.0 * 0.5 * 60.0;
        assert!((running.spent_calories().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_running_rejects_zero_duration() {
        assert!(Running::new(15000, 0.0, 75.0).is_err());
    }

    proptest! {
        #[test]
        fn test_running_properties(
            action in 0u32..100_000u32,
            duration in 0.1f64..5.0f64,
            weight in 30.0f64..150.0f64
        ) {
            let running = Running::new(action, duration, weight).unwrap();

            prop_assert!(running.distance_km() >= 0.0);
            prop_assert!(running.spent_calories().unwrap() > 0.0);

            // No hidden state between calls
            let first = running.summarize().unwrap();
            let second = running.summarize().unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
