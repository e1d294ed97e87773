//! Build workouts from sensor packages
//!
//! A package is a workout code plus the sensor values in the positional
//! order of that workout kind:
//!
//! | code  | values                                              |
//! |-------|-----------------------------------------------------|
//! | `RUN` | action, duration, weight                            |
//! | `WLK` | action, duration, weight, height                    |
//! | `SWM` | action, duration, weight, pool length, pool laps    |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkoutError};
use crate::models::{to_count, WorkoutKind, WorkoutRecord};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Training;
use crate::walking::SportsWalking;

/// Raw sensor package as received from a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Build the workout described by this package
    pub fn read(&self) -> Result<Box<dyn Training>> {
        create_workout(&self.code, &self.data)
    }
}

/// The three packages produced by the reference device session
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Create the workout matching `code` from positional sensor values.
///
/// Returns [`WorkoutError::UnknownKind`] for an unrecognized code and
/// [`WorkoutError::ArgumentCount`] when `data` does not have the arity of
/// the kind. No workout is constructed in either case.
pub fn create_workout(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let kind: WorkoutKind = code.parse()?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            code: code.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let record = WorkoutRecord::new(to_count("action", data[0])?, data[1], data[2])?;

    let workout: Box<dyn Training> = match kind {
        WorkoutKind::Running => Box::new(Running::from_record(record)),
        WorkoutKind::Walking => Box::new(SportsWalking::from_record(record, data[3])?),
        WorkoutKind::Swimming => Box::new(Swimming::from_record(
            record,
            data[3],
            to_count("pool laps", data[4])?,
        )?),
    };

    debug!(code, kind = %kind, "Workout created");
    Ok(workout)
}
