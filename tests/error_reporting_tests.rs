//! Integration tests for error classification and reporting
//!
//! Tests how malformed packages surface through the public API

use workoutrs::error::{ErrorSeverity, ImportError, ValidationError};
use workoutrs::import::ImportManager;
use workoutrs::{create_workout, run_batch, Package, WorkoutError};

#[test]
fn test_unknown_kind_is_recoverable_warning() {
    let err = create_workout("SM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .err()
        .unwrap();

    assert!(err.is_recoverable());
    assert_eq!(err.severity(), ErrorSeverity::Warning);
    assert_eq!(err.to_string(), "No such workout kind: SM");
    assert!(err.user_message().contains("RUN, WLK, SWM"));
}

#[test]
fn test_argument_count_is_contract_violation() {
    let err = create_workout("SWM", &[720.0, 1.0, 80.0]).err().unwrap();

    assert!(!err.is_recoverable());
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert_eq!(
        err.to_string(),
        "Wrong argument count for SWM: expected 5, got 3"
    );
}

#[test]
fn test_domain_errors_name_the_field() {
    let err = create_workout("RUN", &[15000.0, 0.0, 75.0]).err().unwrap();
    assert!(matches!(
        err,
        WorkoutError::Validation(ValidationError::NotPositive { field: "duration", .. })
    ));

    let err = create_workout("WLK", &[9000.0, 1.0, 75.0, -180.0]).err().unwrap();
    assert!(err.to_string().contains("height must be a positive number"));
}

#[test]
fn test_batch_keeps_going_after_each_kind_of_error() {
    let packages = vec![
        Package::new("SM", vec![1.0, 1.0, 1.0]),
        Package::new("RUN", vec![15000.0]),
        Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];

    let report = run_batch(&packages, false);
    assert_eq!(report.succeeded(), 1);

    let recoverable: Vec<bool> = report.failures().map(|(_, e)| e.is_recoverable()).collect();
    assert_eq!(recoverable, vec![true, false, false]);
}

#[test]
fn test_unsupported_package_file() {
    let err = ImportManager::new()
        .import_file(std::path::Path::new("session.fit"))
        .unwrap_err();

    assert!(matches!(
        err,
        WorkoutError::Import(ImportError::UnsupportedFormat { .. })
    ));
    assert!(err.user_message().contains(".csv, .json or .toml"));
}
