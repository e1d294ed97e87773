//! Unified error hierarchy for workoutrs
//!
//! Separates recoverable input problems (an unknown workout code coming from
//! outside) from contract violations (wrong arity, invalid numeric domain,
//! calling the base calorie formula).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all workoutrs operations
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// The dispatch code does not name any workout kind
    #[error("No such workout kind: {code}")]
    UnknownKind { code: String },

    /// Positional data does not match the arity of the workout kind
    #[error("Wrong argument count for {code}: expected {expected}, got {actual}")]
    ArgumentCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Input value outside of its numeric domain
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Metric calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Package file loading errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Numeric domain violations detected while building a workout record
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value must be strictly positive and finite
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Value must be a non-negative whole number
    #[error("{field} must be a non-negative whole number, got {value}")]
    NotACount { field: &'static str, value: f64 },
}

/// Calculation errors
#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    /// The calorie formula was requested from a type that has none
    #[error("Calorie formula not implemented for base type {training_type}")]
    NotImplemented { training_type: String },
}

/// Package file loading errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension not recognized
    #[error("Unsupported package format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Format-specific parsing error
    #[error("Parse error in {format} at {location}: {reason}")]
    ParseError {
        format: &'static str,
        location: String,
        reason: String,
    },
}

/// Result type alias for workoutrs operations
pub type Result<T> = std::result::Result<T, WorkoutError>;

impl WorkoutError {
    /// Whether the caller can skip the offending record and carry on.
    ///
    /// Only an unknown workout code reflects malformed external input; the
    /// other variants are contract violations of the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WorkoutError::UnknownKind { .. })
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WorkoutError::UnknownKind { .. } => ErrorSeverity::Warning,
            WorkoutError::ArgumentCount { .. } => ErrorSeverity::Error,
            WorkoutError::Validation(_) => ErrorSeverity::Error,
            WorkoutError::Calculation(CalculationError::NotImplemented { .. }) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WorkoutError::UnknownKind { code } => {
                format!(
                    "Unknown workout code '{}'. Expected one of: RUN, WLK, SWM.",
                    code
                )
            }
            WorkoutError::ArgumentCount {
                code,
                expected,
                actual,
            } => {
                format!(
                    "Workout '{}' takes {} values but {} were given.",
                    code, expected, actual
                )
            }
            WorkoutError::Import(ImportError::UnsupportedFormat { path }) => {
                format!(
                    "Cannot read packages from {}: use a .csv, .json or .toml file.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Programming error that must never be reached through the dispatcher
    Critical,
    /// Error that aborts the current record
    Error,
    /// Bad input that the caller may skip
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
