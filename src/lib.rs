// Library interface for workoutrs modules
// This allows integration tests to access the core functionality

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use batch::{run_batch, BatchReport, PackageOutcome};
pub use config::AppConfig;
pub use dispatch::{create_workout, default_packages, Package};
pub use error::{Result, WorkoutError};
pub use export::{render_report, OutputFormat};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Summary, WorkoutKind, WorkoutRecord};
pub use running::Running;
pub use swimming::Swimming;
pub use training::Training;
pub use walking::SportsWalking;
