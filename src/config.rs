//! Application configuration
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "json"
//!
//! [output]
//! format = "table"
//! fail_fast = false
//!
//! [[packages]]
//! code = "RUN"
//! data = [15000, 1, 75]
//! ```
//!
//! Every section is optional. Without packages the default session is used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::dispatch::{default_packages, Package};
use crate::error::{Result, WorkoutError};
use crate::export::OutputFormat;
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LogConfig,

    /// Output settings
    pub output: OutputSettings,

    /// Packages to process when no input file is given
    pub packages: Vec<Package>,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Rendering of the batch results
    pub format: OutputFormat,

    /// Stop at the first failing package
    pub fail_fast: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WorkoutError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::load_from_string(&content)?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn load_from_string(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| WorkoutError::Configuration(format!("Invalid TOML syntax: {}", e)))
    }

    /// Default config file location (`<config dir>/workoutrs/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("workoutrs").join("config.toml"))
    }

    /// Load from `path` when given, else from the default location if present,
    /// else fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::load_from_file(default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Configured packages, or the default session when none are listed
    pub fn packages_or_default(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            default_packages()
        } else {
            self.packages.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, LogLevel};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::load_from_string("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.fail_fast);
        assert_eq!(config.packages_or_default(), default_packages());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
            [logging]
            level = "debug"
            format = "json"

            [output]
            format = "table"
            fail_fast = true

            [[packages]]
            code = "RUN"
            data = [15000, 1, 75]
        "#;

        let config = AppConfig::load_from_string(content).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.rotate_daily);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.fail_fast);
        assert_eq!(
            config.packages_or_default(),
            vec![Package::new("RUN", vec![15000.0, 1.0, 75.0])]
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = AppConfig::load_from_string("[output]\nformat = \"pdf\"\n").unwrap_err();
        assert!(matches!(err, WorkoutError::Configuration(_)));

        assert!(AppConfig::load_from_string("not = [valid").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
