//! Structured logging for workoutrs
//!
//! Events go to stderr so that stdout carries only the rendered summaries.
//! A JSON copy can additionally be written to a file, rolled daily or
//! appended to.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging section of the application config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,

    /// Extra JSON log file
    pub file: Option<PathBuf>,

    /// Start a new file every day instead of appending to `file`
    pub rotate_daily: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            file: None,
            rotate_daily: true,
        }
    }
}

impl LogConfig {
    /// Apply command-line choices on top of the file settings.
    ///
    /// An explicit level replaces the configured one; `-v` flags then raise
    /// whichever level is in effect.
    pub fn override_with(
        &mut self,
        level: Option<LogLevel>,
        format: Option<LogFormat>,
        verbosity: u8,
    ) {
        if let Some(level) = level {
            self.level = level;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self.level = self.level.raised_by(verbosity);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ORDER: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// `EnvFilter` directive for this level
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Each step of `verbosity` is one level louder, capped at trace
    pub fn raised_by(self, verbosity: u8) -> LogLevel {
        let current = Self::ORDER.iter().position(|l| *l == self).unwrap_or(0);
        Self::ORDER[(current + verbosity as usize).min(Self::ORDER.len() - 1)]
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(LogLevel::Warn),
            other => Self::ORDER
                .into_iter()
                .find(|level| level.as_directive() == other)
                .ok_or_else(|| format!("Invalid log level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    Json,
    /// One line per event
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// `RUST_LOG` wins over the configured level
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("workoutrs={}", level.as_directive())))
}

fn stderr_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer().with_writer(io::stderr).with_target(true);
    match format {
        LogFormat::Pretty => layer.pretty().with_line_number(true).boxed(),
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn file_writer(path: &Path, rotate_daily: bool) -> anyhow::Result<BoxMakeWriter> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    if rotate_daily {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("workoutrs.log");
        Ok(BoxMakeWriter::new(tracing_appender::rolling::daily(dir, name)))
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        Ok(BoxMakeWriter::new(Mutex::new(file)))
    }
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let file_layer = match &config.file {
        Some(path) => Some(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file_writer(path, config.rotate_daily)?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(config.level))
        .with(stderr_layer(config.format))
        .with(file_layer)
        .try_init()?;

    tracing::debug!(
        level = config.level.as_directive(),
        format = ?config.format,
        file = ?config.file,
        "Logging initialized"
    );

    Ok(())
}
