use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use workoutrs::import::ImportManager;
use workoutrs::{logging, render_report, run_batch, AppConfig, LogFormat, LogLevel, OutputFormat};

/// workoutrs - Workout Sensor Summary CLI
///
/// Turns raw sensor packages (step or stroke counts, duration, weight and
/// activity-specific values) into distance, average speed and calories.
/// Without arguments the reference session is processed.
#[derive(Parser)]
#[command(name = "workoutrs")]
#[command(author = "workoutrs Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Workout sensor summary CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Package file to process (CSV, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (text, json, table)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Stop at the first failing package
    #[arg(long)]
    fail_fast: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    config
        .logging
        .override_with(cli.log_level, cli.log_format, cli.verbose);
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let packages = match &cli.input {
        Some(path) => ImportManager::new()
            .import_file(path)
            .with_context(|| format!("Failed to import packages from {}", path.display()))?,
        None => config.packages_or_default(),
    };

    let format = cli.format.unwrap_or(config.output.format);
    let fail_fast = cli.fail_fast || config.output.fail_fast;

    let report = run_batch(&packages, fail_fast);

    let rendered = render_report(&report, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if format != OutputFormat::Json {
        for (outcome, e) in report.failures() {
            eprintln!(
                "{} package #{} ({}): {}",
                "✗".red().bold(),
                outcome.index + 1,
                outcome.code,
                e.user_message()
            );
        }
    }

    if report.stopped_early {
        eprintln!("{}", "Stopped at the first failing package".yellow());
    }

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
