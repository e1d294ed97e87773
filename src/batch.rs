//! Batch processing of sensor packages
//!
//! Every package is processed on its own: a failing package is logged and
//! recorded in the report while the remaining packages still run, unless the
//! batch is configured to stop at the first failure.

use tracing::{error, info, warn, Level};

use crate::dispatch::Package;
use crate::error::{Result, WorkoutError};
use crate::models::Summary;

/// Result of processing one package
#[derive(Debug)]
pub struct PackageOutcome {
    /// Position of the package in the input
    pub index: usize,
    pub code: String,
    pub result: Result<Summary>,
}

/// Outcomes of a whole batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<PackageOutcome>,

    /// Set when processing stopped before the last package
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn summaries(&self) -> impl Iterator<Item = &Summary> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PackageOutcome, &WorkoutError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }

    pub fn succeeded(&self) -> usize {
        self.summaries().count()
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && !self.stopped_early
    }
}

/// Process a single package into its summary
pub fn process_package(package: &Package) -> Result<Summary> {
    package.read()?.summarize()
}

/// Log a failed package at the level of its error severity
fn log_failure(index: usize, code: &str, e: &WorkoutError) -> Level {
    let level = e.severity().to_tracing_level();
    if level == Level::WARN {
        warn!(index, code, error = %e, "Skipping package");
    } else {
        error!(index, code, error = %e, "Package failed");
    }
    level
}

/// Process packages in order, isolating failures per package.
pub fn run_batch(packages: &[Package], fail_fast: bool) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        let result = process_package(package);

        if let Err(e) = &result {
            log_failure(index, &package.code, e);
        }

        let failed = result.is_err();
        report.outcomes.push(PackageOutcome {
            index,
            code: package.code.clone(),
            result,
        });

        if failed && fail_fast {
            report.stopped_early = index + 1 < packages.len();
            break;
        }
    }

    info!(
        total = packages.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Batch processed"
    );

    report
}
