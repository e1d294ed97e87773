//! Rendering of batch results
//!
//! Text output is one [`Summary::render`] line per workout. JSON output also
//! carries the failed packages; table output is meant for terminals.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::batch::BatchReport;
use crate::error::{Result, WorkoutError};
use crate::models::Summary;

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(WorkoutError::Configuration(format!(
                "Invalid output format: {}",
                s
            ))),
        }
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Training type")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Avg speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
}

impl From<&Summary> for SummaryRow {
    fn from(summary: &Summary) -> Self {
        Self {
            training_type: summary.training_type.clone(),
            duration: format!("{:.3}", summary.duration_hours),
            distance: format!("{:.3}", summary.distance_km),
            speed: format!("{:.3}", summary.mean_speed_kmh),
            calories: format!("{:.3}", summary.calories_kcal),
        }
    }
}

#[derive(Serialize)]
struct FailureView<'a> {
    index: usize,
    code: &'a str,
    error: String,
    recoverable: bool,
}

#[derive(Serialize)]
struct ReportView<'a> {
    summaries: Vec<&'a Summary>,
    failures: Vec<FailureView<'a>>,
}

/// Render the successful summaries of a batch in the requested format
pub fn render_report(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .summaries()
            .map(Summary::render)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let rows: Vec<SummaryRow> = report.summaries().map(SummaryRow::from).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Json => {
            let view = ReportView {
                summaries: report.summaries().collect(),
                failures: report
                    .failures()
                    .map(|(outcome, e)| FailureView {
                        index: outcome.index,
                        code: &outcome.code,
                        error: e.to_string(),
                        recoverable: e.is_recoverable(),
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&view).map_err(|e| {
                WorkoutError::Configuration(format!("Failed to serialize report: {}", e))
            })
        }
    }
}
