use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::dispatch::Package;
use crate::error::{ImportError, Result, WorkoutError};
use crate::import::{has_extension, ImportFormat};

/// CSV importer for `code,values` files.
///
/// `values` holds the positional sensor values separated by `;`:
///
/// ```text
/// code,values
/// SWM,720;1;80;25;40
/// RUN,15000;1;75
/// ```
pub struct CsvImporter;

impl CsvImporter {
    /// Parse the `;`-separated slots of one row.
    ///
    /// An empty slot would shift every later value into the wrong position,
    /// so it is rejected. A single trailing `;` is allowed.
    fn parse_values(values: &str, line: u64) -> Result<Vec<f64>> {
        let values = values.trim();
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let parse_error = |reason: String| {
            WorkoutError::from(ImportError::ParseError {
                format: "CSV",
                location: format!("line {}", line),
                reason,
            })
        };

        values
            .strip_suffix(';')
            .unwrap_or(values)
            .split(';')
            .map(str::trim)
            .enumerate()
            .map(|(slot, v)| {
                if v.is_empty() {
                    return Err(parse_error(format!("value {} is empty", slot + 1)));
                }
                v.parse::<f64>()
                    .map_err(|e| parse_error(format!("'{}': {}", v, e)))
            })
            .collect()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "csv")
    }

    fn import_str(&self, content: &str) -> Result<Vec<Package>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut packages = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ImportError::ParseError {
                format: "CSV",
                location: e
                    .position()
                    .map(|p| format!("line {}", p.line()))
                    .unwrap_or_else(|| "unknown line".to_string()),
                reason: e.to_string(),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let code = record.get(0).unwrap_or_default();
            if code.is_empty() {
                continue;
            }

            let data = Self::parse_values(record.get(1).unwrap_or_default(), line)?;
            packages.push(Package::new(code, data));
        }

        Ok(packages)
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}
