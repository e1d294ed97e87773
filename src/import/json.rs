use std::path::Path;

use crate::dispatch::Package;
use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat};

/// JSON importer for an array of `{"code": ..., "data": [...]}` objects
pub struct JsonImporter;

impl ImportFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "json")
    }

    fn import_str(&self, content: &str) -> Result<Vec<Package>> {
        serde_json::from_str(content).map_err(|e| {
            ImportError::ParseError {
                format: "JSON",
                location: format!("line {}, column {}", e.line(), e.column()),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}
