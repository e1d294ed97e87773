use std::fs;
use std::path::Path;
use tracing::info;

use crate::dispatch::Package;
use crate::error::{ImportError, Result};

pub mod csv;
pub mod json;
pub mod manifest;

/// Trait for reading sensor packages from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Parse packages from the file contents
    fn import_str(&self, content: &str) -> Result<Vec<Package>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Whether `file_path` carries the given extension, ignoring case
pub(crate) fn has_extension(file_path: &Path, wanted: &str) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Manager for coordinating different import formats
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(csv::CsvImporter),
            Box::new(json::JsonImporter),
            Box::new(manifest::ManifestImporter),
        ];

        Self { importers }
    }

    /// Import a single file, picking the format from its extension
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<Package>> {
        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFormat {
                path: file_path.to_path_buf(),
            })?;

        let content = fs::read_to_string(file_path)?;
        let packages = importer.import_str(&content)?;

        info!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            packages = packages.len(),
            "Packages imported"
        );

        Ok(packages)
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}
