use serde::Deserialize;
use std::path::Path;

use crate::dispatch::Package;
use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat};

/// TOML document holding `[[packages]]` tables
#[derive(Debug, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// TOML importer, shares its layout with the `[[packages]]` config section
pub struct ManifestImporter;

impl ImportFormat for ManifestImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "toml")
    }

    fn import_str(&self, content: &str) -> Result<Vec<Package>> {
        let manifest: PackageManifest =
            toml::from_str(content).map_err(|e| ImportError::ParseError {
                format: "TOML",
                location: e
                    .span()
                    .map(|span| format!("byte {}", span.start))
                    .unwrap_or_else(|| "document".to_string()),
                reason: e.message().to_string(),
            })?;

        Ok(manifest.packages)
    }

    fn get_format_name(&self) -> &'static str {
        "TOML"
    }
}
