//! Runtime configuration: asset directories and output defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RowgramError};
use crate::model::CanvasDimensions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowgramConfig {
    /// Stock club icons referenced by `{type: "preset"}`.
    pub presets_dir: PathBuf,
    /// Where uploaded icons land before use.
    pub uploads_dir: PathBuf,
    /// Destination for generated images.
    pub output_dir: PathBuf,
    pub default_dimensions: CanvasDimensions,
}

impl Default for RowgramConfig {
    fn default() -> Self {
        Self {
            presets_dir: PathBuf::from("assets/club-icons"),
            uploads_dir: PathBuf::from("tmp/uploads"),
            output_dir: PathBuf::from("generated"),
            default_dimensions: CanvasDimensions::SQUARE,
        }
    }
}

impl RowgramConfig {
    /// Load from a JSON file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(RowgramError::Config(format!("{}: {e}", path.display())));
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| RowgramError::Config(format!("{}: {e}", path.display())))
    }
}
