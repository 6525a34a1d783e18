//! Club icon resolution and decoding.
//!
//! Loading can fail in many ways (missing file, not an image, bad base64).
//! All of them surface as `IconLoad`; the generator treats that as "render
//! without an icon".

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use crate::config::RowgramConfig;
use crate::error::{Result, RowgramError};
use crate::model::ClubIconData;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Resolves `ClubIconData` against the configured asset directories.
#[derive(Debug, Clone)]
pub struct IconLoader {
    presets_dir: PathBuf,
    uploads_dir: PathBuf,
}

impl IconLoader {
    pub fn new(presets_dir: impl Into<PathBuf>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            presets_dir: presets_dir.into(),
            uploads_dir: uploads_dir.into(),
        }
    }

    pub fn from_config(config: &RowgramConfig) -> Self {
        Self::new(&config.presets_dir, &config.uploads_dir)
    }

    /// Path an icon would be read from, without touching the filesystem.
    pub fn resolve(&self, icon: &ClubIconData) -> Result<Option<PathBuf>> {
        match icon {
            ClubIconData::Preset { filename } => {
                check_plain_name(filename)?;
                Ok(Some(self.presets_dir.join(filename)))
            }
            ClubIconData::Upload { file_path } => {
                if file_path.is_absolute() {
                    Ok(Some(file_path.clone()))
                } else {
                    check_relative(file_path)?;
                    Ok(Some(self.uploads_dir.join(file_path)))
                }
            }
            ClubIconData::Inline { .. } => Ok(None),
        }
    }

    pub fn load(&self, icon: &ClubIconData) -> Result<RgbaImage> {
        match (self.resolve(icon)?, icon) {
            (Some(path), _) => load_file(&path),
            (None, ClubIconData::Inline { base64 }) => decode_base64(base64),
            (None, _) => Err(RowgramError::IconLoad("icon has no source".into())),
        }
    }
}

fn check_plain_name(filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(RowgramError::IconLoad(format!(
            "preset icon name must be a bare filename: {filename}"
        ))),
    }
}

fn check_relative(path: &Path) -> Result<()> {
    if path.components().all(|c| matches!(c, Component::Normal(_))) {
        Ok(())
    } else {
        Err(RowgramError::IconLoad(format!(
            "upload path escapes the uploads directory: {}",
            path.display()
        )))
    }
}

fn load_file(path: &Path) -> Result<RgbaImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(RowgramError::IconLoad(format!(
            "{} is not an image file",
            path.display()
        )));
    }
    let reader = ImageReader::open(path)
        .map_err(|e| RowgramError::IconLoad(format!("{}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| RowgramError::IconLoad(format!("{}: {e}", path.display())))?;
    let image = reader
        .decode()
        .map_err(|e| RowgramError::IconLoad(format!("{}: {e}", path.display())))?;
    Ok(image.to_rgba8())
}

fn decode_base64(data: &str) -> Result<RgbaImage> {
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| RowgramError::IconLoad(format!("invalid base64: {e}")))?;
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| RowgramError::IconLoad(e.to_string()))?
        .decode()
        .map_err(|e| RowgramError::IconLoad(e.to_string()))?;
    Ok(image.to_rgba8())
}
