//! Image Service - presets in, PNG files out.
//!
//! Rendering goes through the generator; persistence is best effort in
//! `generate_crew_image` and strict in `save_crew_image`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::RowgramConfig;
use crate::error::{Result, RowgramError};
use crate::generator::TemplateGenerator;
use crate::model::{CanvasDimensions, ClubIconData, ColorScheme, Crew};
use crate::presets::Preset;

const EXTENSION: &str = "png";
const FALLBACK_NAME: &str = "crew-image";

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub png: Vec<u8>,
    /// Where the PNG was written, if writing succeeded.
    pub path: Option<PathBuf>,
    pub preset: Preset,
}

pub struct ImageService {
    generator: TemplateGenerator,
    output_dir: PathBuf,
    dimensions: CanvasDimensions,
}

impl ImageService {
    pub fn new(config: &RowgramConfig) -> Result<Self> {
        Ok(Self::with_generator(
            TemplateGenerator::with_config(config)?,
            &config.output_dir,
            config.default_dimensions,
        ))
    }

    pub fn with_generator(
        generator: TemplateGenerator,
        output_dir: impl Into<PathBuf>,
        dimensions: CanvasDimensions,
    ) -> Self {
        Self {
            generator,
            output_dir: output_dir.into(),
            dimensions,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render with a preset and try to save it. A failed write is logged
    /// and reported as `path: None`; the PNG is still returned.
    pub fn generate_crew_image(
        &self,
        crew: &Crew,
        image_name: &str,
        template_id: Option<&str>,
        colors: Option<ColorScheme>,
        club_icon: Option<&ClubIconData>,
    ) -> Result<GeneratedImage> {
        let (preset, png) = self.render(crew, template_id, colors, club_icon)?;
        let path = match persist(&self.output_dir, image_name, &png) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("could not save image for {}: {}", crew.name, e);
                None
            }
        };
        Ok(GeneratedImage { png, path, preset })
    }

    /// Like `generate_crew_image`, but a failed write is an error.
    pub fn save_crew_image(
        &self,
        crew: &Crew,
        image_name: &str,
        template_id: Option<&str>,
        colors: Option<ColorScheme>,
        club_icon: Option<&ClubIconData>,
    ) -> Result<GeneratedImage> {
        let (preset, png) = self.render(crew, template_id, colors, club_icon)?;
        let path = persist(&self.output_dir, image_name, &png)?;
        Ok(GeneratedImage {
            png,
            path: Some(path),
            preset,
        })
    }

    fn render(
        &self,
        crew: &Crew,
        template_id: Option<&str>,
        colors: Option<ColorScheme>,
        club_icon: Option<&ClubIconData>,
    ) -> Result<(Preset, Vec<u8>)> {
        let preset = Preset::resolve(template_id);
        let config = preset.config(self.dimensions, colors);
        let png = self.generator.generate_template(crew, &config, club_icon)?;
        Ok((preset, png))
    }
}

/// Keep ASCII alphanumerics, `-` and `_`; everything else becomes `_`.
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}

fn candidate(dir: &Path, base: &str, ext: &str, n: usize) -> PathBuf {
    if n == 0 {
        dir.join(format!("{base}.{ext}"))
    } else {
        dir.join(format!("{base}_{n}.{ext}"))
    }
}

/// Write `png` under `dir` without clobbering an existing file.
pub fn persist(dir: &Path, image_name: &str, png: &[u8]) -> Result<PathBuf> {
    let io_err = |path: &Path, source| RowgramError::Persistence {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let base = sanitize_name(image_name);
    let mut n = 0;
    loop {
        let path = candidate(dir, &base, EXTENSION, n);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(png).map_err(|e| io_err(path.as_path(), e))?;
                log::info!("saved {} ({} bytes)", path.display(), png.len());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(io_err(path.as_path(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitizer_keeps_safe_characters() {
        assert_eq!(sanitize_name("First VIII (Head)"), "First_VIII__Head_");
        assert_eq!(sanitize_name("crew-2024_final"), "crew-2024_final");
        assert_eq!(sanitize_name("../../etc/passwd"), "______etc_passwd");
        assert_eq!(sanitize_name("   "), "crew-image");
    }

    #[test]
    fn persist_appends_suffix_on_collision() {
        let dir = TempDir::new().unwrap();
        let first = persist(dir.path(), "lineup", b"one").unwrap();
        let second = persist(dir.path(), "lineup", b"two").unwrap();
        let third = persist(dir.path(), "lineup", b"three").unwrap();
        assert_eq!(first.file_name().unwrap(), "lineup.png");
        assert_eq!(second.file_name().unwrap(), "lineup_1.png");
        assert_eq!(third.file_name().unwrap(), "lineup_2.png");
        assert_eq!(fs::read(&first).unwrap(), b"one");
        assert!(!dir.path().join("lineup_3.png").exists());
    }

    #[test]
    fn persist_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = persist(&nested, "x", b"data").unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn persist_into_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let err = persist(&blocker, "x", b"data").unwrap_err();
        assert!(matches!(err, RowgramError::Persistence { .. }));
    }
}
