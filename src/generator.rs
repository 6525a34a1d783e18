//! Template Generator - Single Entry Point for Rendering
//!
//! `render` always validates before it allocates a surface. Nothing here
//! touches the filesystem except reading a referenced club icon.

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;

use crate::color::Palette;
use crate::config::RowgramConfig;
use crate::error::{Result, RowgramError};
use crate::hashing::{compute_job_hash, seed_from_hash, sha256_hex};
use crate::icon::IconLoader;
use crate::model::{ClubIconData, Crew, TemplateConfig};
use crate::registry;
use crate::surface::{encode_png, Fonts, Surface, TextRun};
use crate::templates::{Configurable, RenderContext, Template};
use crate::validation::{ValidationResult, Validator};
use crate::ENGINE_VERSION;

/// How decorative randomness is seeded when the config carries no seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Derived from the job hash, so equal input renders equal bytes.
    #[default]
    Derived,
    /// Fresh OS entropy on every render.
    Entropy,
}

/// Raw result of one render, before encoding.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub image: RgbaImage,
    pub text_log: Vec<TextRun>,
    pub template_id: &'static str,
    pub job_hash: String,
    pub seed: u64,
    pub icon_applied: bool,
    pub validation: ValidationResult,
}

impl Rendering {
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Count of text draws whose text equals `text`, ignoring case.
    pub fn text_count(&self, text: &str) -> usize {
        self.text_log
            .iter()
            .filter(|run| run.text.eq_ignore_ascii_case(text))
            .count()
    }

    pub fn summary(&self, png: &[u8]) -> RenderSummary {
        RenderSummary {
            template_id: self.template_id.to_string(),
            width: self.image.width(),
            height: self.image.height(),
            job_hash: self.job_hash.clone(),
            seed: self.seed,
            icon_applied: self.icon_applied,
            png_sha256: sha256_hex(png),
            png_bytes: png.len(),
            validation: self.validation.clone(),
        }
    }
}

/// Serializable description of a finished render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSummary {
    pub template_id: String,
    pub width: u32,
    pub height: u32,
    pub job_hash: String,
    pub seed: u64,
    pub icon_applied: bool,
    pub png_sha256: String,
    pub png_bytes: usize,
    pub validation: ValidationResult,
}

/// The generator - resolves a template, composites the icon, encodes.
pub struct TemplateGenerator {
    fonts: Fonts,
    validator: Validator,
    icons: IconLoader,
    seed_policy: SeedPolicy,
}

impl TemplateGenerator {
    pub fn new() -> Result<Self> {
        Self::with_config(&RowgramConfig::default())
    }

    pub fn with_config(config: &RowgramConfig) -> Result<Self> {
        Ok(Self {
            fonts: Fonts::embedded()?,
            validator: Validator::new(),
            icons: IconLoader::from_config(config),
            seed_policy: SeedPolicy::Derived,
        })
    }

    pub fn with_icon_loader(mut self, icons: IconLoader) -> Self {
        self.icons = icons;
        self
    }

    /// Unseeded renders draw their texture from OS entropy.
    pub fn with_entropy(mut self) -> Self {
        self.seed_policy = SeedPolicy::Entropy;
        self
    }

    pub fn validate(&self, crew: &Crew, config: &TemplateConfig) -> ValidationResult {
        self.validator.validate(crew, config)
    }

    /// Render to PNG bytes.
    pub fn generate_template(
        &self,
        crew: &Crew,
        config: &TemplateConfig,
        club_icon: Option<&ClubIconData>,
    ) -> Result<Vec<u8>> {
        self.render(crew, config, club_icon)?.encode_png()
    }

    /// Render to an in-memory raster plus the log of text drawn.
    pub fn render(
        &self,
        crew: &Crew,
        config: &TemplateConfig,
        club_icon: Option<&ClubIconData>,
    ) -> Result<Rendering> {
        let custom;
        let template: &dyn Template = match config.template_id.as_deref() {
            Some(id) => registry::get(id)?,
            None => {
                custom = Configurable::from_config(config);
                &custom
            }
        };

        let validation = self.validator.validate(crew, config);
        if !validation.valid {
            return Err(RowgramError::InvalidInput(validation.summary()));
        }
        for warning in validation.warnings() {
            log::warn!("{}: {} ({})", warning.rule, warning.message, crew.name);
        }

        let icon = club_icon.and_then(|data| match self.icons.load(data) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("rendering {} without club icon: {}", crew.name, e);
                None
            }
        });

        let job_hash = compute_job_hash(template.id(), crew, config, ENGINE_VERSION)?;
        let seed = match (config.seed, self.seed_policy) {
            (Some(seed), _) => seed,
            (None, SeedPolicy::Derived) => seed_from_hash(&job_hash),
            (None, SeedPolicy::Entropy) => StdRng::from_entropy().next_u64(),
        };

        log::debug!(
            "render template={} size={}x{} seats={} seed={} job={}",
            template.id(),
            config.dimensions.width,
            config.dimensions.height,
            crew.crew_names.len(),
            seed,
            &job_hash[..12]
        );

        let mut surface = Surface::new(config.dimensions, self.fonts.clone())?;
        let mut ctx = RenderContext {
            crew,
            config,
            palette: Palette::from_scheme(&config.colors),
            icon: icon.as_ref(),
            rng: StdRng::seed_from_u64(seed),
        };
        template.draw(&mut surface, &mut ctx);
        let (image, text_log) = surface.into_parts();

        Ok(Rendering {
            image,
            text_log,
            template_id: template.id(),
            job_hash,
            seed,
            icon_applied: icon.is_some(),
            validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoatType, CanvasDimensions, ColorScheme};

    fn pair() -> Crew {
        Crew {
            name: "Double".into(),
            club_name: "Club".into(),
            race_name: "Sprint".into(),
            boat_type: BoatType::new(2, "Double", "2x"),
            crew_names: vec!["Ann".into(), "Bea".into()],
            cox_name: None,
            coach_name: None,
        }
    }

    #[test]
    fn unknown_template_fails_before_drawing() {
        let gen = TemplateGenerator::new().unwrap();
        let config = TemplateConfig::for_template(
            "no-such-template",
            CanvasDimensions::SQUARE,
            ColorScheme::default(),
        );
        let err = gen.render(&pair(), &config, None).unwrap_err();
        assert!(matches!(err, RowgramError::UnknownTemplate(_)));
    }

    #[test]
    fn no_template_id_uses_configurable() {
        let gen = TemplateGenerator::new().unwrap();
        let config = TemplateConfig::new(CanvasDimensions::new(600, 700), ColorScheme::default());
        let rendering = gen.render(&pair(), &config, None).unwrap();
        assert_eq!(rendering.template_id, "custom");
        assert_eq!(rendering.image.dimensions(), (600, 700));
    }

    #[test]
    fn explicit_seed_wins_over_derived() {
        let gen = TemplateGenerator::new().unwrap();
        let mut config =
            TemplateConfig::for_template("pulse", CanvasDimensions::SQUARE, ColorScheme::default());
        config.seed = Some(42);
        assert_eq!(gen.render(&pair(), &config, None).unwrap().seed, 42);
    }

    #[test]
    fn empty_roster_is_invalid_input() {
        let gen = TemplateGenerator::new().unwrap();
        let mut crew = pair();
        crew.crew_names.clear();
        let scheme = ColorScheme::default();
        let config = TemplateConfig::for_template("classic", CanvasDimensions::SQUARE, scheme);
        assert!(matches!(
            gen.generate_template(&crew, &config, None),
            Err(RowgramError::InvalidInput(_))
        ));
    }
}
