//! RowGram Core - Crew Lineup Image Renderer
//!
//! # Guarantees
//! 1. Output dimensions equal the requested canvas exactly
//! 2. Invalid crews are rejected before any drawing
//! 3. A broken club icon never fails a render
//! 4. Equal input renders equal bytes (randomness is seeded)
//! 5. The fixed template set is closed; unknown ids are errors
//! 6. Unknown presets fall back to the default

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod hashing;
pub mod icon;
pub mod image_service;
pub mod layout;
pub mod model;
pub mod presets;
pub mod primitives;
pub mod registry;
pub mod seats;
pub mod surface;
pub mod templates;
pub mod validation;

pub use config::RowgramConfig;
pub use error::{Result, RowgramError};
pub use generator::{RenderSummary, Rendering, SeedPolicy, TemplateGenerator};
pub use hashing::{canonical_json, compute_job_hash, sha256_hex};
pub use image_service::{GeneratedImage, ImageService};
pub use model::{
    Background, BoatStyle, BoatType, CanvasDimensions, ClubIconData, ColorScheme, Crew,
    LogoPosition, NameDisplay, TemplateConfig, TextLayout,
};
pub use presets::Preset;
pub use registry::{TemplateId, TemplateInfo};
pub use seats::SeatLabelStyle;
pub use surface::TextRun;
pub use templates::Template;
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
