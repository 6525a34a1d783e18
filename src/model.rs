//! Render inputs: crew records, canvas configuration and club icon sources.
//!
//! Nothing in here is mutated by the engine. A render borrows these values
//! for the duration of one call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, RowgramError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatType {
    pub seats: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl BoatType {
    pub fn new(seats: u32, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            seats,
            name: name.into(),
            value: value.into(),
        }
    }

    /// The `+` suffix convention for coxed boats. Seat labelling ignores it.
    pub fn is_coxed(&self) -> bool {
        self.value.trim_end().ends_with('+')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crew {
    pub name: String,
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub race_name: String,
    pub boat_type: BoatType,
    #[serde(default)]
    pub crew_names: Vec<String>,
    #[serde(default)]
    pub cox_name: Option<String>,
    #[serde(default)]
    pub coach_name: Option<String>,
}

impl Crew {
    /// Parse a crew record, reporting any shape problem as `InvalidInput`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RowgramError::InvalidInput(format!("malformed crew record: {e}")))
    }

    pub fn cox(&self) -> Option<&str> {
        non_blank(self.cox_name.as_deref())
    }

    pub fn coach(&self) -> Option<&str> {
        non_blank(self.coach_name.as_deref())
    }

    /// `"{boat name} • {race name}"`, omitting whichever side is empty.
    pub fn subtitle(&self) -> String {
        match (self.boat_type.name.trim(), self.race_name.trim()) {
            ("", "") => String::new(),
            (boat, "") => boat.to_string(),
            ("", race) => race.to_string(),
            (boat, race) => format!("{boat} \u{2022} {race}"),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
}

impl ColorScheme {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new("#1e3a8a", "#3b82f6")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub width: u32,
    pub height: u32,
}

impl CanvasDimensions {
    pub const SQUARE: Self = Self { width: 1080, height: 1080 };
    pub const PORTRAIT: Self = Self { width: 1080, height: 1350 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasDimensions {
    fn default() -> Self {
        Self::SQUARE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    Solid,
    #[default]
    Gradient,
    Radial,
    Stripes,
    Grid,
    Water,
    Texture,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameDisplay {
    #[default]
    Labeled,
    Badges,
    Cards,
    Banners,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoatStyle {
    None,
    #[default]
    Silhouette,
    Oars,
    SeatMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextLayout {
    #[default]
    SingleColumn,
    TwoColumnAlternating,
    TwoColumnHalved,
    Grid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    TopRight,
    #[default]
    BottomRight,
    BottomLeft,
    None,
}

impl Background {
    pub const ALL: [Self; 7] = [
        Self::Solid,
        Self::Gradient,
        Self::Radial,
        Self::Stripes,
        Self::Grid,
        Self::Water,
        Self::Texture,
    ];
}

impl NameDisplay {
    pub const ALL: [Self; 4] = [Self::Labeled, Self::Badges, Self::Cards, Self::Banners];
}

impl BoatStyle {
    pub const ALL: [Self; 4] = [Self::None, Self::Silhouette, Self::Oars, Self::SeatMap];
}

impl TextLayout {
    pub const ALL: [Self; 4] = [
        Self::SingleColumn,
        Self::TwoColumnAlternating,
        Self::TwoColumnHalved,
        Self::Grid,
    ];
}

impl LogoPosition {
    pub const ALL: [Self; 4] = [Self::TopRight, Self::BottomRight, Self::BottomLeft, Self::None];
}

/// Dimensions, colors and (for the configurable path) layout choices.
///
/// When `template_id` names a fixed template the five layout fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub dimensions: CanvasDimensions,
    #[serde(default)]
    pub colors: ColorScheme,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub name_display: NameDisplay,
    #[serde(default)]
    pub boat_style: BoatStyle,
    #[serde(default)]
    pub text_layout: TextLayout,
    #[serde(default)]
    pub logo: LogoPosition,
    /// Seed for decorative randomness; derived from the input when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TemplateConfig {
    pub fn new(dimensions: CanvasDimensions, colors: ColorScheme) -> Self {
        Self {
            dimensions,
            colors,
            ..Default::default()
        }
    }

    pub fn for_template(
        template_id: impl Into<String>,
        dimensions: CanvasDimensions,
        colors: ColorScheme,
    ) -> Self {
        Self {
            template_id: Some(template_id.into()),
            ..Self::new(dimensions, colors)
        }
    }
}

/// Where a club icon comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClubIcon", into = "RawClubIcon")]
pub enum ClubIconData {
    /// A stock icon under the presets directory.
    Preset { filename: String },
    /// A file previously uploaded to the temp directory.
    Upload { file_path: PathBuf },
    /// Inline image bytes, used for previews that are never persisted.
    Inline { base64: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClubIcon {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base64: Option<String>,
}

impl TryFrom<RawClubIcon> for ClubIconData {
    type Error = String;

    fn try_from(raw: RawClubIcon) -> std::result::Result<Self, Self::Error> {
        match (raw.kind.as_str(), raw.filename, raw.file_path, raw.base64) {
            ("preset", Some(filename), _, _) => Ok(Self::Preset { filename }),
            ("upload", _, Some(file_path), _) => Ok(Self::Upload { file_path }),
            ("upload", _, None, Some(base64)) => Ok(Self::Inline { base64 }),
            ("preset", None, _, _) => Err("preset club icon requires `filename`".into()),
            ("upload", _, None, None) => {
                Err("upload club icon requires `filePath` or `base64`".into())
            }
            (other, _, _, _) => Err(format!("unknown club icon type `{other}`")),
        }
    }
}

impl From<ClubIconData> for RawClubIcon {
    fn from(icon: ClubIconData) -> Self {
        match icon {
            ClubIconData::Preset { filename } => Self {
                kind: "preset".into(),
                filename: Some(filename),
                file_path: None,
                base64: None,
            },
            ClubIconData::Upload { file_path } => Self {
                kind: "upload".into(),
                filename: None,
                file_path: Some(file_path),
                base64: None,
            },
            ClubIconData::Inline { base64 } => Self {
                kind: "upload".into(),
                filename: None,
                file_path: None,
                base64: Some(base64),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_parses_camel_case() {
        let crew = Crew::from_json(
            r#"{
                "name": "First VIII",
                "clubName": "Thames RC",
                "raceName": "Head Race",
                "boatType": {"seats": 8, "name": "Eight", "value": "8+"},
                "crewNames": ["A", "B"],
                "coxName": "  "
            }"#,
        )
        .unwrap();
        assert_eq!(crew.club_name, "Thames RC");
        assert_eq!(crew.crew_names.len(), 2);
        assert!(crew.boat_type.is_coxed());
        assert_eq!(crew.cox(), None);
        assert_eq!(crew.subtitle(), "Eight \u{2022} Head Race");
    }

    #[test]
    fn crew_names_not_an_array_is_invalid_input() {
        let err = Crew::from_json(
            r#"{"name": "x", "boatType": {"seats": 1}, "crewNames": "Alice"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RowgramError::InvalidInput(_)));
    }

    #[test]
    fn club_icon_variants_from_json() {
        let preset: ClubIconData =
            serde_json::from_str(r#"{"type": "preset", "filename": "oars.png"}"#).unwrap();
        assert_eq!(preset, ClubIconData::Preset { filename: "oars.png".into() });

        let upload: ClubIconData =
            serde_json::from_str(r#"{"type": "upload", "filePath": "/tmp/a.png"}"#).unwrap();
        assert_eq!(upload, ClubIconData::Upload { file_path: "/tmp/a.png".into() });

        let inline: ClubIconData =
            serde_json::from_str(r#"{"type": "upload", "base64": "AAAA"}"#).unwrap();
        assert_eq!(inline, ClubIconData::Inline { base64: "AAAA".into() });

        assert!(serde_json::from_str::<ClubIconData>(r#"{"type": "remote"}"#).is_err());
    }

    #[test]
    fn template_config_defaults() {
        let config: TemplateConfig =
            serde_json::from_str(r#"{"textLayout": "two-column-halved", "logo": "none"}"#)
                .unwrap();
        assert_eq!(config.dimensions, CanvasDimensions::SQUARE);
        assert_eq!(config.text_layout, TextLayout::TwoColumnHalved);
        assert_eq!(config.logo, LogoPosition::None);
        assert_eq!(config.background, Background::Gradient);
        assert!(config.template_id.is_none());
    }
}
