//! Named shortcuts onto the configurable template.

use serde::Serialize;

use crate::model::{
    Background, BoatStyle, CanvasDimensions, ColorScheme, LogoPosition, NameDisplay,
    TemplateConfig, TextLayout,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    ClassicLineup,
    ModernGrid,
    RaceDay,
    Minimal,
    Championship,
}

/// Listing entry for a preset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetInfo {
    pub id: &'static str,
    pub background: Background,
    pub name_display: NameDisplay,
    pub boat_style: BoatStyle,
    pub text_layout: TextLayout,
    pub logo: LogoPosition,
    pub colors: ColorScheme,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::ClassicLineup,
        Self::ModernGrid,
        Self::RaceDay,
        Self::Minimal,
        Self::Championship,
    ];

    pub const DEFAULT: Self = Self::ClassicLineup;

    pub fn id(self) -> &'static str {
        match self {
            Self::ClassicLineup => "classic-lineup",
            Self::ModernGrid => "modern-grid",
            Self::RaceDay => "race-day",
            Self::Minimal => "minimal",
            Self::Championship => "championship",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == "default" {
            return Some(Self::DEFAULT);
        }
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Unknown or missing ids fall back to the default preset.
    pub fn resolve(id: Option<&str>) -> Self {
        match id {
            None => Self::DEFAULT,
            Some(id) => Self::from_id(id).unwrap_or_else(|| {
                log::info!("unknown preset `{}`, using `{}`", id, Self::DEFAULT.id());
                Self::DEFAULT
            }),
        }
    }

    fn options(self) -> (Background, NameDisplay, BoatStyle, TextLayout, LogoPosition) {
        use Background as B;
        use BoatStyle as S;
        use LogoPosition as L;
        use NameDisplay as N;
        use TextLayout as T;
        match self {
            Self::ClassicLineup => {
                (B::Gradient, N::Labeled, S::Silhouette, T::SingleColumn, L::BottomRight)
            }
            Self::ModernGrid => (B::Grid, N::Cards, S::None, T::Grid, L::TopRight),
            Self::RaceDay => {
                (B::Stripes, N::Banners, S::Oars, T::TwoColumnAlternating, L::BottomRight)
            }
            Self::Minimal => (B::Solid, N::Labeled, S::None, T::SingleColumn, L::None),
            Self::Championship => {
                (B::Radial, N::Badges, S::SeatMap, T::TwoColumnHalved, L::TopRight)
            }
        }
    }

    pub fn default_colors(self) -> ColorScheme {
        match self {
            Self::ClassicLineup => ColorScheme::new("#1e3a8a", "#3b82f6"),
            Self::ModernGrid => ColorScheme::new("#0f172a", "#22d3ee"),
            Self::RaceDay => ColorScheme::new("#b91c1c", "#f59e0b"),
            Self::Minimal => ColorScheme::new("#111827", "#6b7280"),
            Self::Championship => ColorScheme::new("#78350f", "#d4af37"),
        }
    }

    /// Configurable-template settings for this preset.
    pub fn config(
        self,
        dimensions: CanvasDimensions,
        colors: Option<ColorScheme>,
    ) -> TemplateConfig {
        let (background, name_display, boat_style, text_layout, logo) = self.options();
        TemplateConfig {
            background,
            name_display,
            boat_style,
            text_layout,
            logo,
            ..TemplateConfig::new(dimensions, colors.unwrap_or_else(|| self.default_colors()))
        }
    }

    pub fn info(self) -> PresetInfo {
        let (background, name_display, boat_style, text_layout, logo) = self.options();
        PresetInfo {
            id: self.id(),
            background,
            name_display,
            boat_style,
            text_layout,
            logo,
            colors: self.default_colors(),
        }
    }
}
