//! Color strings as accepted by the drawing surface.

use image::Rgba;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// WCAG AA ratio for normal-size text.
pub const MIN_TEXT_CONTRAST: f32 = 4.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const GOLD: Self = Self::rgb(212, 175, 55);
    pub const INK: Self = Self::rgb(17, 24, 39);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color, falling back to opaque black like a canvas fill does.
    pub fn parse_or_black(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| {
            log::warn!("unrecognised color {s:?} ({e}), using black");
            Self::BLACK
        })
    }

    /// Same color with its alpha replaced by `alpha` in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: unit_to_byte(alpha),
            ..self
        }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    pub fn lighten(self, t: f32) -> Self {
        self.mix(Self::WHITE.with_alpha(self.a as f32 / 255.0), t)
    }

    pub fn darken(self, t: f32) -> Self {
        self.mix(Self::BLACK.with_alpha(self.a as f32 / 255.0), t)
    }

    /// Relative luminance (sRGB, WCAG formula).
    pub fn luminance(self) -> f32 {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two opaque colors, from 1 to 21.
    pub fn contrast_ratio(self, other: Self) -> f32 {
        let (a, b) = (self.luminance() + 0.05, other.luminance() + 0.05);
        a.max(b) / a.min(b)
    }

    /// White or ink, whichever has the higher contrast on top of `self`.
    pub fn contrasting_text(self) -> Self {
        if self.contrast_ratio(Self::WHITE) >= self.contrast_ratio(Self::INK) {
            Self::WHITE
        } else {
            Self::INK
        }
    }

    /// `self` if it reads on `background` at 4.5:1, otherwise the
    /// background's contrasting text color.
    pub fn legible_on(self, background: Self) -> Self {
        if self.contrast_ratio(background) >= MIN_TEXT_CONTRAST {
            self
        } else {
            background.contrasting_text()
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        c.to_rgba()
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(c: Color) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

fn unit_to_byte(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex color pattern compiles")
    })
}

fn functional_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*",
            r"(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        ))
        .expect("rgb() pattern compiles")
    })
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(captures) = hex_re().captures(s) {
            let digits = &captures[1];
            let expand = digits.len() <= 4;
            let mut channels = [0u8, 0, 0, 255];
            let step = if expand { 1 } else { 2 };
            for (i, chunk) in digits.as_bytes().chunks(step).enumerate() {
                let text = std::str::from_utf8(chunk).map_err(|_| "invalid hex digits")?;
                let v = u8::from_str_radix(text, 16).map_err(|_| "invalid hex digits")?;
                channels[i] = if expand { v * 17 } else { v };
            }
            let [r, g, b, a] = channels;
            return Ok(Self { r, g, b, a });
        }

        if let Some(captures) = functional_re().captures(s) {
            let channel = |i: usize| -> Result<u8, Self::Err> {
                captures[i].parse::<u8>().map_err(|_| "channel out of range")
            };
            let a = match captures.get(4) {
                Some(m) => {
                    let alpha: f32 = m.as_str().parse().map_err(|_| "invalid alpha")?;
                    unit_to_byte(alpha)
                }
                None => 255,
            };
            return Ok(Self {
                r: channel(1)?,
                g: channel(2)?,
                b: channel(3)?,
                a,
            });
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "transparent" => Ok(Self::TRANSPARENT),
            "gold" => Ok(Self::rgb(255, 215, 0)),
            "navy" => Ok(Self::rgb(0, 0, 128)),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "silver" => Ok(Self::rgb(192, 192, 192)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ => Err("expected #RGB, #RRGGBB, #RRGGBBAA, rgb(), rgba() or a named color"),
        }
    }
}

/// The two scheme colors resolved once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
}

impl Palette {
    pub fn from_scheme(scheme: &crate::model::ColorScheme) -> Self {
        Self {
            primary: Color::parse_or_black(&scheme.primary),
            secondary: Color::parse_or_black(&scheme.secondary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#2563eb".parse::<Color>().unwrap(), Color::rgb(0x25, 0x63, 0xeb));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "#00000080".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 0x80)
        );
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(
            "rgba(255, 255, 255, 0.5)".parse::<Color>().unwrap(),
            Color::rgba(255, 255, 255, 128)
        );
        assert_eq!("rgb(1,2,3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
        assert!("rgb(300,0,0)".parse::<Color>().is_err());
    }

    #[test]
    fn bad_color_falls_back_to_black() {
        assert_eq!(Color::parse_or_black("not-a-color"), Color::BLACK);
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert_eq!(Color::rgb(30, 64, 175).contrasting_text(), Color::WHITE);
        assert_eq!(Color::rgb(250, 245, 230).contrasting_text(), Color::INK);
        // Mid grey reads better with ink than with white.
        assert_eq!(Color::rgb(150, 150, 150).contrasting_text(), Color::INK);
    }

    #[test]
    fn contrast_ratio_spans_wcag_range() {
        assert!((Color::BLACK.contrast_ratio(Color::WHITE) - 21.0).abs() < 0.01);
        assert!((Color::GOLD.contrast_ratio(Color::GOLD) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn legible_on_keeps_readable_colors() {
        let navy = Color::rgb(30, 58, 138);
        assert_eq!(navy.legible_on(Color::WHITE), navy);
        assert_eq!(Color::WHITE.legible_on(Color::WHITE), Color::INK);
        assert_eq!(Color::GOLD.legible_on(Color::WHITE), Color::INK);
    }
}
