//! Pieces of layout every template reuses: header block, roster rows,
//! role rows, footer band and icon placement.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::color::Color;
use crate::layout::Rect;
use crate::model::{Crew, LogoPosition};
use crate::seats::RosterRow;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

/// Typography and placement of the club / crew / subtitle block.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub top: f32,
    pub x: f32,
    pub align: Align,
    pub face: FontFace,
    pub club_size: f32,
    pub name_size: f32,
    pub subtitle_size: f32,
    pub color: Color,
    pub muted: Color,
    pub uppercase_club: bool,
}

impl Header {
    pub fn centered(surface: &Surface, top: f32, color: Color) -> Self {
        Self {
            top,
            x: surface.width() / 2.0,
            align: Align::Center,
            face: FontFace::SansBold,
            club_size: 34.0,
            name_size: 64.0,
            subtitle_size: 30.0,
            color,
            muted: color.with_alpha(0.8),
            uppercase_club: true,
        }
    }
}

/// Draw club name, crew name and subtitle. Returns the y below the block.
pub fn draw_header(surface: &mut Surface, crew: &Crew, header: &Header) -> f32 {
    let mut y = header.top;
    let style = |face, size, color| TextStyle {
        face,
        size,
        color,
        align: header.align,
        baseline: Baseline::Top,
    };

    let club = crew.club_name.trim();
    if !club.is_empty() {
        let club = if header.uppercase_club {
            club.to_uppercase()
        } else {
            club.to_string()
        };
        let club_style = style(FontFace::SansBold, header.club_size, header.muted);
        surface.text(&club, header.x, y, &club_style);
        y += header.club_size * 1.4;
    }

    let width = match header.align {
        Align::Center => surface.width() - 160.0,
        Align::Left => surface.width() - header.x - 80.0,
        Align::Right => header.x - 80.0,
    };
    let name = crew.name.trim();
    let name_size = fit_size(surface, name, header.face, header.name_size, 28.0, width);
    surface.text(name, header.x, y, &style(header.face, name_size, header.color));
    y += header.name_size * 1.25;

    let subtitle = crew.subtitle();
    if !subtitle.is_empty() {
        let subtitle_style = style(FontFace::Sans, header.subtitle_size, header.muted);
        surface.text(&subtitle, header.x, y, &subtitle_style);
        y += header.subtitle_size * 1.4;
    }
    y
}

/// `"{label}: {name}"` as a single run.
pub fn draw_inline_row(
    surface: &mut Surface,
    row: &RosterRow,
    x: f32,
    y: f32,
    style: &TextStyle,
) -> f32 {
    surface.text(&row.inline(), x, y, style)
}

/// Label at the left of `rect`, name after a fixed gutter, both centred
/// vertically in the rect.
pub fn draw_split_row(
    surface: &mut Surface,
    row: &RosterRow,
    rect: Rect,
    gutter: f32,
    label: &TextStyle,
    name: &TextStyle,
) {
    let cy = rect.center_y();
    surface.text(&row.label, rect.x, cy, label);
    surface.text(&row.name, rect.x + gutter, cy, name);
}

/// Rounded card with the label small on top and the name below it.
pub fn draw_card(
    surface: &mut Surface,
    row: &RosterRow,
    rect: Rect,
    fill: Color,
    label_color: Color,
    name_color: Color,
) {
    surface.fill_rounded_rect(rect, 16.0, fill);
    let label_size = (rect.h * 0.26).min(24.0);
    let mut name_size = (rect.h * 0.36).min(34.0);
    let room = rect.w - 40.0;
    while name_size > 14.0 && surface.measure(&row.name, FontFace::SansBold, name_size) > room {
        name_size -= 1.0;
    }
    surface.text(
        &row.label,
        rect.x + 22.0,
        rect.y + rect.h * 0.32,
        &TextStyle::new(FontFace::SansBold, label_size, label_color),
    );
    surface.text(
        &row.name,
        rect.x + 22.0,
        rect.y + rect.h * 0.68,
        &TextStyle::new(FontFace::SansBold, name_size, name_color),
    );
}

/// Solid band across the bottom of the canvas with optional centred text.
pub fn footer_band(surface: &mut Surface, height: f32, fill: Color, text: Option<&str>) {
    let top = surface.height() - height;
    surface.fill_rect(0.0, top, surface.width(), height, fill);
    if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
        let size = (height * 0.4).min(28.0);
        let style = TextStyle::new(FontFace::SansBold, size, fill.contrasting_text()).centered();
        surface.text(text, surface.width() / 2.0, top + height / 2.0, &style);
    }
}

/// Scale `icon` to fit a `size` square and composite it in a corner.
pub fn place_icon(
    surface: &mut Surface,
    icon: Option<&RgbaImage>,
    position: LogoPosition,
    size: u32,
    margin: f32,
) {
    let Some(icon) = icon else {
        return;
    };
    if position == LogoPosition::None || icon.width() == 0 || icon.height() == 0 {
        return;
    }
    let scale = size as f32 / icon.width().max(icon.height()) as f32;
    let (w, h) = (
        ((icon.width() as f32 * scale).round() as u32).max(1),
        ((icon.height() as f32 * scale).round() as u32).max(1),
    );
    let scaled = imageops::resize(icon, w, h, FilterType::Triangle);
    let (sw, sh) = (surface.width(), surface.height());
    let (x, y) = match position {
        LogoPosition::TopRight => (sw - margin - w as f32, margin),
        LogoPosition::BottomRight => (sw - margin - w as f32, sh - margin - h as f32),
        LogoPosition::BottomLeft => (margin, sh - margin - h as f32),
        LogoPosition::None => return,
    };
    surface.draw_image(&scaled, x.round() as i32, y.round() as i32);
}

/// Largest size not above `max` at which `text` fits in `width`.
pub fn fit_size(
    surface: &Surface,
    text: &str,
    face: FontFace,
    max: f32,
    min: f32,
    width: f32,
) -> f32 {
    let mut size = max;
    while size > min && surface.measure(text, face, size) > width {
        size -= 2.0;
    }
    size.max(min)
}
