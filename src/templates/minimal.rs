//! Minimal layout on an off-white page.

use crate::color::Color;
use crate::model::LogoPosition;
use crate::primitives;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const PAPER: Color = Color::rgb(250, 250, 249);
const ROW_HEIGHT: f32 = 60.0;

/// Off-white page, hairline dividers, label and name on one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimal;

impl Template for Minimal {
    fn id(&self) -> &'static str {
        "minimal"
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::BottomRight
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let w = surface.width();
        let p = ctx.palette;
        surface.clear(PAPER);

        let ink = p.primary.legible_on(PAPER);
        let muted = Color::rgb(107, 114, 128);
        let header = Header {
            x: 90.0,
            align: Align::Left,
            club_size: 26.0,
            name_size: 60.0,
            subtitle_size: 26.0,
            muted,
            ..Header::centered(surface, 90.0, ink)
        };
        let mut y = common::draw_header(surface, ctx.crew, &header) + 20.0;
        surface.fill_rect(90.0, y, 48.0, 4.0, p.secondary);
        y += 36.0;

        let label = TextStyle {
            baseline: Baseline::Middle,
            ..TextStyle::new(FontFace::Sans, 26.0, muted)
        };
        let name = TextStyle::new(FontFace::SansBold, 32.0, ink);
        let roster = ctx.roster(self.seat_style());
        for row in roster.all() {
            let cy = y + ROW_HEIGHT / 2.0;
            surface.text(&row.label, 90.0, cy, &label);
            surface.text(&row.name, 250.0, cy, &name);
            y += ROW_HEIGHT;
            primitives::divider(surface, 90.0, w - 90.0, y, 1.0, Color::rgb(229, 231, 235));
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 96, 60.0);
    }
}
