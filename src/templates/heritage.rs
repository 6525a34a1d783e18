//! Heritage layout on parchment with a heraldic crest.

use crate::color::Color;
use crate::model::LogoPosition;
use crate::primitives;
use crate::seats::SeatLabelStyle;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const PARCHMENT: Color = Color::rgb(245, 238, 220);
const ROW_HEIGHT: f32 = 52.0;

/// Parchment, double-ruled frame, a quartered crest and formal seat names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heritage;

impl Template for Heritage {
    fn id(&self) -> &'static str {
        "heritage"
    }

    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Formal
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::BottomLeft
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let w = surface.width();
        let p = ctx.palette;
        surface.clear(PARCHMENT);
        surface.radial_gradient(
            (0.0, 0.0, w, surface.height()),
            (w / 2.0, surface.height() / 2.0),
            w * 0.8,
            &[(0.55, Color::TRANSPARENT), (1.0, Color::rgba(120, 90, 40, 60))],
        );

        let ink = p.primary.legible_on(PARCHMENT);
        primitives::ornamental_border(surface, 28.0, ink);
        let crest = (p.primary, p.secondary);
        primitives::heraldic_crest(surface, w / 2.0, 70.0, 96.0, 116.0, crest.0, crest.1);

        let header = Header {
            face: FontFace::SerifBold,
            muted: ink.with_alpha(0.75),
            ..Header::centered(surface, 206.0, ink)
        };
        let mut y = common::draw_header(surface, ctx.crew, &header);
        primitives::diamond_divider(surface, w * 0.25, w * 0.75, y, ink);
        y += 28.0;

        let label = TextStyle {
            face: FontFace::SerifBold,
            size: 28.0,
            color: p.secondary.mix(ink, 0.4).legible_on(PARCHMENT),
            align: Align::Right,
            baseline: Baseline::Middle,
        };
        let name = TextStyle::new(FontFace::SerifBold, 32.0, ink);
        let gutter_x = w * 0.42;

        let roster = ctx.roster(self.seat_style());
        for row in &roster.seats {
            let cy = y + ROW_HEIGHT / 2.0;
            surface.text(&row.label, gutter_x, cy, &label);
            surface.text(&row.name, gutter_x + 28.0, cy, &name);
            y += ROW_HEIGHT;
        }

        if roster.extra_count() > 0 {
            primitives::divider(surface, w * 0.3, w * 0.7, y + 10.0, 1.5, ink.with_alpha(0.6));
            y += 20.0;
            for row in roster.extras() {
                let cy = y + ROW_HEIGHT / 2.0;
                surface.text(&row.label, gutter_x, cy, &label);
                surface.text(&row.name, gutter_x + 28.0, cy, &name);
                y += ROW_HEIGHT;
            }
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 60.0);
    }
}
