//! Night-mode layout with a split-rate bar graph.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::model::LogoPosition;
use crate::primitives;
use crate::seats::SeatLabelStyle;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const ROW_HEIGHT: f32 = 64.0;
const GAP: f32 = 12.0;
const BARS: usize = 36;

/// Night-mode lineup with a split-rate bar graph along the bottom.
///
/// Bar heights come from the context's generator, so a fixed seed gives a
/// fixed image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse;

impl Template for Pulse {
    fn id(&self) -> &'static str {
        "pulse"
    }

    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Compact
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::TopRight
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        let base = Color::rgb(9, 9, 11);
        surface.clear(base);
        primitives::grid_overlay(surface, 36.0, p.secondary.with_alpha(0.07));

        let bars = Rect::new(0.0, h - 150.0, w, 150.0);
        primitives::equalizer_bars(surface, bars, BARS, &mut ctx.rng, p.secondary);

        let header = Header {
            x: 70.0,
            align: Align::Left,
            muted: p.secondary.lighten(0.2).legible_on(base),
            ..Header::centered(surface, 60.0, Color::WHITE)
        };
        let mut y = common::draw_header(surface, ctx.crew, &header);
        primitives::divider(surface, 70.0, w - 70.0, y + 6.0, 2.0, p.primary.lighten(0.2));
        y += 34.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(70.0, y, w - 140.0, h - y);
        let label = TextStyle {
            baseline: Baseline::Middle,
            ..TextStyle::new(FontFace::SansBold, 24.0, p.secondary.lighten(0.25).legible_on(base))
        };
        let name = TextStyle::new(FontFace::SansBold, 30.0, Color::WHITE);
        let count = roster.seats.len();
        let cells = layout::arrange(Arrangement::Halved, count, area, ROW_HEIGHT, GAP);
        let outline = p.primary.lighten(0.15).with_alpha(0.7);
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            surface.stroke_rounded_rect(r, 12.0, 2.0, outline);
            common::draw_split_row(surface, row, r.inset(18.0, 0.0), 84.0, &label, &name);
        }

        let mut y = y + layout::stack_height(Arrangement::Halved, count, ROW_HEIGHT, GAP) + GAP;
        for row in roster.extras() {
            let r = Rect::new(70.0, y, w - 140.0, ROW_HEIGHT);
            surface.fill_rounded_rect(r, 12.0, p.primary.with_alpha(0.35));
            common::draw_split_row(surface, row, r.inset(18.0, 0.0), 120.0, &label, &name);
            y += ROW_HEIGHT + GAP;
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 100, 40.0);
    }
}
