//! Letterpress layout on sepia stock.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::primitives;
use crate::seats::SeatLabelStyle;
use crate::surface::{Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const SEPIA: Color = Color::rgb(236, 224, 200);
const ROW_HEIGHT: f32 = 70.0;
const GAP: f32 = 10.0;

/// Letterpress look: sepia stock with ink speckle and a ruled frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vintage;

impl Template for Vintage {
    fn id(&self) -> &'static str {
        "vintage"
    }

    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Formal
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        surface.clear(SEPIA);
        let ink = p.primary.mix(Color::rgb(60, 40, 20), 0.55).legible_on(SEPIA);
        let speckle = ((w * h) / 260.0) as usize;
        let stock = Rect::new(0.0, 0.0, w, h);
        primitives::noise_speckle(surface, stock, speckle, &mut ctx.rng, Color::rgb(90, 60, 30));

        surface.stroke_rect(36.0, 36.0, w - 72.0, h - 72.0, 6.0, ink);
        surface.stroke_rect(52.0, 52.0, w - 104.0, h - 104.0, 2.0, ink);

        let header = Header {
            face: FontFace::SerifBold,
            muted: ink.with_alpha(0.8),
            ..Header::centered(surface, 96.0, ink)
        };
        let mut y = common::draw_header(surface, ctx.crew, &header);
        primitives::diamond_divider(surface, w * 0.22, w * 0.78, y, ink);
        y += 34.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(100.0, y, w - 200.0, h - y);
        let count = roster.seats.len();
        let cells = layout::arrange(Arrangement::Alternating, count, area, ROW_HEIGHT, GAP);
        let label = TextStyle {
            baseline: Baseline::Top,
            ..TextStyle::new(FontFace::SerifBold, 22.0, p.secondary.mix(ink, 0.5).legible_on(SEPIA))
        }
        .centered();
        let name = TextStyle {
            baseline: Baseline::Top,
            ..TextStyle::new(FontFace::SerifBold, 30.0, ink)
        }
        .centered();
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            surface.text(&row.label, r.center_x(), r.y + 4.0, &label);
            surface.text(&row.name, r.center_x(), r.y + 32.0, &name);
        }

        let mut y =
            y + layout::stack_height(Arrangement::Alternating, count, ROW_HEIGHT, GAP) + 8.0;
        if roster.extra_count() > 0 {
            primitives::divider(surface, w * 0.35, w * 0.65, y, 1.5, ink);
            y += 20.0;
        }
        let role = TextStyle::new(FontFace::SerifBold, 28.0, ink).centered();
        for row in roster.extras() {
            common::draw_inline_row(surface, row, w / 2.0, y + 20.0, &role);
            y += 46.0;
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 100, 80.0);
    }
}
