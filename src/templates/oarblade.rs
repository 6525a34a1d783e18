//! Oar-blade layout on a two-tone diagonal field.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::primitives;
use crate::surface::{Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const CELL_HEIGHT: f32 = 92.0;
const GAP: f32 = 16.0;
/// White text keeps 4.5:1 on this over any field color.
const SHADE: Color = Color::rgba(0, 0, 0, 140);

/// Two-tone diagonal field; every rower gets a blade in the club colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct OarBlade;

impl Template for OarBlade {
    fn id(&self) -> &'static str {
        "oarblade"
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        let field = p.primary.darken(0.2);
        surface.clear(field);
        // Diagonal stays below the header block.
        let top = h * 0.28;
        surface.fill_polygon(&[(w, top), (w, h), (w * 0.2, h)], p.secondary.darken(0.35));
        surface.fill_polygon(
            &[(w, top * 0.86), (w, top), (w * 0.2, h), (w * 0.14, h)],
            Color::WHITE.with_alpha(0.12),
        );

        let header = Header::centered(surface, 64.0, field.contrasting_text());
        let mut y = common::draw_header(surface, ctx.crew, &header);
        y += 24.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(70.0, y, w - 140.0, h - y);
        let grid = Arrangement::Grid { columns: 2 };
        let label = TextStyle {
            baseline: Baseline::Top,
            ..TextStyle::new(FontFace::SansBold, 22.0, Color::WHITE.with_alpha(0.75))
        };
        let name = TextStyle {
            baseline: Baseline::Top,
            ..TextStyle::new(FontFace::SansBold, 30.0, Color::WHITE)
        };
        let count = roster.seats.len();
        let cells = layout::arrange(grid, count, area, CELL_HEIGHT, GAP);
        let (blade, tip) = (p.primary.lighten(0.25), p.secondary.lighten(0.25));
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            surface.fill_rounded_rect(r, 14.0, SHADE);
            primitives::blade_icon(surface, r.x + 16.0, r.center_y(), 90.0, 56.0, blade, tip);
            surface.text(&row.label, r.x + 124.0, r.y + 14.0, &label);
            surface.text(&row.name, r.x + 124.0, r.y + 44.0, &name);
        }

        let mut y = y + layout::stack_height(grid, count, CELL_HEIGHT, GAP) + GAP;
        let role = TextStyle::new(FontFace::SansBold, 30.0, Color::WHITE).centered();
        for row in roster.extras() {
            surface.fill_rounded_rect(Rect::new(70.0, y, w - 140.0, 60.0), 14.0, SHADE);
            common::draw_inline_row(surface, row, w / 2.0, y + 30.0, &role);
            y += 60.0 + GAP;
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 36.0);
    }
}
