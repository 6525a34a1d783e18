//! Regatta poster with a ribbon banner and pennants.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::primitives;
use crate::surface::{Baseline, FontFace, Surface, TextStyle};

use super::common;
use super::{RenderContext, Template};

const ROW_HEIGHT: f32 = 74.0;
const GAP: f32 = 14.0;

/// Race-day poster: striped field, ribbon banner, pennants, two columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regatta;

impl Template for Regatta {
    fn id(&self) -> &'static str {
        "regatta"
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        surface.clear(p.primary);
        let field = Rect::new(0.0, 0.0, w, h);
        primitives::stripes(surface, field, 64.0, 26.0, p.secondary.with_alpha(0.28));

        primitives::pennant(surface, 70.0, 40.0, 90.0, 50.0, p.secondary);
        primitives::pennant(surface, w - 160.0, 40.0, 90.0, 50.0, p.secondary);

        let header = p.primary.contrasting_text();
        let club = ctx.crew.club_name.trim().to_uppercase();
        if !club.is_empty() {
            surface.text(
                &club,
                w / 2.0,
                60.0,
                &TextStyle::new(FontFace::SansBold, 32.0, header).centered(),
            );
        }

        let ribbon = Rect::new(w * 0.14, 110.0, w * 0.72, 96.0);
        primitives::banner(surface, ribbon, Color::WHITE, p.secondary.darken(0.25));
        let crew_name = ctx.crew.name.trim();
        let name_size =
            common::fit_size(surface, crew_name, FontFace::SansBold, 56.0, 24.0, ribbon.w - 40.0);
        surface.text(
            crew_name,
            ribbon.center_x(),
            ribbon.center_y(),
            &TextStyle::new(FontFace::SansBold, name_size, p.primary.legible_on(Color::WHITE))
                .centered(),
        );

        let subtitle = ctx.crew.subtitle();
        let mut y = ribbon.bottom() + 60.0;
        if !subtitle.is_empty() {
            surface.text(
                &subtitle,
                w / 2.0,
                y,
                &TextStyle::new(FontFace::Sans, 30.0, header).centered(),
            );
        }
        y += 50.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(70.0, y, w - 140.0, h - y);
        let count = roster.seats.len();
        let cells = layout::arrange(Arrangement::Alternating, count, area, ROW_HEIGHT, GAP);
        let box_fill = Color::rgba(0, 0, 0, 110);
        let box_bg = p.primary.darken(110.0 / 255.0);
        let label = TextStyle {
            baseline: Baseline::Middle,
            ..TextStyle::new(FontFace::SansBold, 26.0, p.secondary.lighten(0.3).legible_on(box_bg))
        };
        let name = TextStyle::new(FontFace::SansBold, 30.0, box_bg.contrasting_text());
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            surface.fill_rounded_rect(r, 10.0, box_fill);
            common::draw_split_row(surface, row, r.inset(18.0, 0.0), 110.0, &label, &name);
        }

        let y = y + layout::stack_height(Arrangement::Alternating, count, ROW_HEIGHT, GAP) + GAP;
        let extra_bg = p.primary.mix(p.secondary, 0.55);
        let role = TextStyle::new(FontFace::SansBold, 30.0, extra_bg.contrasting_text()).centered();
        let extra_h = ROW_HEIGHT * 0.8;
        for (i, row) in roster.extras().enumerate() {
            let r = Rect::new(70.0, y + i as f32 * (extra_h + GAP), w - 140.0, extra_h);
            surface.fill_rounded_rect(r, 10.0, p.secondary.with_alpha(0.55));
            common::draw_inline_row(surface, row, r.center_x(), r.center_y(), &role);
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 120, 40.0);
    }
}
