//! Waterline scene: dawn sky, layered water and a shell on the surface.

use crate::color::Color;
use crate::primitives;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const ROW_HEIGHT: f32 = 50.0;

/// Dawn sky over layered water with the shell sitting on the surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Waterline;

impl Template for Waterline {
    fn id(&self) -> &'static str {
        "waterline"
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        let sky = p.primary.darken(0.5);
        let water = p.secondary.darken(0.2);
        surface.clear(sky);
        surface.linear_gradient(
            (0.0, 0.0, w, h),
            (0.0, 0.0),
            (0.0, h),
            &[(0.0, sky), (0.55, p.primary.darken(0.15)), (1.0, water)],
        );

        let water_top = h * 0.8;
        primitives::ripples(surface, water_top, 4, p.secondary.lighten(0.35));
        let shell = Color::rgba(10, 10, 20, 200);
        primitives::hull(surface, w * 0.5, water_top - 8.0, w * 0.7, 20.0, shell);
        for i in 0..6 {
            let x = w * 0.22 + i as f32 * w * 0.11;
            primitives::oar(surface, (x, water_top - 10.0), 1.9, 110.0, shell, p.secondary);
        }

        let mid = p.primary.darken(0.15);
        let title = sky.mix(mid, 0.3).contrasting_text();
        let header = Header::centered(surface, 60.0, title);
        let mut y = common::draw_header(surface, ctx.crew, &header);
        y += 20.0;

        let roster = ctx.roster(self.seat_style());
        let label = TextStyle {
            face: FontFace::SansBold,
            size: 26.0,
            color: p.secondary.lighten(0.55).legible_on(mid),
            align: Align::Right,
            baseline: Baseline::Middle,
        };
        let name = TextStyle::new(FontFace::SansBold, 32.0, mid.contrasting_text());
        let marker = p.secondary.lighten(0.55);
        let gutter = w * 0.4;
        for row in roster.all() {
            let cy = y + ROW_HEIGHT / 2.0;
            if !row.is_seat() {
                surface.fill_rect(gutter - 150.0, y + 4.0, 4.0, ROW_HEIGHT - 8.0, marker);
            }
            surface.text(&row.label, gutter, cy, &label);
            surface.text(&row.name, gutter + 24.0, cy, &name);
            y += ROW_HEIGHT;
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 36.0);
    }
}
