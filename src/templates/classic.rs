//! Classic gradient layout with a single centred roster column.

use crate::color::Color;
use crate::model::LogoPosition;
use crate::primitives;
use crate::surface::{FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const ROW_HEIGHT: f32 = 58.0;
const FOOTER: f32 = 70.0;

/// Vertical gradient in the club colors, one roster line per seat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl Template for Classic {
    fn id(&self) -> &'static str {
        "classic"
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        surface.clear(p.primary);
        surface.linear_gradient(
            (0.0, 0.0, w, h),
            (0.0, 0.0),
            (0.0, h),
            &[(0.0, p.primary), (1.0, p.secondary)],
        );

        let title = p.primary.mix(p.secondary, 0.15).contrasting_text();
        let text = p.primary.mix(p.secondary, 0.5).contrasting_text();
        let header = Header::centered(surface, 70.0, title);
        let mut y = common::draw_header(surface, ctx.crew, &header);
        primitives::diamond_divider(surface, w * 0.2, w * 0.8, y + 10.0, text.with_alpha(0.7));
        y += 50.0;

        let roster = ctx.roster(self.seat_style());
        let style = TextStyle::new(FontFace::SansBold, 34.0, text).centered();
        for row in &roster.seats {
            common::draw_inline_row(surface, row, w / 2.0, y + ROW_HEIGHT / 2.0, &style);
            y += ROW_HEIGHT;
        }

        if roster.extra_count() > 0 {
            y += 12.0;
            primitives::divider(surface, w * 0.35, w * 0.65, y, 2.0, text.with_alpha(0.5));
            y += 12.0;
            let role = TextStyle::new(FontFace::Sans, 30.0, text.with_alpha(0.9)).centered();
            for row in roster.extras() {
                common::draw_inline_row(surface, row, w / 2.0, y + ROW_HEIGHT / 2.0, &role);
                y += ROW_HEIGHT;
            }
        }

        let hull = Color::WHITE.with_alpha(0.18);
        primitives::hull(surface, w / 2.0, h - FOOTER - 36.0, w * 0.6, 18.0, hull);
        let band = p.secondary.darken(0.35);
        common::footer_band(surface, FOOTER, band, Some(&ctx.crew.race_name));
        common::place_icon(surface, ctx.icon, self.icon_position(), 120, 36.0);
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::TopRight
    }
}
