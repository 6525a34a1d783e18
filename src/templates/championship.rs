//! Championship layout under a radial spotlight with a gold seal.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::model::LogoPosition;
use crate::primitives;
use crate::seats::SeatLabelStyle;
use crate::surface::{Align, Baseline, FontFace, Surface, TextStyle};

use super::common;
use super::{RenderContext, Template};

const ROW_HEIGHT: f32 = 84.0;
const GAP: f32 = 10.0;

/// Radial spotlight, a gold seal inside a laurel, two halved columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Championship;

impl Template for Championship {
    fn id(&self) -> &'static str {
        "championship"
    }

    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Formal
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::TopRight
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        let deep = p.primary.darken(0.55);
        let spot = p.primary.lighten(0.1);
        let mid = p.primary.darken(0.3);
        surface.clear(deep);
        surface.radial_gradient(
            (0.0, 0.0, w, h),
            (w / 2.0, h * 0.3),
            w * 0.85,
            &[(0.0, spot), (0.6, mid), (1.0, deep)],
        );
        let title = spot.contrasting_text();

        let gold = Color::GOLD;
        primitives::laurel(surface, w / 2.0, 120.0, 84.0, gold.with_alpha(0.85));
        primitives::seal(surface, w / 2.0, 120.0, 64.0, p.secondary, gold);
        surface.text(
            &ctx.crew.boat_type.value,
            w / 2.0,
            120.0,
            &TextStyle::new(FontFace::SerifBold, 34.0, p.secondary.contrasting_text()).centered(),
        );

        let mut y = 230.0;
        let club = ctx.crew.club_name.trim().to_uppercase();
        if !club.is_empty() {
            let style = TextStyle::new(FontFace::SansBold, 28.0, gold.legible_on(spot));
            surface.text(&club, w / 2.0, y, &style.centered());
            y += 46.0;
        }
        let crew_name = ctx.crew.name.trim();
        let name_size =
            common::fit_size(surface, crew_name, FontFace::SerifBold, 66.0, 28.0, w - 160.0);
        surface.text(
            crew_name,
            w / 2.0,
            y + 30.0,
            &TextStyle::new(FontFace::SerifBold, name_size, title).centered(),
        );
        y += 82.0;
        let subtitle = ctx.crew.subtitle();
        if !subtitle.is_empty() {
            let style = TextStyle::new(FontFace::Sans, 28.0, title.with_alpha(0.85));
            surface.text(&subtitle, w / 2.0, y, &style.centered());
        }
        y += 34.0;
        primitives::diamond_divider(surface, w * 0.2, w * 0.8, y, gold);
        y += 30.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(90.0, y, w - 180.0, h - y);
        let label = TextStyle {
            baseline: Baseline::Top,
            ..TextStyle::new(FontFace::SansBold, 22.0, gold.legible_on(mid))
        };
        let name = TextStyle {
            baseline: Baseline::Top,
            align: Align::Left,
            ..TextStyle::new(FontFace::SerifBold, 32.0, mid.contrasting_text())
        };
        let count = roster.seats.len();
        let cells = layout::arrange(Arrangement::Halved, count, area, ROW_HEIGHT, GAP);
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            surface.fill_rect(r.x, r.y + 8.0, 4.0, r.h - 16.0, gold);
            surface.text(&row.label.to_uppercase(), r.x + 20.0, r.y + 10.0, &label);
            surface.text(&row.name, r.x + 20.0, r.y + 38.0, &name);
        }

        let y = y + layout::stack_height(Arrangement::Halved, count, ROW_HEIGHT, GAP) + 16.0;
        let role = TextStyle::new(FontFace::SerifBold, 30.0, mid.contrasting_text()).centered();
        for (i, row) in roster.extras().enumerate() {
            common::draw_inline_row(surface, row, w / 2.0, y + 24.0 + i as f32 * 50.0, &role);
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 40.0);
    }
}
