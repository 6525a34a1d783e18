//! Modern dark layout with two-up roster cards.

use crate::color::Color;
use crate::layout::{self, Arrangement, Rect};
use crate::model::LogoPosition;
use crate::primitives;
use crate::seats::SeatLabelStyle;
use crate::surface::{Align, Surface};

use super::common::{self, Header};
use super::{RenderContext, Template};

const CARD_HEIGHT: f32 = 96.0;
const GAP: f32 = 18.0;

/// Dark slate with a fine grid and a two-up card per rower.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modern;

impl Template for Modern {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Compact
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let (w, h) = (surface.width(), surface.height());
        let p = ctx.palette;
        let base = Color::rgb(15, 23, 42);
        surface.clear(base);
        primitives::grid_overlay(surface, 54.0, Color::WHITE.with_alpha(0.05));

        surface.fill_rect(0.0, 0.0, 14.0, h, p.primary);
        surface.fill_rect(14.0, 0.0, 6.0, h, p.secondary);

        let header = Header {
            x: 80.0,
            align: Align::Left,
            ..Header::centered(surface, 64.0, Color::WHITE)
        };
        let mut y = common::draw_header(surface, ctx.crew, &header);
        surface.fill_rect(80.0, y, 120.0, 6.0, p.secondary);
        y += 40.0;

        let roster = ctx.roster(self.seat_style());
        let area = Rect::new(80.0, y, w - 160.0, h - y);
        let grid = Arrangement::Grid { columns: 2 };
        let card_fill = Color::WHITE.with_alpha(0.08);
        let accent = p.primary.lighten(0.35).legible_on(base);
        let count = roster.seats.len();
        let cells = layout::arrange(grid, count, area, CARD_HEIGHT, GAP);
        for (row, cell) in roster.seats.iter().zip(&cells) {
            let r = cell.rect;
            common::draw_card(surface, row, r, card_fill, accent, Color::WHITE);
            surface.fill_rect(r.right() - 10.0, r.y + 20.0, 4.0, CARD_HEIGHT - 40.0, p.secondary);
        }

        let y = y + layout::stack_height(grid, count, CARD_HEIGHT, GAP) + GAP;
        let role_cells = layout::arrange(
            Arrangement::Grid { columns: 2 },
            roster.extra_count(),
            Rect::new(80.0, y, w - 160.0, h - y),
            CARD_HEIGHT * 0.85,
            GAP,
        );
        let role_fill = p.secondary.with_alpha(0.25);
        let role_label = Color::WHITE.with_alpha(0.7);
        for (row, cell) in roster.extras().zip(&role_cells) {
            common::draw_card(surface, row, cell.rect, role_fill, role_label, Color::WHITE);
        }

        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 48.0);
    }

    fn icon_position(&self) -> LogoPosition {
        LogoPosition::TopRight
    }
}
