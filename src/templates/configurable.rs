//! The composable template: any background, seat display, boat motif,
//! column layout and logo corner.

use crate::color::{Color, Palette};
use crate::layout::{self, Arrangement, Rect};
use crate::model::{Background, BoatStyle, LogoPosition, NameDisplay, TemplateConfig, TextLayout};
use crate::primitives;
use crate::seats::RosterRow;
use crate::surface::{Baseline, FontFace, Surface, TextStyle};

use super::common::{self, Header};
use super::{RenderContext, Template};

const GAP: f32 = 14.0;
const MOTIF_BAND: f32 = 130.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configurable {
    pub background: Background,
    pub name_display: NameDisplay,
    pub boat_style: BoatStyle,
    pub text_layout: TextLayout,
    pub logo: LogoPosition,
}

impl Configurable {
    pub fn from_config(config: &TemplateConfig) -> Self {
        Self {
            background: config.background,
            name_display: config.name_display,
            boat_style: config.boat_style,
            text_layout: config.text_layout,
            logo: config.logo,
        }
    }

    fn row_height(&self) -> f32 {
        match self.name_display {
            NameDisplay::Labeled => 54.0,
            NameDisplay::Badges => 64.0,
            NameDisplay::Cards => 92.0,
            NameDisplay::Banners => 60.0,
        }
    }

    /// Paint the background and return the color text sits on.
    fn paint_background(
        &self,
        surface: &mut Surface,
        p: Palette,
        ctx: &mut RenderContext<'_>,
    ) -> Color {
        let (w, h) = (surface.width(), surface.height());
        let full = (0.0, 0.0, w, h);
        match self.background {
            Background::Solid => {
                surface.clear(p.primary);
                p.primary
            }
            Background::Gradient => {
                surface.clear(p.primary);
                let stops = [(0.0, p.primary), (1.0, p.secondary)];
                surface.linear_gradient(full, (0.0, 0.0), (w * 0.3, h), &stops);
                p.primary.mix(p.secondary, 0.5)
            }
            Background::Radial => {
                let edge = p.primary.darken(0.45);
                surface.clear(edge);
                let stops = [(0.0, p.secondary), (1.0, edge)];
                surface.radial_gradient(full, (w / 2.0, h * 0.35), w * 0.8, &stops);
                p.secondary.mix(edge, 0.5)
            }
            Background::Stripes => {
                surface.clear(p.primary);
                let stripe = p.secondary.with_alpha(0.25);
                primitives::stripes(surface, Rect::new(0.0, 0.0, w, h), 60.0, 22.0, stripe);
                p.primary.mix(p.secondary, 0.15)
            }
            Background::Grid => {
                let base = p.primary.darken(0.6);
                surface.clear(base);
                primitives::grid_overlay(surface, 48.0, p.secondary.with_alpha(0.12));
                base
            }
            Background::Water => {
                surface.clear(p.primary);
                let stops = [(0.0, p.primary.darken(0.3)), (1.0, p.secondary)];
                surface.linear_gradient(full, (0.0, 0.0), (0.0, h), &stops);
                primitives::ripples(surface, h * 0.82, 3, Color::WHITE);
                p.primary.darken(0.15)
            }
            Background::Texture => {
                surface.clear(p.primary);
                let count = ((w * h) / 300.0) as usize;
                let grain = p.primary.contrasting_text();
                let area = Rect::new(0.0, 0.0, w, h);
                primitives::noise_speckle(surface, area, count, &mut ctx.rng, grain);
                p.primary
            }
        }
    }

    fn draw_row(&self, surface: &mut Surface, row: &RosterRow, r: Rect, p: Palette, text: Color) {
        match self.name_display {
            NameDisplay::Labeled => {
                let style = TextStyle::new(FontFace::SansBold, 30.0, text);
                common::draw_inline_row(surface, row, r.x + 12.0, r.center_y(), &style);
            }
            NameDisplay::Badges => {
                let radius = r.h * 0.42;
                let cx = r.x + radius + 4.0;
                let fill = p.secondary;
                let ink = fill.contrasting_text();
                primitives::badge(surface, (cx, r.center_y()), radius, fill, &row.label, ink);
                let name = TextStyle::new(FontFace::SansBold, 30.0, text);
                surface.text(&row.name, cx + radius + 18.0, r.center_y(), &name);
            }
            NameDisplay::Cards => {
                let fill = if text == Color::WHITE {
                    Color::WHITE.with_alpha(0.12)
                } else {
                    Color::BLACK.with_alpha(0.07)
                };
                common::draw_card(surface, row, r, fill, p.secondary.mix(text, 0.35), text);
            }
            NameDisplay::Banners => {
                let tail = r.h * 0.6;
                let body = Rect::new(r.x + tail, r.y, r.w - 2.0 * tail, r.h * 0.8);
                primitives::banner(surface, body, p.secondary, p.secondary.darken(0.35));
                let style = TextStyle {
                    baseline: Baseline::Middle,
                    ..TextStyle::new(FontFace::SansBold, 26.0, p.secondary.contrasting_text())
                }
                .centered();
                common::draw_inline_row(surface, row, body.center_x(), body.center_y(), &style);
            }
        }
    }

    fn draw_motif(&self, surface: &mut Surface, ctx: &RenderContext<'_>, text: Color) {
        let (w, h) = (surface.width(), surface.height());
        let cy = h - MOTIF_BAND / 2.0;
        let p = ctx.palette;
        match self.boat_style {
            BoatStyle::None => {}
            BoatStyle::Silhouette => {
                primitives::hull(surface, w / 2.0, cy, w * 0.55, 22.0, text.with_alpha(0.35));
            }
            BoatStyle::Oars => {
                let (shaft, length) = (text.with_alpha(0.6), MOTIF_BAND * 1.1);
                primitives::crossed_oars(surface, w / 2.0, cy, length, shaft, p.secondary);
            }
            BoatStyle::SeatMap => {
                let coxed = ctx.crew.boat_type.is_coxed() || ctx.crew.cox().is_some();
                let area = Rect::new(w * 0.225, cy - 13.0, w * 0.55, 26.0);
                primitives::seat_map(
                    surface,
                    area,
                    ctx.crew.crew_names.len(),
                    coxed,
                    text.with_alpha(0.3),
                    p.secondary,
                );
            }
        }
    }
}

impl Template for Configurable {
    fn id(&self) -> &'static str {
        "custom"
    }

    fn icon_position(&self) -> LogoPosition {
        self.logo
    }

    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>) {
        let w = surface.width();
        let p = ctx.palette;
        let base = self.paint_background(surface, p, ctx);
        let text = base.contrasting_text();

        let header = Header::centered(surface, 64.0, text);
        let mut y = common::draw_header(surface, ctx.crew, &header);
        y += 30.0;

        let roster = ctx.roster(self.seat_style());
        let arrangement = Arrangement::from(self.text_layout);
        let row_h = self.row_height();
        let area = Rect::new(80.0, y, w - 160.0, surface.height() - y);
        let cells = layout::arrange(arrangement, roster.seats.len(), area, row_h, GAP);
        for (row, cell) in roster.seats.iter().zip(&cells) {
            self.draw_row(surface, row, cell.rect, p, text);
        }

        let mut y = y + layout::stack_height(arrangement, roster.seats.len(), row_h, GAP) + GAP;
        for row in roster.extras() {
            let r = Rect::new(80.0, y, w - 160.0, row_h);
            self.draw_row(surface, row, r, p, text);
            y += row_h + GAP;
        }

        self.draw_motif(surface, ctx, text);
        common::place_icon(surface, ctx.icon, self.icon_position(), 110, 36.0);
    }
}
