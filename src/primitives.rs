//! Decorative shapes shared by the templates.
//!
//! Everything here is a stateless function of a surface and parameters.
//! Anything random takes the generator explicitly.

use rand::Rng;
use std::f32::consts::{PI, TAU};
use tiny_skia::{Path, PathBuilder};

use crate::color::Color;
use crate::layout::Rect;
use crate::surface::{FontFace, Surface, TextStyle};

fn rotate(p: (f32, f32), angle: f32, origin: (f32, f32)) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (origin.0 + p.0 * c - p.1 * s, origin.1 + p.0 * s + p.1 * c)
}

pub fn divider(surface: &mut Surface, x0: f32, x1: f32, y: f32, thickness: f32, color: Color) {
    surface.fill_rect(x0, y - thickness / 2.0, x1 - x0, thickness, color);
}

/// A rule with a small diamond at its midpoint.
pub fn diamond_divider(surface: &mut Surface, x0: f32, x1: f32, y: f32, color: Color) {
    let mid = (x0 + x1) / 2.0;
    divider(surface, x0, mid - 14.0, y, 2.0, color);
    divider(surface, mid + 14.0, x1, y, 2.0, color);
    surface.fill_polygon(
        &[(mid, y - 8.0), (mid + 8.0, y), (mid, y + 8.0), (mid - 8.0, y)],
        color,
    );
}

/// Ribbon banner: a body with notched tails tucked behind each end.
pub fn banner(surface: &mut Surface, rect: Rect, fill: Color, tail: Color) {
    let tail_w = rect.h * 0.9;
    let drop = rect.h * 0.25;
    let notch = rect.h * 0.35;
    let (top, bottom) = (rect.y + drop, rect.bottom() + drop);
    surface.fill_polygon(
        &[
            (rect.x + tail_w * 0.4, top),
            (rect.x - tail_w * 0.6, top),
            (rect.x - tail_w * 0.6 + notch, (top + bottom) / 2.0),
            (rect.x - tail_w * 0.6, bottom),
            (rect.x + tail_w * 0.4, bottom),
        ],
        tail,
    );
    surface.fill_polygon(
        &[
            (rect.right() - tail_w * 0.4, top),
            (rect.right() + tail_w * 0.6, top),
            (rect.right() + tail_w * 0.6 - notch, (top + bottom) / 2.0),
            (rect.right() + tail_w * 0.6, bottom),
            (rect.right() - tail_w * 0.4, bottom),
        ],
        tail,
    );
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h, fill);
}

/// Outline of a heater shield: flat top, straight flanks, curved to a point.
pub fn shield_outline(cx: f32, top: f32, w: f32, h: f32) -> Option<Path> {
    let (l, r) = (cx - w / 2.0, cx + w / 2.0);
    let shoulder = top + h * 0.45;
    let mut pb = PathBuilder::new();
    pb.move_to(l, top);
    pb.line_to(r, top);
    pb.line_to(r, shoulder);
    pb.quad_to(r, top + h * 0.85, cx, top + h);
    pb.quad_to(l, top + h * 0.85, l, shoulder);
    pb.close();
    pb.finish()
}

pub fn shield(
    surface: &mut Surface,
    cx: f32,
    top: f32,
    w: f32,
    h: f32,
    fill: Color,
    border: Color,
) {
    let inset = (w * 0.06).max(3.0);
    let outer = shield_outline(cx, top, w, h);
    let inner = shield_outline(cx, top + inset, w - 2.0 * inset, h - 2.0 * inset);
    for (path, color) in [(outer, border), (inner, fill)] {
        if let Some(path) = path {
            surface.fill_path(&path, color);
        }
    }
}

/// Quartered shield in the two club colors with a chevron.
pub fn heraldic_crest(
    surface: &mut Surface,
    cx: f32,
    top: f32,
    w: f32,
    h: f32,
    a: Color,
    b: Color,
) {
    shield(surface, cx, top, w, h, a, Color::GOLD);
    let inset = (w * 0.06).max(3.0);
    let inner_top = top + inset;
    let inner_w = w - 2.0 * inset;
    surface.fill_rect(cx - inner_w / 2.0, inner_top, inner_w / 2.0, h * 0.42, b);
    let chevron_y = top + h * 0.48;
    surface.fill_polygon(
        &[
            (cx - inner_w / 2.0, chevron_y + h * 0.12),
            (cx, chevron_y - h * 0.1),
            (cx + inner_w / 2.0, chevron_y + h * 0.12),
            (cx + inner_w / 2.0, chevron_y + h * 0.24),
            (cx, chevron_y + h * 0.02),
            (cx - inner_w / 2.0, chevron_y + h * 0.24),
        ],
        Color::GOLD,
    );
}

/// Starburst polygon with `points` rays.
pub fn starburst(cx: f32, cy: f32, outer: f32, inner: f32, points: usize) -> Vec<(f32, f32)> {
    let n = points.max(3) * 2;
    (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * TAU - PI / 2.0;
            let r = if i % 2 == 0 { outer } else { inner };
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

/// A medal seal: serrated edge, solid face, inner ring.
pub fn seal(surface: &mut Surface, cx: f32, cy: f32, r: f32, fill: Color, ring: Color) {
    surface.fill_polygon(&starburst(cx, cy, r, r * 0.88, 24), ring);
    surface.fill_circle(cx, cy, r * 0.82, fill);
    surface.stroke_circle(cx, cy, r * 0.72, 3.0, ring);
}

/// A ring of small leaves either side of a point, open at the top.
pub fn laurel(surface: &mut Surface, cx: f32, cy: f32, r: f32, color: Color) {
    for side in [-1.0f32, 1.0] {
        for i in 0..9 {
            let angle = PI / 2.0 + side * (0.35 + i as f32 * 0.26);
            let (x, y) = (cx + r * angle.cos(), cy + r * angle.sin());
            surface.fill_circle(x, y, 7.0 - i as f32 * 0.35, color);
        }
    }
}

/// Diagonal stripes across `rect`, clipped to it.
pub fn stripes(surface: &mut Surface, rect: Rect, spacing: f32, width: f32, color: Color) {
    let mut offset = -rect.h;
    while offset < rect.w {
        let x0 = rect.x + offset;
        let poly = clip_band(rect, x0, width);
        surface.fill_polygon(&poly, color);
        offset += spacing;
    }
}

/// A 45-degree band starting at `x0` on the bottom edge, clipped to `rect`.
fn clip_band(rect: Rect, x0: f32, width: f32) -> Vec<(f32, f32)> {
    // Parameterise the band by horizontal offset along the bottom edge; each
    // row y is shifted right by (bottom - y).
    let rows = [rect.y, rect.bottom()];
    let mut pts = Vec::with_capacity(4);
    for (i, &y) in rows.iter().enumerate() {
        let shift = rect.bottom() - y;
        let (a, b) = (
            (x0 + shift).clamp(rect.x, rect.right()),
            (x0 + shift + width).clamp(rect.x, rect.right()),
        );
        if i == 0 {
            pts.push((a, y));
            pts.push((b, y));
        } else {
            pts.push((b, y));
            pts.push((a, y));
        }
    }
    pts
}

/// Thin square grid over the whole surface.
pub fn grid_overlay(surface: &mut Surface, spacing: f32, color: Color) {
    let (w, h) = (surface.width(), surface.height());
    let mut x = spacing;
    while x < w {
        surface.fill_rect(x, 0.0, 1.0, h, color);
        x += spacing;
    }
    let mut y = spacing;
    while y < h {
        surface.fill_rect(0.0, y, w, 1.0, color);
        y += spacing;
    }
}

/// One filled sine wave band from `baseline` down to the bottom edge.
pub fn wave(
    surface: &mut Surface,
    baseline: f32,
    amplitude: f32,
    wavelength: f32,
    phase: f32,
    color: Color,
) {
    let (w, h) = (surface.width(), surface.height());
    let mut points = Vec::new();
    let step = 8.0;
    let mut x = 0.0;
    while x <= w + step {
        let y = baseline + amplitude * (x / wavelength * TAU + phase).sin();
        points.push((x, y));
        x += step;
    }
    points.push((w + step, h));
    points.push((0.0, h));
    surface.fill_polygon(&points, color);
}

/// Stacked translucent waves rising from the bottom.
pub fn ripples(surface: &mut Surface, top: f32, layers: usize, color: Color) {
    let h = surface.height();
    let band = (h - top) / layers.max(1) as f32;
    for i in 0..layers {
        let baseline = top + i as f32 * band;
        let alpha = 0.18 + 0.12 * i as f32;
        wave(
            surface,
            baseline,
            10.0 + 4.0 * i as f32,
            220.0 + 60.0 * i as f32,
            i as f32 * 1.3,
            color.with_alpha(alpha.min(0.7)),
        );
    }
}

/// Scatter `count` single-pixel specks over `rect`.
pub fn noise_speckle<R: Rng + ?Sized>(
    surface: &mut Surface,
    rect: Rect,
    count: usize,
    rng: &mut R,
    color: Color,
) {
    for _ in 0..count {
        let x = rect.x + rng.gen_range(0.0..rect.w.max(1.0));
        let y = rect.y + rng.gen_range(0.0..rect.h.max(1.0));
        let alpha = rng.gen_range(0.08..0.35);
        let size = if rng.gen_bool(0.15) { 2.0 } else { 1.0 };
        surface.fill_rect(x.floor(), y.floor(), size, size, color.with_alpha(alpha));
    }
}

/// Vertical bars of random height standing on the bottom of `rect`.
pub fn equalizer_bars<R: Rng + ?Sized>(
    surface: &mut Surface,
    rect: Rect,
    bars: usize,
    rng: &mut R,
    color: Color,
) {
    let bars = bars.max(1);
    let slot = rect.w / bars as f32;
    for i in 0..bars {
        let level = rng.gen_range(0.15..1.0);
        let bar_h = rect.h * level;
        let x = rect.x + i as f32 * slot + slot * 0.15;
        let shade = color.with_alpha(0.35 + 0.5 * level);
        surface.fill_rect(x, rect.bottom() - bar_h, slot * 0.7, bar_h, shade);
    }
}

/// Racing shell seen from the side: a long lens, pointed at both ends.
pub fn hull_outline(cx: f32, cy: f32, length: f32, depth: f32) -> Option<Path> {
    let (bow, stern) = (cx + length / 2.0, cx - length / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(stern, cy);
    pb.quad_to(cx, cy - depth * 0.6, bow, cy);
    pb.quad_to(cx, cy + depth * 1.4, stern, cy);
    pb.close();
    pb.finish()
}

pub fn hull(surface: &mut Surface, cx: f32, cy: f32, length: f32, depth: f32, color: Color) {
    if let Some(path) = hull_outline(cx, cy, length, depth) {
        surface.fill_path(&path, color);
    }
}

/// Hull spanning `area` with one dot per rower and an optional cox seat at
/// the stern.
pub fn seat_map(
    surface: &mut Surface,
    area: Rect,
    seats: usize,
    coxed: bool,
    hull_color: Color,
    dot_color: Color,
) {
    let (cx, cy, length) = (area.center_x(), area.center_y(), area.w);
    hull(surface, cx, cy, length, area.h, hull_color);
    let usable = length * 0.7;
    let seats = seats.max(1);
    let spacing = usable / seats as f32;
    let start = cx + usable / 2.0 - spacing / 2.0;
    for i in 0..seats {
        surface.fill_circle(start - i as f32 * spacing, cy + 4.0, 6.0, dot_color);
    }
    if coxed {
        surface.stroke_circle(cx - length * 0.42, cy + 4.0, 7.0, 2.0, dot_color);
    }
}

/// An oar: shaft from `grip` along `angle`, spoon blade at the far end.
pub fn oar(
    surface: &mut Surface,
    grip: (f32,
    f32),
    angle: f32,
    length: f32,
    shaft: Color,
    blade: Color,
) {
    let blade_len = length * 0.28;
    let shaft_len = length - blade_len;
    let end = rotate((shaft_len, 0.0), angle, grip);
    surface.line(grip, end, 5.0, shaft);
    let bw = blade_len * 0.34;
    let blade_pts: Vec<_> = [
        (shaft_len - 4.0, -3.0),
        (shaft_len + blade_len * 0.3, -bw * 0.8),
        (shaft_len + blade_len, -bw),
        (shaft_len + blade_len, bw * 0.6),
        (shaft_len + blade_len * 0.3, bw * 0.5),
        (shaft_len - 4.0, 3.0),
    ]
    .iter()
    .map(|&p| rotate(p, angle, grip))
    .collect();
    surface.fill_polygon(&blade_pts, blade);
}

/// Two oars crossed in an X centred on `(cx, cy)`.
pub fn crossed_oars(
    surface: &mut Surface,
    cx: f32,
    cy: f32,
    length: f32,
    shaft: Color,
    blade: Color,
) {
    let half = length / 2.0;
    for angle in [-PI / 4.0, -3.0 * PI / 4.0] {
        let grip = rotate((-half, 0.0), angle, (cx, cy));
        oar(surface, grip, angle, length, shaft, blade);
    }
}

/// Spoon blade on its own, pointing right, painted in two halves.
pub fn blade_icon(surface: &mut Surface, x: f32, cy: f32, w: f32, h: f32, a: Color, b: Color) {
    let top = [
        (x, cy - h * 0.12),
        (x + w * 0.35, cy - h * 0.42),
        (x + w, cy - h * 0.5),
        (x + w, cy),
        (x, cy),
    ];
    let bottom = [
        (x, cy),
        (x + w, cy),
        (x + w, cy + h * 0.32),
        (x + w * 0.35, cy + h * 0.3),
        (x, cy + h * 0.12),
    ];
    surface.fill_polygon(&top, a);
    surface.fill_polygon(&bottom, b);
}

/// Triangular pennant flying right from a pole at `(x, y)`.
pub fn pennant(surface: &mut Surface, x: f32, y: f32, w: f32, h: f32, color: Color) {
    surface.fill_rect(x - 2.0, y, 4.0, h * 2.2, color.darken(0.3));
    surface.fill_polygon(&[(x, y), (x + w, y + h / 2.0), (x, y + h)], color);
}

/// Double rule frame with diamond corner ornaments.
pub fn ornamental_border(surface: &mut Surface, inset: f32, color: Color) {
    let (w, h) = (surface.width(), surface.height());
    surface.stroke_rect(inset, inset, w - 2.0 * inset, h - 2.0 * inset, 4.0, color);
    let inner = inset + 12.0;
    surface.stroke_rect(inner, inner, w - 2.0 * inner, h - 2.0 * inner, 1.5, color);
    for (x, y) in [(inset, inset), (w - inset, inset), (inset, h - inset), (w - inset, h - inset)] {
        surface.fill_polygon(&[(x, y - 14.0), (x + 14.0, y), (x, y + 14.0), (x - 14.0, y)], color);
    }
}

/// Filled disc with centred text, used for seat numbers.
pub fn badge(
    surface: &mut Surface,
    center: (f32, f32),
    r: f32,
    fill: Color,
    text: &str,
    text_color: Color,
) {
    let (cx, cy) = center;
    surface.fill_circle(cx, cy, r, fill);
    let mut size = r * 0.9;
    let limit = r * 1.7;
    while size > 8.0 && surface.measure(text, FontFace::SansBold, size) > limit {
        size -= 1.0;
    }
    let style = TextStyle::new(FontFace::SansBold, size, text_color).centered();
    surface.text(text, cx, cy, &style);
}
