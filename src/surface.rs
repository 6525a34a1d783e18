//! The drawing surface every template paints onto.
//!
//! A `Surface` owns one `tiny_skia` pixmap for one render. Shapes and
//! gradients are anti-aliased paths; text goes through `imageproc` with the
//! embedded fonts and is also recorded in a text log so callers can inspect
//! what was written without OCR.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{ImageFormat, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size, Canvas};
use std::io::Cursor;
use tiny_skia::{
    ColorU8, FillRule, GradientStop, IntSize, LinearGradient, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, Point, RadialGradient, Shader, SpreadMode, Stroke, Transform,
};

use crate::color::Color;
use crate::error::{Result, RowgramError};
use crate::layout::Rect;
use crate::model::CanvasDimensions;

/// Cubic control distance for a quarter circle of unit radius.
const KAPPA: f32 = 0.552_284_8;

const SANS: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
const SANS_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");
const SERIF_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSerif-Bold.ttf");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Sans,
    SansBold,
    SerifBold,
}

/// The embedded typefaces. Cheap to clone; shares the font data.
#[derive(Clone)]
pub struct Fonts {
    sans: FontArc,
    sans_bold: FontArc,
    serif_bold: FontArc,
}

impl Fonts {
    pub fn embedded() -> Result<Self> {
        let load = |name: &str, bytes: &'static [u8]| {
            FontArc::try_from_slice(bytes)
                .map_err(|e| RowgramError::Encoding(format!("embedded font {name}: {e}")))
        };
        Ok(Self {
            sans: load("DejaVuSans", SANS)?,
            sans_bold: load("DejaVuSans-Bold", SANS_BOLD)?,
            serif_bold: load("DejaVuSerif-Bold", SERIF_BOLD)?,
        })
    }

    pub fn face(&self, face: FontFace) -> &FontArc {
        match face {
            FontFace::Sans => &self.sans,
            FontFace::SansBold => &self.sans_bold,
            FontFace::SerifBold => &self.serif_bold,
        }
    }
}

impl std::fmt::Debug for Fonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fonts").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
    pub align: Align,
    pub baseline: Baseline,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self {
            face,
            size,
            color,
            align: Align::Left,
            baseline: Baseline::Middle,
        }
    }

    pub fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    pub fn right(self) -> Self {
        Self {
            align: Align::Right,
            ..self
        }
    }

    pub fn baseline(self, baseline: Baseline) -> Self {
        Self { baseline, ..self }
    }

    pub fn color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// One text draw call as issued by a template.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor as passed by the caller.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub face: FontFace,
    pub color: Color,
    /// Box covered by the line, from the measured width and the font's
    /// ascent and descent.
    pub bounds: Rect,
}

pub struct Surface {
    pixmap: Pixmap,
    fonts: Fonts,
    text_log: Vec<TextRun>,
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

/// Closed polygon through `points`.
pub fn polygon_path(points: &[(f32, f32)]) -> Option<Path> {
    let (&(x, y), rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// Rectangle with quarter-circle corners of radius `r`, clamped to fit.
pub fn rounded_rect_path(rect: Rect, r: f32) -> Option<Path> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }
    let r = r.clamp(0.0, rect.w.min(rect.h) / 2.0);
    let k = r * KAPPA;
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

/// Lets `imageproc` text drawing write into a premultiplied pixmap.
///
/// `draw_pixel` composites source-over, the same as `imageproc::drawing::Blend`.
struct PixmapCanvas<'a>(&'a mut Pixmap);

impl PixmapCanvas<'_> {
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.0.width() + x) as usize
    }
}

impl Canvas for PixmapCanvas<'_> {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        (self.0.width(), self.0.height())
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let c = self.0.pixels()[self.index(x, y)].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        let mut dst = self.get_pixel(x, y);
        dst.blend(&color);
        let [r, g, b, a] = dst.0;
        let i = self.index(x, y);
        self.0.pixels_mut()[i] = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
}

impl Surface {
    pub fn new(dimensions: CanvasDimensions, fonts: Fonts) -> Result<Self> {
        let pixmap = Pixmap::new(dimensions.width, dimensions.height).ok_or_else(|| {
            RowgramError::InvalidInput(format!(
                "canvas must be non-empty, got {}x{}",
                dimensions.width, dimensions.height
            ))
        })?;
        Ok(Self {
            pixmap,
            fonts,
            text_log: Vec::new(),
        })
    }

    pub fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.pixmap.height() as f32
    }

    pub fn text_log(&self) -> &[TextRun] {
        &self.text_log
    }

    /// Straight-alpha copy of the raster.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    pub fn into_parts(self) -> (RgbaImage, Vec<TextRun>) {
        (self.to_image(), self.text_log)
    }

    /// Overwrite every pixel, alpha included.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.into());
    }

    pub fn fill_path(&mut self, path: &Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &solid(color),
            FillRule::EvenOdd,
            Transform::identity(),
            None,
        );
    }

    pub fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &solid(color), &stroke, Transform::identity(), None);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
            self.pixmap
                .fill_rect(rect, &solid(color), Transform::identity(), None);
        }
    }

    /// Frame of `thickness` drawn inside the rectangle.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
        let t = thickness.min(w / 2.0).min(h / 2.0);
        let half = t / 2.0;
        if let Some(rect) = tiny_skia::Rect::from_xywh(x + half, y + half, w - t, h - t) {
            self.stroke_path(&PathBuilder::from_rect(rect), t, color);
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, r: f32, color: Color) {
        if let Some(path) = rounded_rect_path(rect, r) {
            self.fill_path(&path, color);
        }
    }

    /// Rounded frame of `thickness` drawn inside `rect`.
    pub fn stroke_rounded_rect(&mut self, rect: Rect, r: f32, thickness: f32, color: Color) {
        let half = thickness / 2.0;
        if let Some(path) = rounded_rect_path(rect.inset(half, half), (r - half).max(0.0)) {
            self.stroke_path(&path, thickness, color);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
            self.fill_path(&path, color);
        }
    }

    /// Ring of `thickness` whose outer edge has radius `r`.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, thickness: f32, color: Color) {
        let t = thickness.min(r);
        if let Some(path) = PathBuilder::from_circle(cx, cy, r - t / 2.0) {
            self.stroke_path(&path, t, color);
        }
    }

    /// Even-odd fill of a closed polygon.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if let Some(path) = polygon_path(points) {
            self.fill_path(&path, color);
        }
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, thickness, color);
        }
    }

    /// Paint `rect` with a gradient along the axis `from -> to`.
    pub fn linear_gradient(
        &mut self,
        rect: (f32, f32, f32, f32),
        from: (f32, f32),
        to: (f32, f32),
        stops: &[(f32, Color)],
    ) {
        let shader = LinearGradient::new(
            Point::from_xy(from.0, from.1),
            Point::from_xy(to.0, to.1),
            gradient_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        );
        self.fill_shaded(rect, shader, stops);
    }

    /// Paint `rect` with a radial gradient centred on `center`.
    pub fn radial_gradient(
        &mut self,
        rect: (f32, f32, f32, f32),
        center: (f32, f32),
        radius: f32,
        stops: &[(f32, Color)],
    ) {
        let center = Point::from_xy(center.0, center.1);
        let shader = RadialGradient::new(
            center,
            center,
            radius,
            gradient_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        );
        self.fill_shaded(rect, shader, stops);
    }

    /// Degenerate gradients paint their first stop.
    fn fill_shaded(
        &mut self,
        rect: (f32, f32, f32, f32),
        shader: Option<Shader<'_>>,
        stops: &[(f32, Color)],
    ) {
        let shader = match (shader, stops.first()) {
            (Some(shader), _) => shader,
            (None, Some(&(_, color))) => Shader::SolidColor(color.into()),
            (None, None) => return,
        };
        let (x, y, w, h) = rect;
        let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) else {
            return;
        };
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Width in pixels of `text` at `size`.
    pub fn measure(&self, text: &str, face: FontFace, size: f32) -> f32 {
        text_size(PxScale::from(size), self.fonts.face(face), text).0 as f32
    }

    /// Draw `text` anchored at `(x, y)` per the style's alignment and
    /// baseline. Returns the drawn width.
    pub fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> f32 {
        let font = self.fonts.face(style.face).clone();
        let scale = PxScale::from(style.size);
        let width = text_size(scale, &font, text).0 as f32;
        let scaled = font.as_scaled(scale);
        let (ascent, descent) = (scaled.ascent(), scaled.descent());

        let left = match style.align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let top = match style.baseline {
            Baseline::Top => y,
            Baseline::Middle => y - (ascent - descent) / 2.0,
            Baseline::Alphabetic => y - ascent,
        };

        draw_text_mut(
            &mut PixmapCanvas(&mut self.pixmap),
            style.color.to_rgba(),
            left.round() as i32,
            top.round() as i32,
            scale,
            &font,
            text,
        );
        self.text_log.push(TextRun {
            text: text.to_string(),
            x,
            y,
            size: style.size,
            face: style.face,
            color: style.color,
            bounds: Rect::new(left, top, width, ascent - descent),
        });
        width
    }

    /// Composite `overlay` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, overlay: &RgbaImage, x: i32, y: i32) {
        let Some(size) = IntSize::from_wh(overlay.width(), overlay.height()) else {
            return;
        };
        let data = overlay
            .pixels()
            .flat_map(|p| {
                let c = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        if let Some(layer) = Pixmap::from_vec(data, size) {
            self.pixmap.draw_pixmap(
                x,
                y,
                layer.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.to_image())
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("text_runs", &self.text_log.len())
            .finish()
    }
}

fn gradient_stops(stops: &[(f32, Color)]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|&(t, color)| GradientStop::new(t, color.into()))
        .collect()
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| RowgramError::Encoding(e.to_string()))?;
    Ok(buf)
}
