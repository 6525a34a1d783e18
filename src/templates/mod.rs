//! Template implementations.
//!
//! Ten fixed looks plus the configurable one. Each paints a complete image
//! onto a `Surface` from the crew in its `RenderContext`; none of them keep
//! state between renders.

use image::RgbaImage;
use rand::rngs::StdRng;

use crate::color::Palette;
use crate::model::{Crew, LogoPosition, TemplateConfig};
use crate::seats::{Roster, SeatLabelStyle};
use crate::surface::Surface;

pub mod common;

mod championship;
mod classic;
mod configurable;
mod heritage;
mod minimal;
mod modern;
mod oarblade;
mod pulse;
mod regatta;
mod vintage;
mod waterline;

pub use championship::Championship;
pub use classic::Classic;
pub use configurable::Configurable;
pub use heritage::Heritage;
pub use minimal::Minimal;
pub use modern::Modern;
pub use oarblade::OarBlade;
pub use pulse::Pulse;
pub use regatta::Regatta;
pub use vintage::Vintage;
pub use waterline::Waterline;

/// Everything a template may read while drawing.
pub struct RenderContext<'a> {
    pub crew: &'a Crew,
    pub config: &'a TemplateConfig,
    pub palette: Palette,
    pub icon: Option<&'a RgbaImage>,
    /// The only source of randomness a template may use.
    pub rng: StdRng,
}

impl RenderContext<'_> {
    pub fn roster(&self, style: SeatLabelStyle) -> Roster {
        Roster::new(self.crew, style)
    }
}

/// A visual layout for a crew lineup.
pub trait Template: Send + Sync {
    fn id(&self) -> &'static str;

    /// Spelling used for positional seat names.
    fn seat_style(&self) -> SeatLabelStyle {
        SeatLabelStyle::Standard
    }

    /// Corner where a resolved club icon goes.
    fn icon_position(&self) -> LogoPosition {
        LogoPosition::BottomRight
    }

    /// Paint the full image. Must cover every pixel of the surface.
    fn draw(&self, surface: &mut Surface, ctx: &mut RenderContext<'_>);
}
