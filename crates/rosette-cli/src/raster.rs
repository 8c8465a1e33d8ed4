//! Turn a session render into pixels for the terminal.
//!
//! The renderer draws into an [`SvgCanvas`], resvg rasterizes that into a
//! tiny-skia pixmap, and the pixmap becomes an `image::DynamicImage` that
//! ratatui-image knows how to show.

use image::{DynamicImage, RgbaImage};
use resvg::usvg;
use thiserror::Error;
use tiny_skia::Pixmap;

use rosette::{RenderStats, Session, SvgCanvas};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("surface {width}x{height} cannot be rasterized")]
    BadSurface { width: f64, height: f64 },

    #[error("generated SVG did not parse: {0}")]
    Svg(#[from] usvg::Error),

    #[error("pixel buffer size mismatch")]
    Buffer,
}

/// Holds the usvg options (and with them the loaded font database) so fonts
/// are only scanned once.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        log::debug!("loaded {} font faces", options.fontdb.len());
        Self { options }
    }

    /// Render the session's current state to an image.
    pub fn render(&self, session: &mut Session) -> Result<(DynamicImage, RenderStats), RasterError> {
        let surface = session.surface();
        let mut canvas = SvgCanvas::new(surface, session.renderer().theme().background.clone());
        let stats = session.on_inputs_changed(&mut canvas);

        let image = self.rasterize(&canvas)?;
        Ok((image, stats))
    }

    /// Rasterize a finished canvas.
    pub fn rasterize(&self, canvas: &SvgCanvas) -> Result<DynamicImage, RasterError> {
        let surface = canvas.surface();
        let bad = || RasterError::BadSurface {
            width: surface.width,
            height: surface.height,
        };
        if !surface.is_drawable() || surface.width > u32::MAX as f64 || surface.height > u32::MAX as f64 {
            return Err(bad());
        }
        let width = surface.width.ceil() as u32;
        let height = surface.height.ceil() as u32;

        let svg = canvas.to_svg_string();
        let tree = usvg::Tree::from_str(&svg, &self.options)?;

        let mut pixmap = Pixmap::new(width, height).ok_or_else(bad)?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let rgba = RgbaImage::from_raw(width, height, pixmap.take()).ok_or(RasterError::Buffer)?;
        Ok(DynamicImage::ImageRgba8(rgba))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
