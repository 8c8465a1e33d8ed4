//! # rosette
//!
//! Spiral/rosette generation and rendering.
//!
//! A rosette is a polyline built by walking forward, turning, and growing the
//! step a little each time. This crate owns the walk ([`spiral`]), the view
//! state (zoom, stroke thickness, grid toggle), and a renderer that replays
//! everything onto any [`DrawingContext`].
//!
//! ## Rust Lesson #7: Modules
//!
//! `pub use` re-exports let callers write `rosette::ViewState` instead of
//! `rosette::view::ViewState`. The modules stay public for anyone who wants
//! the long path.

pub mod context;
pub mod error;
pub mod geometry;
pub mod params;
pub mod record;
pub mod render;
pub mod session;
pub mod spiral;
pub mod svg;
pub mod theme;
pub mod view;

// Re-export common types at crate root for convenience.
pub use context::{DrawingContext, Font};
pub use error::ThemeError;
pub use geometry::{Point, Surface, Transform};
pub use params::{SpiralInputs, SpiralParams, parse_count, parse_float};
pub use record::{DrawCommand, Recorder};
pub use render::{RenderStats, SpiralRenderer};
pub use session::{Command, Session};
pub use spiral::{effective_turn, generate_spiral};
pub use svg::SvgCanvas;
pub use theme::Theme;
pub use view::ViewState;
