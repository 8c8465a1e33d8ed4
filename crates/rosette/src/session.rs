//! One view's worth of state and the single redraw entry point.
//!
//! Every trigger the host has (a button, a key, a resize) becomes a
//! [`Command`]. The session applies it, says whether a redraw is due, and
//! [`Session::on_inputs_changed`] does that redraw. There is exactly one way
//! to get pixels on screen.

use crate::context::DrawingContext;
use crate::geometry::Surface;
use crate::params::{SpiralInputs, SpiralParams};
use crate::render::{RenderStats, SpiralRenderer};
use crate::view::ViewState;

/// User-facing triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Re-render with whatever the inputs currently say.
    Generate,
    ToggleGrid,
    ZoomIn,
    ZoomOut,
    IncreaseThickness,
    DecreaseThickness,
    /// The host's container changed size.
    Resize(Surface),
}

/// Inputs, view state, surface and renderer for one view.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: SpiralInputs,
    view: ViewState,
    surface: Surface,
    renderer: SpiralRenderer,
    last_stats: Option<RenderStats>,
}

impl Session {
    pub fn new(inputs: SpiralInputs, view: ViewState, surface: Surface, renderer: SpiralRenderer) -> Self {
        Self {
            inputs,
            view,
            surface,
            renderer,
            last_stats: None,
        }
    }

    pub fn inputs(&self) -> &SpiralInputs {
        &self.inputs
    }

    /// Replace the raw inputs. Does not redraw.
    pub fn set_inputs(&mut self, inputs: SpiralInputs) {
        self.inputs = inputs;
    }

    /// Parameters as the renderer will see them.
    pub fn params(&self) -> SpiralParams {
        SpiralParams::from_inputs(&self.inputs)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn renderer(&self) -> &SpiralRenderer {
        &self.renderer
    }

    /// Stats from the most recent render, if there was one.
    pub fn last_stats(&self) -> Option<RenderStats> {
        self.last_stats
    }

    /// Apply a command. Returns true when the caller should redraw.
    pub fn apply(&mut self, command: Command) -> bool {
        log::debug!("command: {command:?}");
        match command {
            Command::Generate => true,
            Command::ToggleGrid => {
                self.view.toggle_grid();
                true
            }
            Command::ZoomIn => {
                self.view.zoom_in();
                true
            }
            Command::ZoomOut => {
                self.view.zoom_out();
                true
            }
            Command::IncreaseThickness => {
                self.view.increase_thickness();
                true
            }
            // Nothing to redraw when already at the floor.
            Command::DecreaseThickness => self.view.decrease_thickness(),
            Command::Resize(surface) => {
                self.surface = surface;
                true
            }
        }
    }

    /// Gather parameters from the current inputs and render a full frame.
    pub fn on_inputs_changed<C: DrawingContext + ?Sized>(&mut self, ctx: &mut C) -> RenderStats {
        let params = self.params();
        let stats = self.renderer.render(ctx, self.surface, &params, &self.view);
        self.last_stats = Some(stats);
        stats
    }
}
