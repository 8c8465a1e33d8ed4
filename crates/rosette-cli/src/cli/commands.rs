//! `commands` - render once into a recorder and print the calls as JSON.
//!
//! Handy for scripting and for checking what the renderer does with odd
//! input without needing a terminal that can show images.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use rosette::{
    DrawCommand, Recorder, RenderStats, Session, SpiralParams, SpiralRenderer, Surface, ViewState,
};

use super::{Cli, CommandsArgs};
use crate::config::Config;

#[derive(Serialize)]
struct CommandsOutput<'a> {
    surface: Surface,
    params: SpiralParams,
    view: ViewState,
    grid_button: &'static str,
    stats: RenderStats,
    commands: &'a [DrawCommand],
}

/// Execute the commands subcommand.
pub fn cmd_commands(config: &Config, cli: &Cli, args: &CommandsArgs) -> Result<()> {
    let mut session = Session::new(
        config.inputs(&cli.params),
        config.view_state(&cli.view),
        Surface::new(args.width, args.height),
        SpiralRenderer::new(config.theme.clone()),
    );

    let mut recorder = Recorder::new();
    let stats = session.on_inputs_changed(&mut recorder);

    let output = CommandsOutput {
        surface: session.surface(),
        params: session.params(),
        view: *session.view(),
        grid_button: session.view().grid_button_label(),
        stats,
        commands: recorder.commands(),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("failed to serialize draw commands")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")?;

    log::info!(
        "wrote {} draw commands ({} vertices)",
        recorder.len(),
        stats.vertices
    );
    Ok(())
}
