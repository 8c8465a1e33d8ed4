//! rosette - draw parametric spiral rosettes in the terminal
//!
//! Usage:
//!   rosette [params]              Launch the TUI
//!   rosette commands [params]     Print one render's draw commands as JSON
//!
//! Parameters can come from flags, a YAML config (`--config`), or the
//! built-in defaults, in that order of precedence.

mod cli;
mod config;
mod form;
mod keys;
mod logging;
mod raster;

use clap::Parser;

use cli::{Cli, CliCommand, cmd_commands, run_tui};
use config::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    logging::init(cli.command.is_none())?;

    let config = Config::load_or_default(cli.config.as_deref())?;

    match &cli.command {
        None => run_tui(&config, cli),
        Some(CliCommand::Commands(args)) => cmd_commands(&config, cli, args),
    }
}
