//! Command-line interface.
//!
//! - (no subcommand) - launch the interactive terminal view
//! - `commands` - print one render's draw commands as JSON

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod commands;
pub mod tui;

pub use commands::cmd_commands;
pub use tui::run_tui;

#[derive(Debug, Parser)]
#[command(name = "rosette", version, about = "Explore parametric spiral rosettes in the terminal")]
pub struct Cli {
    /// YAML config with starting parameters, view and theme
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Spiral parameters. Taken as text and parsed leniently, like form input.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Turn angle in degrees (heading changes by 180 - angle per segment)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub angle: Option<String>,

    /// Length of the first segment of each repeat
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub step: Option<String>,

    /// Added to the step after every segment
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub increment: Option<String>,

    /// Segments per repeat
    #[arg(short = 'n', long, global = true, allow_hyphen_values = true)]
    pub segments: Option<String>,

    /// Number of repeats
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub repeats: Option<String>,
}

/// Starting view overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Zoom factor (1.0 = no zoom)
    #[arg(long, global = true)]
    pub scale: Option<f64>,

    /// Spiral line thickness in pixels
    #[arg(long, global = true)]
    pub thickness: Option<f64>,

    /// Show the grid
    #[arg(long, global = true)]
    pub grid: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render once and print the draw commands as JSON
    Commands(CommandsArgs),
}

#[derive(Debug, Args)]
pub struct CommandsArgs {
    /// Surface width in pixels
    #[arg(long, default_value_t = rosette::Surface::MIN_WIDTH)]
    pub width: f64,

    /// Surface height in pixels
    #[arg(long, default_value_t = rosette::Surface::MIN_HEIGHT)]
    pub height: f64,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_commands_with_params() {
        let cli = Cli::try_parse_from([
            "rosette", "commands", "--angle", "144", "-s", "5", "--increment", "-1", "--grid",
            "--width", "800",
        ])
        .unwrap();

        assert_eq!(cli.params.angle.as_deref(), Some("144"));
        assert_eq!(cli.params.step.as_deref(), Some("5"));
        assert_eq!(cli.params.increment.as_deref(), Some("-1"));
        assert!(cli.view.grid);
        match cli.command {
            Some(CliCommand::Commands(args)) => {
                assert_eq!(args.width, 800.0);
                assert_eq!(args.height, 2000.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["rosette", "-a", "90"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.params.angle.as_deref(), Some("90"));
    }
}
