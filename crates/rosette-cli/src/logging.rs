//! Logger setup.
//!
//! `RUST_LOG` controls the level (default `warn`). While the TUI owns the
//! terminal, log lines go to `rosette.log` in the temp directory instead of
//! stderr so they don't scribble over the screen.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Where the TUI writes its log.
pub fn tui_log_path() -> PathBuf {
    std::env::temp_dir().join("rosette.log")
}

/// Install the global logger. `to_file` is set for TUI mode.
pub fn init(to_file: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if to_file {
        let path = tui_log_path();
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests); that's fine.
    let _ = builder.try_init();
    Ok(())
}
