//! YAML configuration for the rosette app.
//!
//! Everything is optional. A config can set starting parameters, the starting
//! view and the theme:
//!
//! ```yaml
//! params:
//!   angle: 144
//!   initial_step: 5
//!   step_increment: 0
//!   segments: 5
//!   repeats: 1
//! view:
//!   scale: 1.0
//!   thickness: 3
//!   grid: false
//! theme:
//!   spiral: "#ff9900"
//! ```
//!
//! Parameter values may be numbers or strings; either way they go through
//! the same lenient parsing as text typed into the form.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use rosette::{SpiralInputs, Theme, ThemeError, ViewState, view::DEFAULT_THICKNESS};

use crate::cli::{ParamArgs, ViewArgs};

/// Errors loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// A parameter value as written in YAML: `5`, `5.5` or `"5px"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// The value as form text.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Number(n) => rosette::render::format_number(*n),
            RawValue::Text(s) => s.clone(),
        }
    }
}

/// Starting parameters. Missing entries keep the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub angle: Option<RawValue>,
    pub initial_step: Option<RawValue>,
    pub step_increment: Option<RawValue>,
    pub segments: Option<RawValue>,
    pub repeats: Option<RawValue>,
}

/// Starting view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub scale: f64,
    pub thickness: f64,
    pub grid: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            thickness: DEFAULT_THICKNESS,
            grid: false,
        }
    }
}

/// Top-level config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub params: ParamsConfig,
    pub view: ViewConfig,
    pub theme: Theme,
}

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.theme.validate()?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse YAML without touching the filesystem or validating the theme.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid "use the defaults" config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Form inputs: command-line flags win over the config, which wins over
    /// the built-in defaults.
    pub fn inputs(&self, args: &ParamArgs) -> SpiralInputs {
        let defaults = SpiralInputs::default();
        let pick = |flag: &Option<String>, configured: &Option<RawValue>, fallback: String| {
            flag.clone()
                .or_else(|| configured.as_ref().map(RawValue::to_text))
                .unwrap_or(fallback)
        };

        SpiralInputs {
            angle: pick(&args.angle, &self.params.angle, defaults.angle),
            initial_step: pick(&args.step, &self.params.initial_step, defaults.initial_step),
            step_increment: pick(&args.increment, &self.params.step_increment, defaults.step_increment),
            segments: pick(&args.segments, &self.params.segments, defaults.segments),
            repeats: pick(&args.repeats, &self.params.repeats, defaults.repeats),
        }
    }

    /// Starting view, with command-line overrides applied.
    pub fn view_state(&self, args: &ViewArgs) -> ViewState {
        ViewState::new(
            args.scale.unwrap_or(self.view.scale),
            args.thickness.unwrap_or(self.view.thickness),
            args.grid || self.view.grid,
        )
    }
}
