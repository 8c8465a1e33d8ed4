//! Colours and font for a render.
//!
//! Defaults are the dark palette: muted grid, cyan spiral, green start,
//! red end, light grey text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::Font;
use crate::error::ThemeError;

/// Palette and overlay font.
///
/// Every field has a default, so a config file only needs to list the ones
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Fill for cleared areas and the document background.
    pub background: String,
    pub grid: String,
    pub spiral: String,
    pub start_marker: String,
    pub end_marker: String,
    pub text: String,
    /// Overlay font size in pixels.
    pub font_size: f64,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#121212".to_string(),
            grid: "#383838".to_string(),
            spiral: "#00c6ff".to_string(),
            start_marker: "green".to_string(),
            end_marker: "red".to_string(),
            text: "#e0e0e0".to_string(),
            font_size: 15.0,
            font_family: "Inter, sans-serif".to_string(),
        }
    }
}

impl Theme {
    /// Check every colour parses as an SVG/CSS colour and the font size is usable.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let colors = [
            ("background", &self.background),
            ("grid", &self.grid),
            ("spiral", &self.spiral),
            ("start_marker", &self.start_marker),
            ("end_marker", &self.end_marker),
            ("text", &self.text),
        ];

        for (field, value) in colors {
            svgtypes::Color::from_str(value).map_err(|e| ThemeError::InvalidColor {
                field,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ThemeError::InvalidFontSize(self.font_size));
        }

        Ok(())
    }

    pub fn font(&self) -> Font {
        Font::new(self.font_size, self.font_family.clone())
    }
}
