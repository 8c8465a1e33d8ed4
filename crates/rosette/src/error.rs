//! Error types for rosette.
//!
//! Rendering itself never fails. The only thing that can go wrong in the
//! library is a theme carrying a colour that isn't a colour.

use thiserror::Error;

/// A theme value that can't be used.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme.{field}: {value:?} is not a valid colour ({reason})")]
    InvalidColor {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("theme.font_size must be a positive number, got {0}")]
    InvalidFontSize(f64),
}
