//! Error types for spark_theme

use thiserror::Error;

/// Errors raised while loading or validating a theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme file
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid TOML or does not match the theme schema
    #[error("invalid theme document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color token is not a `#RRGGBB` / `#RRGGBBAA` string
    #[error("invalid color for `{token}`: {value:?}")]
    InvalidColor { token: String, value: String },

    /// A size token is negative or not finite
    #[error("invalid magnitude for `{token}`: {value}")]
    InvalidMagnitude { token: String, value: f32 },

    /// A dim level lies outside `0.0..=1.0`
    #[error("invalid opacity for `{token}`: {value}")]
    InvalidOpacity { token: String, value: f32 },
}

/// Result type for spark_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
