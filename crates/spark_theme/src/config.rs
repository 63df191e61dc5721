//! TOML theme configuration
//!
//! A theme document overrides groups of a base theme. Every section is
//! optional; a present section must be complete.
//!
//! ```toml
//! name = "brand"
//!
//! [border.radius]
//! none = 0.0
//! small = 2.0
//! medium = 4.0
//! large = 6.0
//! full = 9999.0
//!
//! [colors.feedback]
//! success = "#1C7A4C"
//! error = "#D12E20"
//! alert = "#F7A600"
//!
//! [typography.body1]
//! family = "Inter"
//! size = 16.0
//! line_height = 22.0
//! ```

use std::path::Path;

use serde::Deserialize;
use spark_core::Color;

use crate::error::{Result, ThemeError};
use crate::theme::Theme;
use crate::tokens::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: Option<String>,
    #[serde(default)]
    pub border: BorderConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    pub dims: Option<DimConfig>,
    #[serde(default)]
    pub typography: TypographyConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderConfig {
    pub radius: Option<RadiusConfig>,
    pub width: Option<BorderWidthConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadiusConfig {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub full: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderWidthConfig {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub spacing: Option<SpacingConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingConfig {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub xlarge: f32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorsConfig {
    pub base: Option<BaseColorsConfig>,
    pub feedback: Option<FeedbackColorsConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseColorsConfig {
    pub background: String,
    pub surface: String,
    pub on_surface: String,
    pub outline: String,
    pub outline_high: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackColorsConfig {
    pub success: String,
    pub error: String,
    pub alert: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimConfig {
    pub none: f32,
    pub dim1: f32,
    pub dim2: f32,
    pub dim3: f32,
    pub dim4: f32,
    pub dim5: f32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyConfig {
    pub body1: Option<FontConfig>,
    pub body2: Option<FontConfig>,
    pub caption: Option<FontConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    pub family: String,
    pub size: f32,
    pub line_height: f32,
}

impl ThemeConfig {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Apply the configured groups on top of `base`
    pub fn apply(self, mut base: Theme) -> Result<Theme> {
        if let Some(name) = self.name {
            base.name = name;
        }

        if let Some(radius) = self.border.radius {
            base.border.radius = RadiusTokens {
                none: magnitude("border.radius.none", radius.none)?,
                small: magnitude("border.radius.small", radius.small)?,
                medium: magnitude("border.radius.medium", radius.medium)?,
                large: magnitude("border.radius.large", radius.large)?,
                full: magnitude("border.radius.full", radius.full)?,
            };
        }
        if let Some(width) = self.border.width {
            base.border.width = BorderWidthTokens {
                none: magnitude("border.width.none", width.none)?,
                small: magnitude("border.width.small", width.small)?,
                medium: magnitude("border.width.medium", width.medium)?,
            };
        }

        if let Some(spacing) = self.layout.spacing {
            base.layout.spacing = SpacingTokens {
                none: magnitude("layout.spacing.none", spacing.none)?,
                small: magnitude("layout.spacing.small", spacing.small)?,
                medium: magnitude("layout.spacing.medium", spacing.medium)?,
                large: magnitude("layout.spacing.large", spacing.large)?,
                xlarge: magnitude("layout.spacing.xlarge", spacing.xlarge)?,
            };
        }

        if let Some(colors) = self.colors.base {
            base.colors.base = BaseColors {
                background: color("colors.base.background", &colors.background)?,
                surface: color("colors.base.surface", &colors.surface)?,
                on_surface: color("colors.base.on_surface", &colors.on_surface)?,
                outline: color("colors.base.outline", &colors.outline)?,
                outline_high: color("colors.base.outline_high", &colors.outline_high)?,
            };
        }
        if let Some(colors) = self.colors.feedback {
            base.colors.feedback = FeedbackColors {
                success: color("colors.feedback.success", &colors.success)?,
                error: color("colors.feedback.error", &colors.error)?,
                alert: color("colors.feedback.alert", &colors.alert)?,
            };
        }

        if let Some(dims) = self.dims {
            base.dims = DimTokens {
                none: opacity("dims.none", dims.none)?,
                dim1: opacity("dims.dim1", dims.dim1)?,
                dim2: opacity("dims.dim2", dims.dim2)?,
                dim3: opacity("dims.dim3", dims.dim3)?,
                dim4: opacity("dims.dim4", dims.dim4)?,
                dim5: opacity("dims.dim5", dims.dim5)?,
            };
        }

        if let Some(font) = self.typography.body1 {
            base.typography.body1 = font.into_token("typography.body1")?;
        }
        if let Some(font) = self.typography.body2 {
            base.typography.body2 = font.into_token("typography.body2")?;
        }
        if let Some(font) = self.typography.caption {
            base.typography.caption = font.into_token("typography.caption")?;
        }

        Ok(base)
    }
}

impl FontConfig {
    fn into_token(self, token: &str) -> Result<FontToken> {
        Ok(FontToken {
            size: magnitude(&format!("{token}.size"), self.size)?,
            line_height: magnitude(&format!("{token}.line_height"), self.line_height)?,
            family: self.family,
        })
    }
}

impl Theme {
    /// Build a theme from a TOML document layered over the light theme
    pub fn from_toml(source: &str) -> Result<Theme> {
        Self::from_toml_with_base(source, Theme::light())
    }

    /// Build a theme from a TOML document layered over `base`
    pub fn from_toml_with_base(source: &str, base: Theme) -> Result<Theme> {
        let theme = ThemeConfig::from_toml(source)?.apply(base)?;
        tracing::debug!(name = %theme.name, "theme loaded from configuration");
        Ok(theme)
    }

    /// Read and build a theme file layered over the light theme
    pub fn load(path: impl AsRef<Path>) -> Result<Theme> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading theme file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

fn magnitude(token: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::InvalidMagnitude {
            token: token.to_string(),
            value,
        })
    }
}

fn opacity(token: &str, value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ThemeError::InvalidOpacity {
            token: token.to_string(),
            value,
        })
    }
}

fn color(token: &str, value: &str) -> Result<AnyColorToken> {
    Color::parse_hex(value)
        .map(solid)
        .ok_or_else(|| ThemeError::InvalidColor {
            token: token.to_string(),
            value: value.to_string(),
        })
}
