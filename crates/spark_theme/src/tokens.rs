//! Design token types
//!
//! Token groups are plain value structs. Colors are the exception: a color
//! token is a trait object because several backings exist (solid values,
//! opacity-adjusted values, host-provided dynamic colors), and two tokens with
//! different backings can still render to the same color.

use spark_core::Color;
use std::fmt;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
// Color tokens
// ─────────────────────────────────────────────────────────────────────────────

/// A renderable color reference
pub trait ColorToken: fmt::Debug + Send + Sync {
    /// Resolve to a concrete color
    fn color(&self) -> Color;

    /// Compare with a token of any backing
    ///
    /// The default compares the rendered colors.
    fn equals(&self, other: &dyn ColorToken) -> bool {
        self.color() == other.color()
    }
}

/// Shared, type-erased color token
pub type AnyColorToken = Arc<dyn ColorToken>;

/// A fixed color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidColor(pub Color);

impl ColorToken for SolidColor {
    fn color(&self) -> Color {
        self.0
    }
}

/// A token rendered at a reduced opacity
#[derive(Clone, Debug)]
pub struct OpacityColor {
    pub base: AnyColorToken,
    pub opacity: f32,
}

impl ColorToken for OpacityColor {
    fn color(&self) -> Color {
        self.base.color().scale_alpha(self.opacity)
    }
}

/// Convenience constructors on shared tokens
pub trait ColorTokenExt {
    /// This token at the given opacity (typically a dim level)
    fn opacity(&self, opacity: f32) -> AnyColorToken;

    /// Explicit-equality comparison between shared tokens
    fn token_eq(&self, other: &AnyColorToken) -> bool;
}

impl ColorTokenExt for AnyColorToken {
    fn opacity(&self, opacity: f32) -> AnyColorToken {
        Arc::new(OpacityColor {
            base: self.clone(),
            opacity,
        })
    }

    fn token_eq(&self, other: &AnyColorToken) -> bool {
        self.equals(other.as_ref())
    }
}

/// Wrap a color into a shared token
pub fn solid(color: Color) -> AnyColorToken {
    Arc::new(SolidColor(color))
}

/// The fully transparent token
pub fn clear_color() -> AnyColorToken {
    solid(Color::TRANSPARENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Typography
// ─────────────────────────────────────────────────────────────────────────────

/// A font with its line metrics
#[derive(Clone, Debug, PartialEq)]
pub struct FontToken {
    pub family: String,
    pub size: f32,
    pub line_height: f32,
}

impl FontToken {
    pub fn new(family: impl Into<String>, size: f32, line_height: f32) -> Self {
        Self {
            family: family.into(),
            size,
            line_height,
        }
    }
}

impl Default for FontToken {
    fn default() -> Self {
        Self::new("system-ui", 16.0, 24.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub body1: FontToken,
    pub body2: FontToken,
    pub caption: FontToken,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            body1: FontToken::new("system-ui", 16.0, 24.0),
            body2: FontToken::new("system-ui", 14.0, 20.0),
            caption: FontToken::new("system-ui", 12.0, 16.0),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Border
// ─────────────────────────────────────────────────────────────────────────────

/// Corner radii by size tier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusTokens {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub full: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            small: 4.0,
            medium: 8.0,
            large: 12.0,
            full: 9999.0,
        }
    }
}

/// Stroke widths by size tier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderWidthTokens {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
}

impl Default for BorderWidthTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            small: 1.0,
            medium: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderTokens {
    pub radius: RadiusTokens,
    pub width: BorderWidthTokens,
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingTokens {
    pub none: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub xlarge: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            small: 4.0,
            medium: 8.0,
            large: 16.0,
            xlarge: 24.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutTokens {
    pub spacing: SpacingTokens,
}

// ─────────────────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct BaseColors {
    pub background: AnyColorToken,
    pub surface: AnyColorToken,
    pub on_surface: AnyColorToken,
    pub outline: AnyColorToken,
    pub outline_high: AnyColorToken,
}

#[derive(Clone, Debug)]
pub struct FeedbackColors {
    pub success: AnyColorToken,
    pub error: AnyColorToken,
    pub alert: AnyColorToken,
}

#[derive(Clone, Debug)]
pub struct ColorTokens {
    pub base: BaseColors,
    pub feedback: FeedbackColors,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dims
// ─────────────────────────────────────────────────────────────────────────────

/// Opacity levels, from opaque (`none`) to faintest (`dim5`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimTokens {
    pub none: f32,
    pub dim1: f32,
    pub dim2: f32,
    pub dim3: f32,
    pub dim4: f32,
    pub dim5: f32,
}

impl Default for DimTokens {
    fn default() -> Self {
        Self {
            none: 1.0,
            dim1: 0.72,
            dim2: 0.56,
            dim3: 0.40,
            dim4: 0.16,
            dim5: 0.08,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct HostColor {
        r: u8,
        g: u8,
        b: u8,
    }

    impl ColorToken for HostColor {
        fn color(&self) -> Color {
            Color::rgb(
                self.r as f32 / 255.0,
                self.g as f32 / 255.0,
                self.b as f32 / 255.0,
            )
        }
    }

    #[test]
    fn test_equals_across_backings() {
        let host: AnyColorToken = Arc::new(HostColor {
            r: 255,
            g: 255,
            b: 255,
        });
        let white = solid(Color::WHITE);

        assert!(host.token_eq(&white));
        assert!(white.token_eq(&host));
        assert!(!white.token_eq(&clear_color()));
    }

    #[test]
    fn test_opacity_scales_alpha() {
        let token = solid(Color::BLACK).opacity(0.4);
        let color = token.color();
        assert_eq!(color.a, 0.4);
        assert_eq!(color.r, 0.0);

        // Opacity of opacity compounds
        let nested = token.opacity(0.5);
        assert_eq!(nested.color().a, 0.2);
    }

    #[test]
    fn test_opacity_equals_solid_with_alpha() {
        let dimmed = solid(Color::WHITE).opacity(0.5);
        let manual = solid(Color::WHITE.with_alpha(0.5));
        assert!(dimmed.token_eq(&manual));
    }

    #[test]
    fn test_default_scales_are_ordered() {
        let radius = RadiusTokens::default();
        assert!(radius.none < radius.small);
        assert!(radius.small < radius.medium);
        assert!(radius.medium < radius.large);

        let dims = DimTokens::default();
        assert_eq!(dims.none, 1.0);
        assert!(dims.dim1 > dims.dim3);
        assert!(dims.dim3 > dims.dim5);
    }
}
