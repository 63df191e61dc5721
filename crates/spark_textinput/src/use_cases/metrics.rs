use spark_theme::{FontToken, Theme};

use crate::types::{BorderStyle, Spacings};

/// Inset the native text container already applies on each side
pub const NATIVE_TEXT_INSET: f32 = 4.0;

/// Opacity of the whole control
pub fn dim(theme: &Theme, is_enabled: bool) -> f32 {
    if is_enabled {
        theme.dims.none
    } else {
        theme.dims.dim3
    }
}

/// Font of the input text, independent of state
pub fn font(theme: &Theme) -> FontToken {
    theme.typography.body1.clone()
}

pub fn spacings(theme: &Theme, border_style: BorderStyle) -> Spacings {
    let spacing = &theme.layout.spacing;
    match border_style {
        BorderStyle::None => Spacings {
            horizontal: spacing.none,
            content: spacing.medium,
        },
        BorderStyle::RoundedRect => Spacings {
            horizontal: spacing.large,
            content: spacing.medium,
        },
    }
}

/// Offset that centers one line of `font` inside a container of `height`
///
/// Negative when the line is taller than the container; callers decide
/// whether to clamp.
pub fn vertical_spacing(height: f32, font: &FontToken) -> f32 {
    (height - font.line_height) / 2.0
}

/// Horizontal padding to add on top of the native text inset
pub fn horizontal_padding(spacings: &Spacings) -> f32 {
    spacings.horizontal - NATIVE_TEXT_INSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim() {
        let theme = Theme::light();
        assert_eq!(dim(&theme, true), theme.dims.none);
        assert_eq!(dim(&theme, false), theme.dims.dim3);
    }

    #[test]
    fn test_font_is_body1() {
        let theme = Theme::dark();
        assert_eq!(font(&theme), theme.typography.body1);
    }

    #[test]
    fn test_spacings() {
        let theme = Theme::light();
        let spacing = theme.layout.spacing;

        assert_eq!(
            spacings(&theme, BorderStyle::RoundedRect),
            Spacings {
                horizontal: spacing.large,
                content: spacing.medium
            }
        );
        assert_eq!(
            spacings(&theme, BorderStyle::None),
            Spacings {
                horizontal: spacing.none,
                content: spacing.medium
            }
        );
    }

    #[test]
    fn test_vertical_spacing_centers_line() {
        let font = FontToken::new("Inter", 16.0, 24.0);
        assert_eq!(vertical_spacing(200.0, &font), 88.0);
        assert_eq!(vertical_spacing(24.0, &font), 0.0);
    }

    #[test]
    fn test_vertical_spacing_is_not_clamped() {
        let font = FontToken::new("Inter", 16.0, 250.0);
        assert_eq!(vertical_spacing(200.0, &font), -25.0);
    }

    #[test]
    fn test_horizontal_padding() {
        let spacings = Spacings {
            horizontal: 16.0,
            content: 8.0,
        };
        assert_eq!(horizontal_padding(&spacings), 12.0);

        // Borderless spacing goes below the native inset
        let spacings = Spacings {
            horizontal: 0.0,
            content: 8.0,
        };
        assert_eq!(horizontal_padding(&spacings), -4.0);
    }
}
