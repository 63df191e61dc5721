use spark_theme::Theme;

use crate::types::{BorderLayout, BorderStyle};

/// Border radius and width for a style and focus state
///
/// Rounded borders keep the large radius regardless of focus; only the width
/// grows when focused. Borderless inputs use the `none` tier for both.
pub fn border_layout(theme: &Theme, border_style: BorderStyle, is_focused: bool) -> BorderLayout {
    let border = &theme.border;
    match border_style {
        BorderStyle::None => BorderLayout {
            radius: border.radius.none,
            width: border.width.none,
        },
        BorderStyle::RoundedRect => BorderLayout {
            radius: border.radius.large,
            width: if is_focused {
                border.width.medium
            } else {
                border.width.small
            },
        },
    }
}

/// [`border_layout`] for a rounded rectangle
pub fn rounded_border_layout(theme: &Theme, is_focused: bool) -> BorderLayout {
    border_layout(theme, BorderStyle::RoundedRect, is_focused)
}
