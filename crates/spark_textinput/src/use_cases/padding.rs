use spark_core::EdgeInsets;

use crate::types::{AddonConfiguration, AddonSide, ClearMode, ContentPadding, Spacings};

pub fn is_clear_button(clear_mode: ClearMode, is_focused: bool) -> bool {
    clear_mode.should_show_clear_button(is_focused)
}

/// Content insets; the trailing input gap is only reserved without a clear
/// button
pub fn content_padding(spacings: &Spacings, is_clear_button: bool) -> ContentPadding {
    ContentPadding {
        top: 0.0,
        leading: spacings.horizontal,
        bottom: 0.0,
        trailing: spacings.horizontal,
        input_trailing: if is_clear_button {
            0.0
        } else {
            spacings.horizontal
        },
    }
}

/// Insets around a left or right addon
///
/// The outer edge always gets the horizontal spacing. The edge facing the
/// field only does when a separator sits between them.
pub fn addon_padding(
    spacings: &Spacings,
    configuration: &AddonConfiguration,
    side: AddonSide,
) -> EdgeInsets {
    if !configuration.has_padding {
        return EdgeInsets::ZERO;
    }

    let outer = spacings.horizontal;
    let inner = if configuration.has_separator {
        spacings.horizontal
    } else {
        0.0
    };

    match side {
        AddonSide::Left => EdgeInsets::horizontal(outer, inner),
        AddonSide::Right => EdgeInsets::horizontal(inner, outer),
    }
}

/// Gap between the text and the trailing sub-content
pub fn sub_content_spacing(spacings: &Spacings, is_clear_button: bool) -> f32 {
    if is_clear_button {
        0.0
    } else {
        spacings.content
    }
}
