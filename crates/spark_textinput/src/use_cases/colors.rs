use spark_theme::{AnyColorToken, ColorTokenExt, Theme};

use crate::types::{ColorSet, Intent};

/// Text, placeholder, border and background colors for an input state
///
/// Disabled and read-only inputs share the inactive branch, whatever the
/// intent or focus.
pub fn colors(
    theme: &Theme,
    intent: Intent,
    is_focused: bool,
    is_enabled: bool,
    is_read_only: bool,
) -> ColorSet {
    let base = &theme.colors.base;
    let text = base.on_surface.clone();
    let placeholder = base.on_surface.opacity(theme.dims.dim1);

    if is_enabled && !is_read_only {
        ColorSet {
            text,
            placeholder,
            border: active_border(theme, intent, is_focused),
            background: base.surface.clone(),
        }
    } else {
        ColorSet {
            text,
            placeholder,
            border: base.outline.clone(),
            background: base.on_surface.opacity(theme.dims.dim5),
        }
    }
}

fn active_border(theme: &Theme, intent: Intent, is_focused: bool) -> AnyColorToken {
    let colors = &theme.colors;
    match intent {
        Intent::Error => colors.feedback.error.clone(),
        Intent::Alert => colors.feedback.alert.clone(),
        Intent::Success => colors.feedback.success.clone(),
        Intent::Neutral if is_focused => colors.base.outline_high.clone(),
        Intent::Neutral => colors.base.outline.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTENTS: [Intent; 4] = [Intent::Neutral, Intent::Error, Intent::Alert, Intent::Success];

    #[test]
    fn test_enabled_text_and_surfaces() {
        let theme = Theme::light();
        let base = &theme.colors.base;
        let dimmed_on_surface = base.on_surface.opacity(theme.dims.dim1);

        for intent in INTENTS {
            for focused in [true, false] {
                let set = colors(&theme, intent, focused, true, false);
                assert!(set.text.token_eq(&base.on_surface));
                assert!(set.placeholder.token_eq(&dimmed_on_surface));
                assert!(set.background.token_eq(&base.surface));
            }
        }
    }

    #[test]
    fn test_enabled_border_by_intent() {
        let theme = Theme::light();
        let feedback = &theme.colors.feedback;
        let base = &theme.colors.base;

        for focused in [true, false] {
            let border = |intent| colors(&theme, intent, focused, true, false).border;
            assert!(border(Intent::Success).token_eq(&feedback.success));
            assert!(border(Intent::Error).token_eq(&feedback.error));
            assert!(border(Intent::Alert).token_eq(&feedback.alert));
        }

        let neutral = |focused| colors(&theme, Intent::Neutral, focused, true, false).border;
        assert!(neutral(true).token_eq(&base.outline_high));
        assert!(neutral(false).token_eq(&base.outline));
    }

    #[test]
    fn test_inactive_branch() {
        let theme = Theme::dark();
        let base = &theme.colors.base;
        let dimmed_surface = base.on_surface.opacity(theme.dims.dim5);

        // (enabled, read_only) combinations that count as inactive
        let inactive = [(false, false), (false, true), (true, true)];

        for intent in INTENTS {
            for focused in [true, false] {
                for (enabled, read_only) in inactive {
                    let set = colors(&theme, intent, focused, enabled, read_only);
                    assert!(set.border.token_eq(&base.outline));
                    assert!(set.background.token_eq(&dimmed_surface));
                    assert!(set.text.token_eq(&base.on_surface));
                }
            }
        }
    }
}
