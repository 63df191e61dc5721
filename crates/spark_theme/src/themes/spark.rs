//! Spark light and dark themes

use crate::theme::Theme;
use crate::tokens::*;
use spark_core::Color;

/// Light palette
pub fn light_colors() -> ColorTokens {
    ColorTokens {
        base: BaseColors {
            background: solid(Color::WHITE),
            surface: solid(Color::WHITE),
            on_surface: solid(Color::from_hex(0x16161A)),
            outline: solid(Color::from_hex(0xC4C4C7)),
            outline_high: solid(Color::from_hex(0x16161A)),
        },
        feedback: FeedbackColors {
            success: solid(Color::from_hex(0x1C7A4C)),
            error: solid(Color::from_hex(0xD12E20)),
            alert: solid(Color::from_hex(0xF7A600)),
        },
    }
}

/// Dark palette
pub fn dark_colors() -> ColorTokens {
    ColorTokens {
        base: BaseColors {
            background: solid(Color::from_hex(0x16161A)),
            surface: solid(Color::from_hex(0x1F1F24)),
            on_surface: solid(Color::from_hex(0xF6F6F6)),
            outline: solid(Color::from_hex(0x5E5E63)),
            outline_high: solid(Color::from_hex(0xF6F6F6)),
        },
        feedback: FeedbackColors {
            success: solid(Color::from_hex(0x45C388)),
            error: solid(Color::from_hex(0xFF6B5E)),
            alert: solid(Color::from_hex(0xFFC94D)),
        },
    }
}

impl Theme {
    /// The light variant
    pub fn light() -> Self {
        Self {
            name: "spark-light".into(),
            border: BorderTokens::default(),
            layout: LayoutTokens::default(),
            colors: light_colors(),
            dims: DimTokens::default(),
            typography: TypographyTokens::default(),
        }
    }

    /// The dark variant
    pub fn dark() -> Self {
        Self {
            name: "spark-dark".into(),
            colors: dark_colors(),
            ..Self::light()
        }
    }
}
