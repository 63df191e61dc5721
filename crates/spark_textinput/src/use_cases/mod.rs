//! Style derivations
//!
//! One pure function per style dimension. Each is total over its inputs and
//! has no side effects; the view-models decide when to call them.
//!
//! [`StyleUseCases`] bundles the functions behind a trait so a view-model can
//! be built with a substitute strategy. Every method defaults to the pure
//! function, so implementors only override what they need.

mod border;
mod colors;
mod metrics;
mod padding;

pub use border::{border_layout, rounded_border_layout};
pub use colors::colors;
pub use metrics::{dim, font, horizontal_padding, spacings, vertical_spacing, NATIVE_TEXT_INSET};
pub use padding::{addon_padding, content_padding, is_clear_button, sub_content_spacing};

use spark_core::EdgeInsets;
use spark_theme::{FontToken, Theme};

use crate::types::{
    AddonConfiguration, AddonSide, BorderLayout, BorderStyle, ClearMode, ColorSet, ContentPadding,
    Intent, Spacings,
};

/// Derivation strategy used by the view-models
pub trait StyleUseCases {
    fn border_layout(
        &self,
        theme: &Theme,
        border_style: BorderStyle,
        is_focused: bool,
    ) -> BorderLayout {
        border_layout(theme, border_style, is_focused)
    }

    fn colors(
        &self,
        theme: &Theme,
        intent: Intent,
        is_focused: bool,
        is_enabled: bool,
        is_read_only: bool,
    ) -> ColorSet {
        colors(theme, intent, is_focused, is_enabled, is_read_only)
    }

    fn dim(&self, theme: &Theme, is_enabled: bool) -> f32 {
        dim(theme, is_enabled)
    }

    fn font(&self, theme: &Theme) -> FontToken {
        font(theme)
    }

    fn spacings(&self, theme: &Theme, border_style: BorderStyle) -> Spacings {
        spacings(theme, border_style)
    }

    fn is_clear_button(&self, clear_mode: ClearMode, is_focused: bool) -> bool {
        is_clear_button(clear_mode, is_focused)
    }

    fn content_padding(&self, spacings: &Spacings, is_clear_button: bool) -> ContentPadding {
        content_padding(spacings, is_clear_button)
    }

    fn addon_padding(
        &self,
        spacings: &Spacings,
        configuration: &AddonConfiguration,
        side: AddonSide,
    ) -> EdgeInsets {
        addon_padding(spacings, configuration, side)
    }

    fn sub_content_spacing(&self, spacings: &Spacings, is_clear_button: bool) -> f32 {
        sub_content_spacing(spacings, is_clear_button)
    }

    fn vertical_spacing(&self, height: f32, font: &FontToken) -> f32 {
        vertical_spacing(height, font)
    }

    fn horizontal_padding(&self, spacings: &Spacings) -> f32 {
        horizontal_padding(spacings)
    }
}

/// The pure derivations, unmodified
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStyleUseCases;

impl StyleUseCases for DefaultStyleUseCases {}
