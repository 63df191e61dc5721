//! Base style engine
//!
//! [`StyleEngine`] holds the inputs every text input shares (theme, intent,
//! border style, focus, enablement, read-only) and the outputs derived from
//! them. Setting an input recomputes exactly the outputs that depend on it and
//! publishes them before the setter returns:
//!
//! | Input        | Recomputed outputs                          |
//! |--------------|---------------------------------------------|
//! | theme        | colors, border layout, spacings, dim, font  |
//! | intent       | colors                                      |
//! | border style | border layout, spacings                     |
//! | focus        | colors, border layout                       |
//! | enabled      | colors, dim                                 |
//! | read-only    | colors                                      |
//!
//! Assigning the current value is a no-op. Setters return the [`Outputs`]
//! they recomputed so the view-models composing an engine can chain their own
//! derivations (for instance on [`Outputs::SPACINGS`]).
//!
//! Where the background color and dim land is decided by a [`SurfaceSink`]:
//! a plain field publishes them itself, while a field embedded in an addon
//! container hands them to a [`ContainerSurface`].

use bitflags::bitflags;
use spark_core::Published;
use spark_theme::{clear_color, AnyColorToken, FontToken, SharedTheme, Theme};

use crate::config::TextInputConfig;
use crate::types::{BorderLayout, BorderStyle, ColorSet, Intent, Spacings};
use crate::use_cases::{DefaultStyleUseCases, StyleUseCases};

bitflags! {
    /// Outputs derived by the style engine
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Outputs: u8 {
        const COLORS = 1 << 0;
        const BORDER_LAYOUT = 1 << 1;
        const DIM = 1 << 2;
        const FONT = 1 << 3;
        const SPACINGS = 1 << 4;
    }
}

/// The settable inputs of the style engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleInput {
    Theme,
    Intent,
    BorderStyle,
    Focus,
    Enabled,
    ReadOnly,
}

impl StyleInput {
    /// Outputs that must be recomputed when this input changes
    pub const fn dependents(self) -> Outputs {
        match self {
            StyleInput::Theme => Outputs::all(),
            StyleInput::Intent => Outputs::COLORS,
            StyleInput::BorderStyle => Outputs::BORDER_LAYOUT.union(Outputs::SPACINGS),
            StyleInput::Focus => Outputs::COLORS.union(Outputs::BORDER_LAYOUT),
            StyleInput::Enabled => Outputs::COLORS.union(Outputs::DIM),
            StyleInput::ReadOnly => Outputs::COLORS,
        }
    }
}

/// Complete input set of a style engine
///
/// Built up front and handed to a constructor or to `update_all`; nothing is
/// published until then.
#[derive(Clone, Debug)]
pub struct StyleInputs {
    pub theme: SharedTheme,
    pub intent: Intent,
    pub border_style: BorderStyle,
    pub is_focused: bool,
    pub is_enabled: bool,
    pub is_read_only: bool,
}

impl StyleInputs {
    /// Inputs for an enabled, editable, unfocused input
    pub fn new(theme: SharedTheme) -> Self {
        Self {
            theme,
            intent: Intent::default(),
            border_style: BorderStyle::default(),
            is_focused: false,
            is_enabled: true,
            is_read_only: false,
        }
    }

    /// Inputs seeded from configured defaults
    pub fn from_config(theme: SharedTheme, config: &TextInputConfig) -> Self {
        Self {
            intent: config.intent,
            border_style: config.border_style,
            ..Self::new(theme)
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Surface sinks
// ─────────────────────────────────────────────────────────────────────────────

/// Destination of the surface-related outputs (background color and dim)
pub trait SurfaceSink {
    fn publish_colors(&mut self, target: &mut Published<ColorSet>, colors: ColorSet);

    fn publish_dim(&mut self, target: &mut Published<f32>, dim: f32);
}

/// The field owns its background and dim
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSurface;

impl SurfaceSink for FieldSurface {
    fn publish_colors(&mut self, target: &mut Published<ColorSet>, colors: ColorSet) {
        target.set(colors);
    }

    fn publish_dim(&mut self, target: &mut Published<f32>, dim: f32) {
        target.set(dim);
    }
}

/// A wrapping container owns the background and dim
///
/// The field's own `colors.background` is published as clear and its `dim`
/// stays at 1.0; the derived values land here instead.
#[derive(Debug)]
pub struct ContainerSurface {
    background: Published<AnyColorToken>,
    dim: Published<f32>,
}

impl ContainerSurface {
    pub fn new() -> Self {
        Self {
            background: Published::new(clear_color()),
            dim: Published::new(1.0),
        }
    }

    pub fn background(&self) -> &Published<AnyColorToken> {
        &self.background
    }

    pub fn dim(&self) -> &Published<f32> {
        &self.dim
    }
}

impl Default for ContainerSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceSink for ContainerSurface {
    fn publish_colors(&mut self, target: &mut Published<ColorSet>, mut colors: ColorSet) {
        let background = std::mem::replace(&mut colors.background, clear_color());
        self.background.set(background);
        target.set(colors);
    }

    fn publish_dim(&mut self, _target: &mut Published<f32>, dim: f32) {
        self.dim.set(dim);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Inputs and derived outputs shared by every text input
pub struct StyleEngine<U = DefaultStyleUseCases, S = FieldSurface> {
    inputs: StyleInputs,
    use_cases: U,
    surface: S,
    colors: Published<ColorSet>,
    border_layout: Published<BorderLayout>,
    dim: Published<f32>,
    font: Published<FontToken>,
    spacings: Published<Spacings>,
}

impl StyleEngine {
    /// Engine with the default derivations, computed from `inputs`
    pub fn new(inputs: StyleInputs) -> Self {
        Self::with_parts(inputs, DefaultStyleUseCases, FieldSurface)
    }
}

impl<U: StyleUseCases, S: SurfaceSink> StyleEngine<U, S> {
    /// Engine with explicit derivations and surface sink
    ///
    /// Every output is computed and published once before returning.
    pub fn with_parts(inputs: StyleInputs, use_cases: U, surface: S) -> Self {
        let mut engine = Self {
            inputs,
            use_cases,
            surface,
            colors: Published::new(ColorSet::default()),
            border_layout: Published::new(BorderLayout::default()),
            dim: Published::new(1.0),
            font: Published::new(FontToken::default()),
            spacings: Published::new(Spacings::default()),
        };
        engine.recompute(Outputs::all());
        engine
    }

    /// Replace every input and recompute every output
    pub fn update_all(&mut self, inputs: StyleInputs) -> Outputs {
        tracing::debug!(theme = %inputs.theme.name, "style engine bulk update");
        self.inputs = inputs;
        self.recompute(Outputs::all());
        Outputs::all()
    }

    pub fn set_theme(&mut self, theme: SharedTheme) -> Outputs {
        if Theme::same_instance(&self.inputs.theme, &theme) {
            return Outputs::empty();
        }
        tracing::debug!(from = %self.inputs.theme.name, to = %theme.name, "theme replaced");
        self.inputs.theme = theme;
        self.invalidate(StyleInput::Theme)
    }

    pub fn set_intent(&mut self, intent: Intent) -> Outputs {
        if self.inputs.intent == intent {
            return Outputs::empty();
        }
        self.inputs.intent = intent;
        self.invalidate(StyleInput::Intent)
    }

    pub fn set_border_style(&mut self, border_style: BorderStyle) -> Outputs {
        if self.inputs.border_style == border_style {
            return Outputs::empty();
        }
        self.inputs.border_style = border_style;
        self.invalidate(StyleInput::BorderStyle)
    }

    pub fn set_is_focused(&mut self, is_focused: bool) -> Outputs {
        if self.inputs.is_focused == is_focused {
            return Outputs::empty();
        }
        self.inputs.is_focused = is_focused;
        self.invalidate(StyleInput::Focus)
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) -> Outputs {
        if self.inputs.is_enabled == is_enabled {
            return Outputs::empty();
        }
        self.inputs.is_enabled = is_enabled;
        self.invalidate(StyleInput::Enabled)
    }

    pub fn set_is_read_only(&mut self, is_read_only: bool) -> Outputs {
        if self.inputs.is_read_only == is_read_only {
            return Outputs::empty();
        }
        self.inputs.is_read_only = is_read_only;
        self.invalidate(StyleInput::ReadOnly)
    }

    fn invalidate(&mut self, input: StyleInput) -> Outputs {
        let outputs = input.dependents();
        tracing::trace!(?input, ?outputs, "recomputing style outputs");
        self.recompute(outputs);
        outputs
    }

    fn recompute(&mut self, outputs: Outputs) {
        let inputs = &self.inputs;
        let theme: &Theme = &inputs.theme;

        if outputs.contains(Outputs::COLORS) {
            let colors = self.use_cases.colors(
                theme,
                inputs.intent,
                inputs.is_focused,
                inputs.is_enabled,
                inputs.is_read_only,
            );
            self.surface.publish_colors(&mut self.colors, colors);
        }
        if outputs.contains(Outputs::BORDER_LAYOUT) {
            let layout = self
                .use_cases
                .border_layout(theme, inputs.border_style, inputs.is_focused);
            self.border_layout.set(layout);
        }
        if outputs.contains(Outputs::DIM) {
            let dim = self.use_cases.dim(theme, inputs.is_enabled);
            self.surface.publish_dim(&mut self.dim, dim);
        }
        if outputs.contains(Outputs::FONT) {
            self.font.set(self.use_cases.font(theme));
        }
        if outputs.contains(Outputs::SPACINGS) {
            let spacings = self.use_cases.spacings(theme, inputs.border_style);
            self.spacings.set(spacings);
        }
    }
}

impl<U, S> StyleEngine<U, S> {
    pub fn inputs(&self) -> &StyleInputs {
        &self.inputs
    }

    pub fn theme(&self) -> &SharedTheme {
        &self.inputs.theme
    }

    pub fn intent(&self) -> Intent {
        self.inputs.intent
    }

    pub fn border_style(&self) -> BorderStyle {
        self.inputs.border_style
    }

    pub fn is_focused(&self) -> bool {
        self.inputs.is_focused
    }

    pub fn is_enabled(&self) -> bool {
        self.inputs.is_enabled
    }

    pub fn is_read_only(&self) -> bool {
        self.inputs.is_read_only
    }

    pub fn colors(&self) -> &Published<ColorSet> {
        &self.colors
    }

    pub fn border_layout(&self) -> &Published<BorderLayout> {
        &self.border_layout
    }

    pub fn dim(&self) -> &Published<f32> {
        &self.dim
    }

    pub fn font(&self) -> &Published<FontToken> {
        &self.font
    }

    pub fn spacings(&self) -> &Published<Spacings> {
        &self.spacings
    }

    pub fn use_cases(&self) -> &U {
        &self.use_cases
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
