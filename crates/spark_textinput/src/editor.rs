//! Text editor view-model
//!
//! Multi-line editors always draw a rounded border, so the border style is
//! pinned. On top of the engine outputs the editor publishes:
//!
//! - `horizontal_padding`: spacing left after the native text inset
//! - `should_show_placeholder`: driven by [`TextEditorViewModel::content_did_change`],
//!   since the text itself is owned by the host control
//! - `vertical_spacing_trigger`: bumped whenever the font is recomputed; the
//!   view re-measures its height and calls [`TextEditorViewModel::vertical_spacing`]

use spark_core::Published;
use spark_theme::{FontToken, SharedTheme};

use crate::engine::{FieldSurface, Outputs, StyleEngine, StyleInputs};
use crate::types::{BorderLayout, BorderStyle, ColorSet, Intent, Spacings};
use crate::use_cases::{DefaultStyleUseCases, StyleUseCases};

/// Style state of a multi-line text editor
pub struct TextEditorViewModel<U = DefaultStyleUseCases> {
    engine: StyleEngine<U, FieldSurface>,
    horizontal_padding: Published<f32>,
    vertical_spacing_trigger: Published<u64>,
    should_show_placeholder: Published<bool>,
}

impl TextEditorViewModel {
    pub fn new(inputs: StyleInputs) -> Self {
        Self::with_use_cases(inputs, DefaultStyleUseCases)
    }
}

impl<U: StyleUseCases> TextEditorViewModel<U> {
    /// Build the view-model and compute every output once
    ///
    /// `inputs.border_style` is ignored: editors are always rounded.
    pub fn with_use_cases(inputs: StyleInputs, use_cases: U) -> Self {
        let mut view_model = Self {
            engine: StyleEngine::with_parts(pin_border(inputs), use_cases, FieldSurface),
            horizontal_padding: Published::new(0.0),
            vertical_spacing_trigger: Published::new(0),
            should_show_placeholder: Published::new(true),
        };
        view_model.engine_did_update(Outputs::all());
        view_model
    }

    /// Replace every input and recompute every output
    pub fn update_all(&mut self, inputs: StyleInputs) {
        let outputs = self.engine.update_all(pin_border(inputs));
        self.engine_did_update(outputs);
    }

    pub fn set_theme(&mut self, theme: SharedTheme) {
        let outputs = self.engine.set_theme(theme);
        self.engine_did_update(outputs);
    }

    pub fn set_intent(&mut self, intent: Intent) {
        let outputs = self.engine.set_intent(intent);
        self.engine_did_update(outputs);
    }

    pub fn set_is_focused(&mut self, is_focused: bool) {
        let outputs = self.engine.set_is_focused(is_focused);
        self.engine_did_update(outputs);
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) {
        let outputs = self.engine.set_is_enabled(is_enabled);
        self.engine_did_update(outputs);
    }

    pub fn set_is_read_only(&mut self, is_read_only: bool) {
        let outputs = self.engine.set_is_read_only(is_read_only);
        self.engine_did_update(outputs);
    }

    /// Notify the view-model that the host control's text changed
    pub fn content_did_change(&mut self, text: &str) {
        self.should_show_placeholder.set(text.is_empty());
    }

    /// Offset centering one line of the current font in `height`
    pub fn vertical_spacing(&self, height: f32) -> f32 {
        self.engine
            .use_cases()
            .vertical_spacing(height, self.engine.font().get())
    }

    fn engine_did_update(&mut self, outputs: Outputs) {
        if outputs.contains(Outputs::SPACINGS) {
            let padding = self
                .engine
                .use_cases()
                .horizontal_padding(self.engine.spacings().get());
            self.horizontal_padding.set(padding);
        }
        if outputs.contains(Outputs::FONT) {
            let next = self.vertical_spacing_trigger.get().wrapping_add(1);
            self.vertical_spacing_trigger.set(next);
        }
    }
}

impl<U> TextEditorViewModel<U> {
    pub fn engine(&self) -> &StyleEngine<U, FieldSurface> {
        &self.engine
    }

    pub fn theme(&self) -> &SharedTheme {
        self.engine.theme()
    }

    pub fn intent(&self) -> Intent {
        self.engine.intent()
    }

    pub fn is_focused(&self) -> bool {
        self.engine.is_focused()
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    pub fn is_read_only(&self) -> bool {
        self.engine.is_read_only()
    }

    pub fn colors(&self) -> &Published<ColorSet> {
        self.engine.colors()
    }

    pub fn border_layout(&self) -> &Published<BorderLayout> {
        self.engine.border_layout()
    }

    pub fn dim(&self) -> &Published<f32> {
        self.engine.dim()
    }

    pub fn font(&self) -> &Published<FontToken> {
        self.engine.font()
    }

    pub fn spacings(&self) -> &Published<Spacings> {
        self.engine.spacings()
    }

    pub fn horizontal_padding(&self) -> &Published<f32> {
        &self.horizontal_padding
    }

    pub fn vertical_spacing_trigger(&self) -> &Published<u64> {
        &self.vertical_spacing_trigger
    }

    pub fn should_show_placeholder(&self) -> &Published<bool> {
        &self.should_show_placeholder
    }
}

fn pin_border(inputs: StyleInputs) -> StyleInputs {
    if inputs.border_style != BorderStyle::RoundedRect {
        tracing::debug!(
            requested = ?inputs.border_style,
            "text editor border style is always rounded"
        );
    }
    inputs.border_style(BorderStyle::RoundedRect)
}
